//! Registration lifecycle for the focus-or-launch D-Bus service.

use std::sync::Arc;

use focusd_domain::FocusOrLaunchService;
use tokio::sync::Mutex;
use zbus::Connection;

use crate::dbus::interface::{FocusOrLaunchInterface, OBJECT_PATH, SERVICE_NAME};
use crate::error::SystemError;

/// Owns the D-Bus side of the focus-or-launch service.
///
/// The server moves between exactly two states, unregistered and registered.
/// [`FocusOrLaunchServer::start`] guards against re-registration (a second
/// call logs and returns without producing a second live export) and
/// [`FocusOrLaunchServer::stop`] is a safe no-op when there is nothing to
/// tear down.
pub struct FocusOrLaunchServer {
    connection: Arc<Connection>,
    service: Arc<FocusOrLaunchService>,
    registered: Mutex<bool>,
}

impl FocusOrLaunchServer {
    /// Creates a server over an established session-bus connection and the
    /// domain service it exposes. No bus activity happens until `start()`.
    pub fn new(connection: Arc<Connection>, service: Arc<FocusOrLaunchService>) -> Self {
        Self {
            connection,
            service,
            registered: Mutex::new(false),
        }
    }

    /// Connects to the session bus and wraps the connection in a server.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::ConnectionFailed` when the session bus is not
    /// reachable.
    pub async fn connect(service: Arc<FocusOrLaunchService>) -> Result<Self, SystemError> {
        let connection = Connection::session()
            .await
            .map_err(SystemError::ConnectionFailed)?;
        tracing::info!(
            "Connected to the D-Bus session bus. Unique name: {}",
            connection
                .unique_name()
                .map_or_else(|| "<unknown>".to_string(), |n| n.to_string())
        );
        Ok(Self::new(Arc::new(connection), service))
    }

    /// Exports the interface at [`OBJECT_PATH`] and claims [`SERVICE_NAME`].
    ///
    /// Calling `start()` on an already registered server keeps the existing
    /// export: a single method call from a client is delivered exactly once.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::ServeAtFailed` or `SystemError::NameRequestFailed`
    /// when the object server or the bus refuses the registration.
    pub async fn start(&self) -> Result<(), SystemError> {
        let mut registered = self.registered.lock().await;
        if *registered {
            tracing::warn!(
                "start() called while {} is already exported, keeping existing registration",
                SERVICE_NAME
            );
            return Ok(());
        }

        let added = self
            .connection
            .object_server()
            .at(
                OBJECT_PATH,
                FocusOrLaunchInterface::new(self.service.clone()),
            )
            .await
            .map_err(|e| SystemError::ServeAtFailed {
                path: OBJECT_PATH.to_string(),
                source: e,
            })?;
        if !added {
            // The object server already holds this interface at the path;
            // there is still only one live export.
            tracing::warn!("interface already present at {}, reusing it", OBJECT_PATH);
        }

        self.connection
            .request_name(SERVICE_NAME)
            .await
            .map_err(|e| SystemError::NameRequestFailed {
                name: SERVICE_NAME.to_string(),
                source: e,
            })?;

        *registered = true;
        tracing::info!("FocusOrLaunch exported at {} as {}", OBJECT_PATH, SERVICE_NAME);
        Ok(())
    }

    /// Releases [`SERVICE_NAME`] and removes the interface from the object
    /// server. A no-op when the server was never started or is already
    /// stopped.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::NameReleaseFailed` or `SystemError::RemoveFailed`
    /// when the bus refuses the teardown of an existing registration.
    pub async fn stop(&self) -> Result<(), SystemError> {
        let mut registered = self.registered.lock().await;
        if !*registered {
            tracing::debug!("stop() called while not registered, nothing to do");
            return Ok(());
        }

        self.connection
            .release_name(SERVICE_NAME)
            .await
            .map_err(|e| SystemError::NameReleaseFailed {
                name: SERVICE_NAME.to_string(),
                source: e,
            })?;

        self.connection
            .object_server()
            .remove::<FocusOrLaunchInterface, _>(OBJECT_PATH)
            .await
            .map_err(|e| SystemError::RemoveFailed {
                path: OBJECT_PATH.to_string(),
                source: e,
            })?;

        *registered = false;
        tracing::info!("FocusOrLaunch unexported from {}", OBJECT_PATH);
        Ok(())
    }
}
