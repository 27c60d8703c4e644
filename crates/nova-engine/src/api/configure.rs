use thiserror::Error;
use tokio::sync::oneshot;

use crate::config::EngineConfig;

/// Why a configuration was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigureError {
    #[error("could not create game window: {0}")]
    WindowCreation(String),
    #[error("engine host went away before acknowledging the configuration")]
    HostGone,
}

/// One-shot configuration acceptance function handed to the load callback.
///
/// [`call`](Self::call) consumes the handle, so a game can configure the
/// engine at most once.
#[derive(Debug)]
pub struct Configure {
    tx: oneshot::Sender<ConfigureRequest>,
}

/// Host-side half of a pending [`Configure::call`].
#[derive(Debug)]
pub struct ConfigureRequest {
    pub config: EngineConfig,
    ack: oneshot::Sender<Result<(), ConfigureError>>,
}

/// Receiving end the host polls for a configuration request.
pub type PendingConfigure = oneshot::Receiver<ConfigureRequest>;

/// Creates a connected `Configure` / pending-request pair.
pub fn configure_channel() -> (Configure, PendingConfigure) {
    let (tx, rx) = oneshot::channel();
    (Configure { tx }, rx)
}

impl Configure {
    /// Hands `config` to the host and resolves once it has been applied.
    pub async fn call(self, config: EngineConfig) -> Result<(), ConfigureError> {
        let (ack, done) = oneshot::channel();

        self.tx
            .send(ConfigureRequest { config, ack })
            .map_err(|_| ConfigureError::HostGone)?;

        done.await.map_err(|_| ConfigureError::HostGone)?
    }
}

impl ConfigureRequest {
    /// Resolves (or rejects) the waiting `Configure::call`.
    pub fn ack(self, result: Result<(), ConfigureError>) {
        // The caller may have been dropped in the meantime; nothing to resolve then.
        let _ = self.ack.send(result);
    }
}
