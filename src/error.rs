/// Result alias carrying the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the application shell. The game core itself has none.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}
