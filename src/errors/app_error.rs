use sortflow_core::CoreEngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del motor: {0}")]
    Engine(#[from] CoreEngineError),
    #[error("Error del worker: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// `true` si el error proviene de una entrada rechazada por el engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::Engine(CoreEngineError::InvalidInput { .. }))
    }
}
