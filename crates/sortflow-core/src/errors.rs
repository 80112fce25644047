//! Errores específicos del core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    /// Un valor de la entrada no puede indexar la tabla de frecuencias.
    #[error("invalid input at index {index} (value {value}): {reason}")]
    InvalidInput { index: usize, value: i64, reason: String },
    /// El observer registrado rechazó el step `seq`; la ejecución se corta ahí.
    #[error("observer failed on step {seq}: {reason}")]
    ObserverFailure { seq: u64, reason: String },
    #[error("step stream has not been fully consumed")]
    StreamNotFinished,
}
