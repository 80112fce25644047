//! Canal de observación en vivo.
//!
//! El observer recibe cada `Step` de forma síncrona, en orden de emisión,
//! antes de que el engine avance a la siguiente operación. No hay buffer ni
//! descarte: el engine corre tan rápido como el observer consume.
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::trace::Step;

/// Error devuelto por un observer. El engine lo propaga como
/// `CoreEngineError::ObserverFailure`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(reason: impl Into<String>) -> Self { Self(reason.into()) }
}

/// Consumidor de steps en vivo.
pub trait StepObserver: Send {
    fn on_step(&mut self, step: &Step) -> Result<(), ObserverError>;
}

impl<F> StepObserver for F where F: FnMut(&Step) -> Result<(), ObserverError> + Send
{
    fn on_step(&mut self, step: &Step) -> Result<(), ObserverError> { self(step) }
}

/// Observer que copia cada step en un buffer compartido.
///
/// Útil cuando el llamador quiere conservar el feed en vivo y a la vez
/// registrar el observer dentro del engine (que toma ownership).
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    buffer: Arc<Mutex<Vec<Step>>>,
}

impl CollectingObserver {
    pub fn new() -> Self { Self::default() }

    /// Copia de los steps recibidos hasta ahora.
    pub fn snapshot(&self) -> Vec<Step> {
        match self.buffer.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl StepObserver for CollectingObserver {
    fn on_step(&mut self, step: &Step) -> Result<(), ObserverError> {
        let mut guard = self.buffer.lock().map_err(|_| ObserverError::new("collecting buffer poisoned"))?;
        guard.push(step.clone());
        Ok(())
    }
}
