//! Registro de steps: el valor `Step` y el log ordenado `StepLog`.

mod store;
mod types;

pub use store::{InMemoryStepLog, StepLog};
pub use types::{Step, StepPhase};
