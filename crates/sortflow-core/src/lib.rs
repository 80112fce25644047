//! sortflow-core: motor instrumentado de counting sort.
//!
//! Ejecuta el algoritmo sobre una copia de la entrada y produce una traza
//! completa y reproducible (`Step`) más un resultado agregado
//! (`SortResult`). La traza se consume en vivo (observer o `StepStream`) o
//! en lote desde el resultado.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod observer;
pub mod trace;

pub use engine::{validate_input, CountingSortEngine, EngineBuilder, StepStream};
pub use errors::CoreEngineError;
pub use model::{OpCounters, SortResult};
pub use observer::{CollectingObserver, ObserverError, StepObserver};
pub use trace::{InMemoryStepLog, Step, StepLog, StepPhase};
