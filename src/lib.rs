//! SortFlow Library
//!
//! Capa de aplicación sobre `sortflow-core`:
//! - `config`: configuración desde entorno (`.env`).
//! - `generator`: arrays aleatorios reproducibles para alimentar el engine.
//! - `playback`: calendario de reproducción de una traza a velocidad elegida.
//! - `worker`: ejecución en segundo plano, feed en vivo y lotes paralelos.
//!
//! El render (barras, colores, animación) queda fuera: los clientes
//! consumen `Step`/`SortResult` y los dibujan como quieran.

pub mod config;
pub mod errors;
pub mod generator;
pub mod playback;
pub mod worker;

pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
pub use sortflow_core::{CoreEngineError, CountingSortEngine, SortResult, Step, StepPhase, StepStream};
