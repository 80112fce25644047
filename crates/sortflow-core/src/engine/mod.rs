//! Engine module for CountingSortEngine implementation
//!
//! Provides the instrumented engine, its builder and the lazy step stream
//! that drives every execution.

pub mod builder;
pub mod core;
pub mod stream;

pub use builder::EngineBuilder;
pub use core::CountingSortEngine;
pub use stream::{validate_input, StepStream};

pub use crate::model::{OpCounters, SortResult};
pub use crate::trace::{InMemoryStepLog, Step, StepLog, StepPhase};
