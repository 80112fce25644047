//! Builder para `CountingSortEngine`.
//!
//! Permite fijar el límite de valores aceptados, el observer y la
//! implementación de `StepLog` antes de construir el engine.
//!
//! ```ignore
//! let mut engine = CountingSortEngine::builder()
//!     .max_value(1_000)
//!     .observer(|step: &Step| { println!("{}", step.description); Ok(()) })
//!     .build();
//! ```

use crate::constants::{DEFAULT_MAX_VALUE, MAX_VALUE_LIMIT};
use crate::engine::CountingSortEngine;
use crate::observer::StepObserver;
use crate::trace::{InMemoryStepLog, StepLog};

pub struct EngineBuilder<L: StepLog> {
    step_log: L,
    observer: Option<Box<dyn StepObserver>>,
    max_value: u64,
}

impl EngineBuilder<InMemoryStepLog> {
    pub fn new() -> Self {
        Self { step_log: InMemoryStepLog::default(),
               observer: None,
               max_value: DEFAULT_MAX_VALUE }
    }
}

impl Default for EngineBuilder<InMemoryStepLog> {
    fn default() -> Self { Self::new() }
}

impl<L: StepLog> EngineBuilder<L> {
    /// Valor máximo aceptado en la entrada (inclusive), recortado a
    /// `MAX_VALUE_LIMIT`.
    #[inline]
    pub fn max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value.min(MAX_VALUE_LIMIT);
        self
    }

    /// Registra el observer; una segunda llamada reemplaza a la primera.
    #[inline]
    pub fn observer<O>(mut self, observer: O) -> Self
        where O: StepObserver + 'static
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Cambia la implementación del log. Consume el builder porque cambia su
    /// parámetro de tipo.
    #[inline]
    pub fn step_log<M: StepLog>(self, step_log: M) -> EngineBuilder<M> {
        EngineBuilder { step_log,
                        observer: self.observer,
                        max_value: self.max_value }
    }

    #[inline]
    pub fn build(self) -> CountingSortEngine<L> {
        let mut engine = CountingSortEngine::new_with_log(self.step_log, self.max_value);
        engine.set_boxed_observer(self.observer);
        engine
    }
}
