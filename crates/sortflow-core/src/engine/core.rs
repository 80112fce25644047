//! Core CountingSortEngine implementation

use std::fmt;

use log::{debug, warn};

use crate::constants::{DEFAULT_MAX_VALUE, MAX_VALUE_LIMIT};
use crate::engine::{EngineBuilder, StepStream};
use crate::errors::CoreEngineError;
use crate::model::SortResult;
use crate::observer::StepObserver;
use crate::trace::{InMemoryStepLog, Step, StepLog};

/// Motor de ejecución instrumentado
///
/// Ejecuta counting sort sobre una copia de la entrada, registra cada step en
/// su log interno y lo entrega al observer (si hay uno) antes de avanzar.
/// Los contadores viven en el `StepStream` de cada corrida; el único estado
/// mutable de la instancia es el log, que se vacía al inicio de cada
/// `execute`. No usar la misma instancia desde varios hilos a la vez.
pub struct CountingSortEngine<L = InMemoryStepLog>
    where L: StepLog
{
    step_log: L,
    observer: Option<Box<dyn StepObserver>>,
    max_value: u64,
}

impl CountingSortEngine<InMemoryStepLog> {
    /// Crea un engine con log en memoria, sin observer y con el límite por
    /// defecto.
    #[inline]
    pub fn new() -> Self {
        Self::new_with_log(InMemoryStepLog::default(), DEFAULT_MAX_VALUE)
    }

    /// Crea un nuevo builder para configurar el engine
    #[inline]
    pub fn builder() -> EngineBuilder<InMemoryStepLog> {
        EngineBuilder::new()
    }
}

impl Default for CountingSortEngine<InMemoryStepLog> {
    fn default() -> Self { Self::new() }
}

impl<L> CountingSortEngine<L> where L: StepLog
{
    /// Crea un nuevo motor con el log proporcionado. `max_value` se recorta a
    /// `MAX_VALUE_LIMIT`.
    pub fn new_with_log(step_log: L, max_value: u64) -> Self {
        Self { step_log,
               observer: None,
               max_value: max_value.min(MAX_VALUE_LIMIT) }
    }

    /// Registra el observer, reemplazando cualquier registro previo.
    pub fn set_observer<O>(&mut self, observer: O)
        where O: StepObserver + 'static
    {
        self.observer = Some(Box::new(observer));
    }

    pub(crate) fn set_boxed_observer(&mut self, observer: Option<Box<dyn StepObserver>>) {
        self.observer = observer;
    }

    /// Quita el observer registrado (si existe).
    pub fn clear_observer(&mut self) { self.observer = None; }

    pub fn has_observer(&self) -> bool { self.observer.is_some() }

    pub fn max_value(&self) -> u64 { self.max_value }

    /// Steps de la última ejecución (orden de emisión).
    pub fn steps(&self) -> Vec<Step> { self.step_log.list() }

    /// Acceso de sólo lectura al log
    pub fn step_log(&self) -> &L { &self.step_log }

    /// Stream perezoso independiente del log y del observer de la instancia.
    pub fn stream(&self, input: &[i64]) -> Result<StepStream, CoreEngineError> {
        StepStream::new(input, self.max_value)
    }

    /// Ejecuta counting sort sobre `input` y devuelve el resultado completo.
    ///
    /// `input` no se modifica. Una entrada inválida se rechaza antes de
    /// emitir cualquier step; un error del observer corta la ejecución en el
    /// step que lo provocó (ese step queda en el log).
    pub fn execute(&mut self, input: &[i64]) -> Result<SortResult, CoreEngineError> {
        self.step_log.clear();

        let mut stream = StepStream::new(input, self.max_value)
            .inspect_err(|e| warn!("execute:rejected len={} err={e}", input.len()))?;
        let run_id = stream.run_id();
        debug!("execute:start run_id={run_id} len={}", input.len());

        let mut steps = Vec::new();
        for step in stream.by_ref() {
            let notified = match self.observer.as_mut() {
                Some(observer) => observer.on_step(&step),
                None => Ok(()),
            };
            let seq = step.seq;
            self.step_log.append(step.clone());
            steps.push(step);
            if let Err(err) = notified {
                warn!("execute:observer_failed run_id={run_id} seq={seq} err={err}");
                return Err(CoreEngineError::ObserverFailure { seq,
                                                              reason: err.to_string() });
            }
        }

        // el resultado lleva la traza completa aunque el log descarte steps
        let result = stream.into_result(steps)?;
        debug!("execute:done run_id={run_id} steps={} comparisons={} accesses={} elapsed_ms={}",
               result.steps.len(),
               result.comparisons,
               result.memory_accesses,
               result.elapsed_time_ms);
        Ok(result)
    }
}

impl<L> fmt::Debug for CountingSortEngine<L> where L: StepLog + fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingSortEngine")
         .field("step_log", &self.step_log)
         .field("has_observer", &self.observer.is_some())
         .field("max_value", &self.max_value)
         .finish()
    }
}
