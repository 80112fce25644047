//! Productor perezoso de steps.
//!
//! `StepStream` ejecuta el counting sort de a un step por llamada a `next()`.
//! El consumidor tira de la secuencia a su ritmo; el algoritmo no avanza
//! mientras nadie pida el siguiente step. La secuencia es finita y no se
//! puede reiniciar: una vez agotada devuelve siempre `None`.
//!
//! Orden de emisión para una entrada no vacía:
//! `Start`, (`ScanMax` [`NewMax`])*, `Allocate`, `Count`*, `CountDone`,
//! `Place`*, `Complete`. Una entrada vacía emite sólo `Complete`.

use std::iter::FusedIterator;
use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::{ALGORITHM_NAME, COMPLEXITY_LABEL};
use crate::errors::CoreEngineError;
use crate::model::{OpCounters, SortResult};
use crate::trace::{Step, StepPhase};

/// Posición del algoritmo entre dos emisiones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    ScanMax { index: usize },
    NewMax { index: usize },
    Allocate,
    Count { index: usize },
    CountDone,
    Place { value: usize },
    Complete,
    Exhausted,
}

/// Array del que se copia el snapshot de un step.
#[derive(Clone, Copy)]
enum Snapshot {
    Source,
    Output,
}

/// Valida la entrada completa antes de reservar nada.
///
/// Rechaza valores negativos (corromperían el índice de la tabla de
/// frecuencias) y valores por encima de `max_value`.
pub fn validate_input(input: &[i64], max_value: u64) -> Result<Vec<u64>, CoreEngineError> {
    input.iter()
         .enumerate()
         .map(|(index, &value)| {
             let unsigned = u64::try_from(value).map_err(|_| CoreEngineError::InvalidInput {
                 index,
                 value,
                 reason: "negative values cannot index the frequency table".into(),
             })?;
             if unsigned > max_value || usize::try_from(unsigned).is_err() {
                 return Err(CoreEngineError::InvalidInput { index,
                                                            value,
                                                            reason: format!("exceeds the supported maximum {max_value}") });
             }
             Ok(unsigned)
         })
         .collect()
}

/// Reserva la tabla de frecuencias (`max + 1` posiciones) antes de emitir
/// el primer step. Si el sistema no puede reservarla, el valor máximo se
/// reporta como `InvalidInput` y la corrida no empieza.
fn reserve_frequency_table(input: &[i64], source: &[u64]) -> Result<Vec<u64>, CoreEngineError> {
    let mut frequency = Vec::new();
    let Some((index, &max)) = source.iter().enumerate().max_by_key(|(_, v)| **v) else {
        return Ok(frequency);
    };
    // validate_input garantiza que max cabe en usize
    let size = (max as usize).checked_add(1);
    let reserved = match size {
        Some(size) => frequency.try_reserve_exact(size).map_err(|e| e.to_string()),
        None => Err("frequency table size overflows usize".to_string()),
    };
    reserved.map_err(|reason| CoreEngineError::InvalidInput { index,
                                                               value: input[index],
                                                               reason: format!("cannot allocate the frequency table: {reason}") })?;
    Ok(frequency)
}

#[derive(Debug)]
pub struct StepStream {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    clock: Instant,
    source: Vec<u64>,
    output: Vec<u64>,
    frequency: Vec<u64>,
    max: u64,
    position: usize,
    counters: OpCounters,
    cursor: Cursor,
    seq: u64,
}

impl StepStream {
    /// Valida `input` y prepara una corrida sobre una copia propia.
    /// Ningún step se emite hasta la primera llamada a `next()`.
    pub fn new(input: &[i64], max_value: u64) -> Result<Self, CoreEngineError> {
        let source = validate_input(input, max_value)?;
        let frequency = reserve_frequency_table(input, &source)?;
        Ok(Self { run_id: Uuid::new_v4(),
                  started_at: Utc::now(),
                  clock: Instant::now(),
                  source,
                  output: Vec::new(),
                  frequency,
                  max: 0,
                  position: 0,
                  counters: OpCounters::new(),
                  cursor: Cursor::Start,
                  seq: 0 })
    }

    pub fn run_id(&self) -> Uuid { self.run_id }

    /// Contadores acumulados hasta el último step emitido.
    pub fn counters(&self) -> OpCounters { self.counters }

    /// Longitud de la entrada (y de cada snapshot).
    pub fn input_len(&self) -> usize { self.source.len() }

    pub fn is_exhausted(&self) -> bool { self.cursor == Cursor::Exhausted }

    /// Ensambla el resultado a partir de los steps ya consumidos.
    ///
    /// Falla con `StreamNotFinished` si el stream todavía tiene steps
    /// pendientes.
    pub fn into_result(self, steps: Vec<Step>) -> Result<SortResult, CoreEngineError> {
        if !self.is_exhausted() {
            return Err(CoreEngineError::StreamNotFinished);
        }
        Ok(self.assemble(steps))
    }

    /// Consume lo que falte y devuelve el resultado completo.
    pub fn finish(mut self) -> SortResult {
        let steps: Vec<Step> = self.by_ref().collect();
        self.assemble(steps)
    }

    fn assemble(self, steps: Vec<Step>) -> SortResult {
        let elapsed_time_ms = u64::try_from(self.clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        SortResult { run_id: self.run_id,
                     started_at: self.started_at,
                     algorithm_name: ALGORITHM_NAME.to_string(),
                     final_array: self.output,
                     elapsed_time_ms,
                     comparisons: self.counters.comparisons,
                     swaps: self.counters.swaps,
                     memory_accesses: self.counters.memory_accesses,
                     complexity_label: COMPLEXITY_LABEL.to_string(),
                     steps }
    }

    fn emit(&mut self,
            phase: StepPhase,
            description: String,
            primary_index: Option<usize>,
            secondary_index: Option<usize>,
            snapshot: Snapshot,
            is_milestone: bool)
            -> Step {
        let array_snapshot = match snapshot {
            Snapshot::Source => self.source.clone(),
            Snapshot::Output => self.output.clone(),
        };
        let step = Step { seq: self.seq,
                          algorithm_name: ALGORITHM_NAME.to_string(),
                          phase,
                          description,
                          primary_index,
                          secondary_index,
                          timestamp_ns: u64::try_from(self.clock.elapsed().as_nanos()).unwrap_or(u64::MAX),
                          comparisons: self.counters.comparisons,
                          swaps: self.counters.swaps,
                          memory_accesses: self.counters.memory_accesses,
                          array_snapshot,
                          is_milestone };
        self.seq += 1;
        step
    }
}

impl Iterator for StepStream {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match self.cursor {
                Cursor::Start => {
                    if self.source.is_empty() {
                        self.cursor = Cursor::Exhausted;
                        return Some(self.emit(StepPhase::Complete,
                                              format!("{ALGORITHM_NAME} completed"),
                                              None,
                                              None,
                                              Snapshot::Output,
                                              true));
                    }
                    self.max = self.source[0];
                    self.cursor = Cursor::ScanMax { index: 1 };
                    return Some(self.emit(StepPhase::Start,
                                          format!("Starting {ALGORITHM_NAME}"),
                                          None,
                                          None,
                                          Snapshot::Source,
                                          true));
                }
                Cursor::ScanMax { index } => {
                    let Some(&value) = self.source.get(index) else {
                        self.cursor = Cursor::Allocate;
                        continue;
                    };
                    self.counters.record_memory_access();
                    self.counters.record_comparison();
                    self.cursor = if value > self.max {
                        self.max = value;
                        Cursor::NewMax { index }
                    } else {
                        Cursor::ScanMax { index: index + 1 }
                    };
                    return Some(self.emit(StepPhase::ScanMax,
                                          format!("Inspecting element {value} to find the maximum"),
                                          Some(index),
                                          None,
                                          Snapshot::Source,
                                          true));
                }
                Cursor::NewMax { index } => {
                    self.cursor = Cursor::ScanMax { index: index + 1 };
                    let max = self.max;
                    return Some(self.emit(StepPhase::NewMax,
                                          format!("New maximum found: {max}"),
                                          Some(index),
                                          None,
                                          Snapshot::Source,
                                          true));
                }
                Cursor::Allocate => {
                    // la capacidad ya se reservó en StepStream::new
                    let size = self.max as usize + 1;
                    self.frequency.resize(size, 0);
                    self.cursor = Cursor::Count { index: 0 };
                    return Some(self.emit(StepPhase::Allocate,
                                          format!("Created count array of size {size}"),
                                          None,
                                          None,
                                          Snapshot::Source,
                                          true));
                }
                Cursor::Count { index } => {
                    let Some(&value) = self.source.get(index) else {
                        self.cursor = Cursor::CountDone;
                        continue;
                    };
                    self.frequency[value as usize] += 1;
                    self.counters.record_memory_access();
                    self.cursor = Cursor::Count { index: index + 1 };
                    return Some(self.emit(StepPhase::Count,
                                          format!("Counting element {value}"),
                                          Some(index),
                                          None,
                                          Snapshot::Source,
                                          false));
                }
                Cursor::CountDone => {
                    self.output = vec![0; self.source.len()];
                    self.cursor = Cursor::Place { value: 0 };
                    return Some(self.emit(StepPhase::CountDone,
                                          "Counting phase completed".to_string(),
                                          None,
                                          None,
                                          Snapshot::Source,
                                          true));
                }
                Cursor::Place { value } => {
                    match self.frequency.get_mut(value) {
                        None => {
                            self.cursor = Cursor::Complete;
                            continue;
                        }
                        Some(0) => {
                            self.cursor = Cursor::Place { value: value + 1 };
                            continue;
                        }
                        Some(remaining) => *remaining -= 1,
                    }
                    let position = self.position;
                    self.output[position] = value as u64;
                    self.position += 1;
                    self.counters.record_memory_access();
                    return Some(self.emit(StepPhase::Place,
                                          format!("Placing element {value} at position {position}"),
                                          None,
                                          Some(position),
                                          Snapshot::Output,
                                          true));
                }
                Cursor::Complete => {
                    self.cursor = Cursor::Exhausted;
                    return Some(self.emit(StepPhase::Complete,
                                          format!("{ALGORITHM_NAME} completed"),
                                          None,
                                          None,
                                          Snapshot::Output,
                                          true));
                }
                Cursor::Exhausted => return None,
            }
        }
    }
}

impl FusedIterator for StepStream {}
