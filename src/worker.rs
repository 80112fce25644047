//! Ejecución fuera del hilo del llamador.
//!
//! El core es síncrono y no cancelable. Aquí se ofrecen tres formas de
//! usarlo sin bloquear a un consumidor (por ejemplo un hilo de UI):
//! - `run_in_background`: una corrida completa en un hilo bloqueante de tokio;
//! - `spawn_live_feed`: los steps viajan por un canal acotado mientras se
//!   producen;
//! - `execute_batch`: varias entradas en paralelo con rayon, una instancia
//!   de engine por entrada.
//!
//! `run_in_background` y `spawn_live_feed` requieren un runtime tokio activo.
use log::debug;
use rayon::prelude::*;
use sortflow_core::{CoreEngineError, CountingSortEngine, SortResult, Step, StepStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::errors::AppError;

/// Ejecuta una corrida completa en un hilo bloqueante y espera su resultado.
pub async fn run_in_background(input: Vec<i64>, max_value: u64) -> Result<SortResult, AppError> {
    let handle = tokio::task::spawn_blocking(move || {
        let mut engine = CountingSortEngine::builder().max_value(max_value).build();
        engine.execute(&input)
    });
    Ok(handle.await??)
}

/// Feed en vivo: receptor de steps + handle con el resultado final.
#[derive(Debug)]
pub struct LiveFeed {
    pub steps: mpsc::Receiver<Step>,
    pub result: JoinHandle<Result<SortResult, CoreEngineError>>,
}

/// Lanza una corrida que envía cada step por un canal de capacidad
/// `capacity`. El productor espera cuando el canal está lleno, así que
/// avanza al ritmo del consumidor.
///
/// La entrada se valida antes de lanzar nada. Si el receptor se descarta,
/// el reenvío se detiene pero la corrida termina igual y el resultado
/// conserva la traza completa.
pub fn spawn_live_feed(input: Vec<i64>, max_value: u64, capacity: usize) -> Result<LiveFeed, AppError> {
    let mut stream = StepStream::new(&input, max_value)?;
    let (tx, rx) = mpsc::channel(capacity.max(1));

    let result = tokio::task::spawn_blocking(move || {
        let run_id = stream.run_id();
        let mut steps = Vec::new();
        let mut forwarding = true;
        for step in stream.by_ref() {
            if forwarding && tx.blocking_send(step.clone()).is_err() {
                debug!("live_feed:receiver_dropped run_id={run_id} seq={}", step.seq);
                forwarding = false;
            }
            steps.push(step);
        }
        stream.into_result(steps)
    });

    Ok(LiveFeed { steps: rx, result })
}

/// Ejecuta cada entrada con su propio engine, en paralelo. El orden de la
/// salida coincide con el de `inputs`.
pub fn execute_batch(inputs: &[Vec<i64>], max_value: u64) -> Vec<Result<SortResult, CoreEngineError>> {
    inputs.par_iter()
          .map(|input| {
              let mut engine = CountingSortEngine::builder().max_value(max_value).build();
              engine.execute(input)
          })
          .collect()
}
