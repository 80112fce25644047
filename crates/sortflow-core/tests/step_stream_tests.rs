//! El stream perezoso produce la misma traza que `execute` y respeta el
//! ritmo del consumidor.

use sortflow_core::{CountingSortEngine, OpCounters, StepPhase, StepStream};

#[test]
fn stream_matches_execute_content() {
    let input = [6, 1, 6, 0, 3];
    let mut engine = CountingSortEngine::new();
    let batch = engine.execute(&input).unwrap();
    let streamed = engine.stream(&input).unwrap().finish();

    assert_eq!(streamed.final_array, batch.final_array);
    assert_eq!(streamed.steps.len(), batch.steps.len());
    assert!(streamed.steps.iter().zip(&batch.steps).all(|(a, b)| a.same_content(b)));
    assert_eq!(streamed.trace_fingerprint(), batch.trace_fingerprint());
}

#[test]
fn stream_advances_only_when_pulled() {
    let mut stream = StepStream::new(&[2, 7, 1], 100).unwrap();
    assert_eq!(stream.counters(), OpCounters::default());

    let start = stream.next().unwrap();
    assert_eq!(start.phase, StepPhase::Start);
    assert_eq!(stream.counters(), OpCounters::default());

    let scan = stream.next().unwrap();
    assert_eq!(scan.phase, StepPhase::ScanMax);
    assert_eq!(stream.counters().comparisons, 1);
    assert_eq!(stream.counters().memory_accesses, 1);
    assert!(!stream.is_exhausted());
}

#[test]
fn partial_consumption_then_finish_keeps_only_remaining_steps() {
    let mut stream = StepStream::new(&[3, 1, 2], 100).unwrap();
    let head: Vec<_> = stream.by_ref().take(3).collect();
    let result = stream.finish();

    let mut all = head;
    all.extend(result.steps.iter().cloned());
    let seqs: Vec<u64> = all.iter().map(|s| s.seq).collect();
    assert_eq!(seqs, (0..all.len() as u64).collect::<Vec<_>>());
    assert_eq!(result.final_array, vec![1, 2, 3]);
}

#[test]
fn timestamps_are_monotonic() {
    let steps: Vec<_> = StepStream::new(&[5, 3, 9, 9, 0, 2], 100).unwrap().collect();
    assert!(steps.windows(2).all(|w| w[0].timestamp_ns <= w[1].timestamp_ns));
}

#[test]
fn snapshots_are_owned_copies() {
    let steps: Vec<_> = StepStream::new(&[2, 1], 100).unwrap().collect();
    let places: Vec<_> = steps.iter().filter(|s| s.phase == StepPhase::Place).collect();
    // el primer snapshot de colocación no ve la segunda escritura
    assert_eq!(places[0].array_snapshot, vec![1, 0]);
    assert_eq!(places[1].array_snapshot, vec![1, 2]);
}
