//! Escenarios concretos del engine: entrada vacía, un elemento, fixture de
//! regresión e idempotencia.

use sortflow_core::{CoreEngineError, CountingSortEngine, StepPhase};

#[test]
fn empty_input_yields_single_completion_milestone() {
    let mut engine = CountingSortEngine::new();
    let result = engine.execute(&[]).unwrap();

    assert!(result.final_array.is_empty());
    assert_eq!(result.steps.len(), 1);
    let only = &result.steps[0];
    assert_eq!(only.phase, StepPhase::Complete);
    assert!(only.is_milestone);
    assert!(only.array_snapshot.is_empty());
    assert_eq!((result.comparisons, result.swaps, result.memory_accesses), (0, 0, 0));
}

#[test]
fn single_element_has_no_comparisons_but_all_phases() {
    let mut engine = CountingSortEngine::new();
    let result = engine.execute(&[5]).unwrap();

    assert_eq!(result.final_array, vec![5]);
    assert_eq!(result.comparisons, 0);
    // un conteo + una colocación
    assert_eq!(result.memory_accesses, 2);

    let phases: Vec<StepPhase> = result.steps.iter().map(|s| s.phase).collect();
    assert_eq!(phases,
               vec![StepPhase::Start,
                    StepPhase::Allocate,
                    StepPhase::Count,
                    StepPhase::CountDone,
                    StepPhase::Place,
                    StepPhase::Complete]);
    assert_eq!(result.steps[1].description, "Created count array of size 6");
}

#[test]
fn regression_fixture_counts() {
    let mut engine = CountingSortEngine::new();
    let result = engine.execute(&[4, 2, 2, 8, 3, 3, 1]).unwrap();

    assert_eq!(result.final_array, vec![1, 2, 2, 3, 3, 4, 8]);
    assert_eq!(result.comparisons, 6);
    assert_eq!(result.memory_accesses, 6 + 7 + 7);
    assert_eq!(result.milestones().count(), 25 - 7);

    let last = result.steps.last().unwrap();
    assert_eq!(last.comparisons, result.comparisons);
    assert_eq!(last.swaps, result.swaps);
    assert_eq!(last.memory_accesses, result.memory_accesses);
    assert_eq!(last.array_snapshot, result.final_array);
    assert_eq!(result.to_string(),
               format!("Result: time={}ms, comparisons=6, swaps=0, accesses=20, complexity=O(n)",
                       result.elapsed_time_ms));
}

#[test]
fn scan_and_count_steps_point_at_source_positions() {
    let mut engine = CountingSortEngine::new();
    let result = engine.execute(&[1, 9, 4]).unwrap();

    let scans: Vec<Option<usize>> = result.steps
                                          .iter()
                                          .filter(|s| s.phase == StepPhase::ScanMax)
                                          .map(|s| s.primary_index)
                                          .collect();
    assert_eq!(scans, vec![Some(1), Some(2)]);

    let counts: Vec<&str> = result.steps
                                  .iter()
                                  .filter(|s| s.phase == StepPhase::Count)
                                  .map(|s| s.description.as_str())
                                  .collect();
    assert_eq!(counts, vec!["Counting element 1", "Counting element 9", "Counting element 4"]);
    assert!(result.steps
                  .iter()
                  .filter(|s| s.phase == StepPhase::Count)
                  .all(|s| !s.is_milestone && s.array_snapshot == vec![1, 9, 4]));
}

#[test]
fn idempotent_across_fresh_engines() {
    let input = [9, 0, 4, 4, 7, 1, 0];
    let a = CountingSortEngine::new().execute(&input).unwrap();
    let b = CountingSortEngine::new().execute(&input).unwrap();

    assert_eq!(a.final_array, b.final_array);
    assert_eq!((a.comparisons, a.swaps, a.memory_accesses), (b.comparisons, b.swaps, b.memory_accesses));
    assert_eq!(a.steps.len(), b.steps.len());
    assert!(a.steps.iter().zip(&b.steps).all(|(x, y)| x.same_content(y)));
    assert_eq!(a.trace_fingerprint(), b.trace_fingerprint());
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn different_inputs_have_different_fingerprints() {
    let mut engine = CountingSortEngine::new();
    let a = engine.execute(&[1, 2]).unwrap();
    let b = engine.execute(&[2, 1]).unwrap();
    assert_eq!(a.final_array, b.final_array);
    assert_ne!(a.trace_fingerprint(), b.trace_fingerprint());
}

#[test]
fn negative_value_is_rejected_before_any_step() {
    let mut engine = CountingSortEngine::new();
    let err = engine.execute(&[3, 2, -1]).unwrap_err();
    assert_eq!(err.to_string(), "invalid input at index 2 (value -1): negative values cannot index the frequency table");
    assert!(engine.steps().is_empty());
    assert!(matches!(err, CoreEngineError::InvalidInput { .. }));
}

#[test]
fn result_serializes_with_optional_indices() {
    let mut engine = CountingSortEngine::new();
    let result = engine.execute(&[1, 0]).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["steps"][0]["primary_index"], serde_json::Value::Null);
    assert_eq!(value["steps"][0]["phase"], "Start");
    let back: sortflow_core::SortResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}
