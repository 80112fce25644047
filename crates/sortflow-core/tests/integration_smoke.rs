use sortflow_core::{CollectingObserver, CountingSortEngine, Step, StepLog, StepPhase};

/// Log que sólo conserva milestones, para verificar que el engine funciona
/// con cualquier implementación de `StepLog`.
#[derive(Debug, Default)]
struct MilestoneOnlyLog {
    inner: Vec<Step>,
    cleared: usize,
}

impl StepLog for MilestoneOnlyLog {
    fn append(&mut self, step: Step) {
        if step.is_milestone {
            self.inner.push(step);
        }
    }
    fn list(&self) -> Vec<Step> { self.inner.clone() }
    fn clear(&mut self) {
        self.cleared += 1;
        self.inner.clear();
    }
    fn len(&self) -> usize { self.inner.len() }
}

#[test]
fn integration_smoke_custom_log_and_engine() {
    let mut engine = CountingSortEngine::builder().step_log(MilestoneOnlyLog::default()).build();

    let result = engine.execute(&[3, 3, 0]).expect("run should complete");
    assert_eq!(result.final_array, vec![0, 3, 3]);
    // el log descarta los Count, el resultado conserva la traza completa
    assert!(engine.step_log().list().iter().all(|s| s.is_milestone));
    assert_eq!(result.steps.iter().filter(|s| s.phase == StepPhase::Count).count(), 3);
    assert_eq!(engine.step_log().len(), result.milestones().count());
    assert_eq!(engine.step_log().cleared, 1);

    engine.execute(&[1]).unwrap();
    assert_eq!(engine.step_log().cleared, 2);
}

/// Log que no guarda nada.
#[derive(Debug, Default)]
struct DiscardingLog;

impl StepLog for DiscardingLog {
    fn append(&mut self, _step: Step) {}
    fn list(&self) -> Vec<Step> { Vec::new() }
    fn clear(&mut self) {}
    fn len(&self) -> usize { 0 }
}

#[test]
fn result_keeps_full_trace_with_discarding_log() {
    let observer = CollectingObserver::new();
    let mut engine = CountingSortEngine::builder().step_log(DiscardingLog)
                                                  .observer(observer.clone())
                                                  .build();

    let result = engine.execute(&[3, 1, 2]).expect("run should complete");
    assert_eq!(result.final_array, vec![1, 2, 3]);
    assert_eq!(result.memory_accesses, 8);
    assert!(engine.steps().is_empty());
    // Start, 2 ScanMax, Allocate, 3 Count, CountDone, 3 Place, Complete
    assert_eq!(result.steps.len(), 12);
    assert_eq!(observer.snapshot(), result.steps);
    let last = result.steps.last().unwrap();
    assert_eq!(last.memory_accesses, result.memory_accesses);
}
