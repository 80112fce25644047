use sortflow::playback::{base_delay_ms, PlaybackSchedule, MINOR_STEP_FACTOR};
use sortflow::CountingSortEngine;

#[test]
fn schedule_follows_milestone_pacing() {
    let result = CountingSortEngine::new().execute(&[4, 2, 2, 8, 3, 3, 1]).unwrap();
    let schedule = PlaybackSchedule::build(&result.steps, 5);

    let base = base_delay_ms(result.steps.len(), 5);
    assert_eq!(schedule.base_delay_ms, base);
    assert_eq!(schedule.frames.len(), result.steps.len());
    assert_eq!(schedule.frames[0].at_ms, 0.0);

    // 18 milestones y 7 conteos
    let expected_total = 18.0 * base + 7.0 * base * MINOR_STEP_FACTOR + base;
    assert!((schedule.total_duration_ms() - expected_total).abs() < 1e-9);

    for (frame, step) in schedule.frames.windows(2).zip(&result.steps) {
        let gap = frame[1].at_ms - frame[0].at_ms;
        let expected = if step.is_milestone { base } else { base * MINOR_STEP_FACTOR };
        assert!((gap - expected).abs() < 1e-9);
    }
}

#[test]
fn progress_reaches_one_on_last_step() {
    let result = CountingSortEngine::new().execute(&[3, 1, 2]).unwrap();
    let schedule = PlaybackSchedule::build(&result.steps, 10);
    let last = schedule.frames.last().unwrap();
    assert_eq!(last.step_index, Some(result.steps.len() - 1));
    assert!((last.progress - 1.0).abs() < 1e-12);
    assert!(schedule.frames.windows(2).all(|w| w[0].progress < w[1].progress));
    assert_eq!(schedule.final_frame.step_index, None);
    assert!(schedule.final_frame.at_ms > last.at_ms);
}

#[test]
fn long_traces_play_faster_per_step() {
    let input: Vec<i64> = (0..80).rev().collect();
    let result = CountingSortEngine::new().execute(&input).unwrap();
    assert!(result.steps.len() > 100);
    let schedule = PlaybackSchedule::build(&result.steps, 5);
    assert!(schedule.base_delay_ms < base_delay_ms(10, 5));
}
