//! Calendario de reproducción de una traza.
//!
//! El engine corre sin pausas; la animación ocurre después, a una velocidad
//! independiente del tiempo real de ejecución. Este módulo calcula en qué
//! instante mostrar cada step para una velocidad 1..=10:
//! - demora base `max(50, 2500 / speed / d)` ms, con `d = ln(n)` cuando hay
//!   más de 100 steps (trazas largas se aceleran) y `d = 1` en otro caso;
//! - los milestones duran la demora base, los steps de grano fino la mitad;
//! - un frame final, una demora base después del último step, muestra el
//!   array ordenado.
use serde::Serialize;
use sortflow_core::Step;

use crate::config::SPEED_RANGE;

pub const MIN_BASE_DELAY_MS: f64 = 50.0;
pub const BASE_BUDGET_MS: f64 = 2500.0;
pub const MINOR_STEP_FACTOR: f64 = 0.5;
/// A partir de este número de steps la demora se divide por `ln(n)`.
pub const LOG_SCALE_THRESHOLD: usize = 100;

pub const SPEED_LABELS: [&str; 5] = ["Very slow", "Slow", "Normal", "Fast", "Very fast"];

pub fn clamp_speed(speed: u8) -> u8 { speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1) }

pub fn base_delay_ms(step_count: usize, speed: u8) -> f64 {
    let speed = f64::from(clamp_speed(speed));
    let divisor = if step_count > LOG_SCALE_THRESHOLD { (step_count as f64).ln() } else { 1.0 };
    (BASE_BUDGET_MS / speed / divisor).max(MIN_BASE_DELAY_MS)
}

/// Etiqueta legible de la velocidad.
pub fn speed_label(speed: u8) -> &'static str {
    let index = (f64::from(clamp_speed(speed)) / 2.5).round() as usize;
    SPEED_LABELS[index.min(SPEED_LABELS.len() - 1)]
}

/// Instante de reproducción de un step (o del cierre si `step_index` es `None`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackFrame {
    pub step_index: Option<usize>,
    pub at_ms: f64,
    /// Fracción de la traza mostrada al alcanzar este frame (0..=1).
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSchedule {
    pub speed: u8,
    pub base_delay_ms: f64,
    pub frames: Vec<PlaybackFrame>,
    pub final_frame: PlaybackFrame,
}

impl PlaybackSchedule {
    pub fn build(steps: &[Step], speed: u8) -> Self {
        let speed = clamp_speed(speed);
        let base = base_delay_ms(steps.len(), speed);
        let total = steps.len() as f64;

        let mut accumulated = 0.0;
        let mut frames = Vec::with_capacity(steps.len());
        for (k, step) in steps.iter().enumerate() {
            frames.push(PlaybackFrame { step_index: Some(k),
                                        at_ms: accumulated,
                                        progress: (k + 1) as f64 / total });
            accumulated += if step.is_milestone { base } else { base * MINOR_STEP_FACTOR };
        }

        // sin steps no hay nada que animar: sólo el cierre
        let final_at = if steps.is_empty() { 0.0 } else { accumulated + base };
        Self { speed,
               base_delay_ms: base,
               frames,
               final_frame: PlaybackFrame { step_index: None,
                                            at_ms: final_at,
                                            progress: 1.0 } }
    }

    pub fn total_duration_ms(&self) -> f64 { self.final_frame.at_ms }

    /// Todos los frames en orden, incluido el de cierre.
    pub fn iter_all(&self) -> impl Iterator<Item = &PlaybackFrame> + '_ {
        self.frames.iter().chain(std::iter::once(&self.final_frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_delay_scales_with_speed_and_length() {
        assert_eq!(base_delay_ms(10, 5), 500.0);
        assert_eq!(base_delay_ms(10, 10), 250.0);
        assert_eq!(base_delay_ms(100, 1), 2500.0);
        // más de 100 steps: dividido por ln(n)
        let long = base_delay_ms(1000, 1);
        assert!((long - 2500.0 / 1000f64.ln()).abs() < 1e-9);
        // nunca por debajo del mínimo
        assert_eq!(base_delay_ms(100_000, 10), MIN_BASE_DELAY_MS);
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(base_delay_ms(1, 0), base_delay_ms(1, 1));
        assert_eq!(base_delay_ms(1, 200), base_delay_ms(1, 10));
    }

    #[test]
    fn speed_labels_follow_buckets() {
        assert_eq!(speed_label(1), "Very slow");
        assert_eq!(speed_label(3), "Slow");
        assert_eq!(speed_label(5), "Normal");
        assert_eq!(speed_label(8), "Fast");
        assert_eq!(speed_label(10), "Very fast");
    }

    #[test]
    fn empty_trace_has_only_final_frame() {
        let schedule = PlaybackSchedule::build(&[], 5);
        assert!(schedule.frames.is_empty());
        assert_eq!(schedule.total_duration_ms(), 0.0);
        assert_eq!(schedule.iter_all().count(), 1);
    }
}
