//! Resultado agregado de una ejecución.
//!
//! Se produce exactamente una vez por corrida y pertenece al llamador; el
//! engine no conserva referencias a resultados ya devueltos.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::constants::ENGINE_VERSION;
use crate::hashing::hash_value;
use crate::trace::Step;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortResult {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>, // metadato (no entra en fingerprint)
    pub algorithm_name: String,
    pub final_array: Vec<u64>,
    pub elapsed_time_ms: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub memory_accesses: u64,
    pub complexity_label: String,
    pub steps: Vec<Step>,
}

impl SortResult {
    /// Hash blake3 de la traza completa sin timestamps. Dos ejecuciones de la
    /// misma entrada producen el mismo valor.
    pub fn trace_fingerprint(&self) -> String {
        let steps: Vec<serde_json::Value> = self.steps.iter().map(Step::fingerprint_value).collect();
        hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "algorithm_name": self.algorithm_name,
            "final_array": self.final_array,
            "steps": steps,
        }))
    }

    /// Steps que marcan límites de fase.
    pub fn milestones(&self) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(|s| s.is_milestone)
    }

    /// Línea resumen de la corrida.
    pub fn summary(&self) -> String { self.to_string() }
}

impl fmt::Display for SortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "Result: time={}ms, comparisons={}, swaps={}, accesses={}, complexity={}",
               self.elapsed_time_ms, self.comparisons, self.swaps, self.memory_accesses, self.complexity_label)
    }
}
