//! Tipos de la traza y estructura `Step`.
//!
//! Rol en la ejecución:
//! - Cada instante relevante del counting sort produce un `Step` inmutable.
//! - Los steps se consumen en vivo (observer o `StepStream`) o en lote
//!   desde `SortResult::steps`, siempre en orden de emisión.
//! - `StepPhase` es el contrato estable que usan los clientes de render para
//!   decidir ritmo y resaltado sin interpretar `description`.
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fase del algoritmo que narra un step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepPhase {
    /// Primer step de una entrada no vacía.
    Start,
    /// Inspección de un elemento durante la búsqueda del máximo.
    ScanMax,
    /// Se encontró un nuevo máximo (sigue inmediatamente a su `ScanMax`).
    NewMax,
    /// Reserva de la tabla de frecuencias de tamaño `max + 1`.
    Allocate,
    /// Incremento de `frequency[value]`; único step de grano fino.
    Count,
    /// Fin de la fase de conteo.
    CountDone,
    /// Colocación de un valor en el array de salida.
    Place,
    /// Cierre de la ejecución con el array ordenado completo.
    Complete,
}

/// Instante de la ejecución.
///
/// Invariantes:
/// - los contadores son acumulados al momento de la emisión y nunca
///   decrecen a lo largo del log;
/// - `array_snapshot` es una copia propia (no un alias del array de trabajo)
///   y su longitud es siempre la de la entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub seq: u64, // índice de emisión, 0-based
    pub algorithm_name: String,
    pub phase: StepPhase,
    pub description: String,
    pub primary_index: Option<usize>,
    pub secondary_index: Option<usize>,
    pub timestamp_ns: u64, // reloj monotónico desde el inicio de la corrida (no entra en fingerprint)
    pub comparisons: u64,
    pub swaps: u64,
    pub memory_accesses: u64,
    pub array_snapshot: Vec<u64>,
    pub is_milestone: bool,
}

impl Step {
    /// Compara todo salvo `timestamp_ns`.
    pub fn same_content(&self, other: &Step) -> bool {
        self.fingerprint_value() == other.fingerprint_value()
    }

    /// Representación JSON usada al calcular fingerprints de traza.
    pub(crate) fn fingerprint_value(&self) -> serde_json::Value {
        json!({
            "seq": self.seq,
            "algorithm_name": self.algorithm_name,
            "phase": format!("{:?}", self.phase),
            "description": self.description,
            "primary_index": self.primary_index,
            "secondary_index": self.secondary_index,
            "comparisons": self.comparisons,
            "swaps": self.swaps,
            "memory_accesses": self.memory_accesses,
            "array_snapshot": self.array_snapshot,
            "is_milestone": self.is_milestone,
        })
    }
}
