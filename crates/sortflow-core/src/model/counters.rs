//! Acumulador explícito de operaciones.
//!
//! Cada corrida posee su propio `OpCounters`; el engine no guarda contadores
//! como campos de instancia, de modo que dos corridas independientes nunca
//! comparten estado.
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounters {
    pub comparisons: u64,
    /// Counting sort no intercambia elementos: siempre 0.
    pub swaps: u64,
    pub memory_accesses: u64,
}

impl OpCounters {
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn record_comparison(&mut self) { self.comparisons += 1; }

    #[inline]
    pub fn record_memory_access(&mut self) { self.memory_accesses += 1; }

    /// `true` si ningún contador de `self` es menor que el de `earlier`.
    pub fn dominates(&self, earlier: &OpCounters) -> bool {
        self.comparisons >= earlier.comparisons
        && self.swaps >= earlier.swaps
        && self.memory_accesses >= earlier.memory_accesses
    }
}
