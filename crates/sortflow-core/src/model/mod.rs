//! Modelos de la corrida (contadores y resultado).

pub mod counters;
pub mod result;

pub use counters::OpCounters;
pub use result::SortResult;
