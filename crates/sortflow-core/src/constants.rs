//! Constantes del motor core.
//!
//! Estos valores viajan dentro de cada `Step` y `SortResult`, y algunos
//! participan en el `trace_fingerprint`. Cambiarlos altera la identidad de
//! las trazas ya grabadas.

/// Versión lógica del motor. Se incluye en el fingerprint de la traza para
/// que un cambio incompatible en la narración de steps invalide las trazas
/// previas aunque la entrada sea la misma.
pub const ENGINE_VERSION: &str = "S1.0";

/// Nombre del algoritmo que firma cada `Step`.
pub const ALGORITHM_NAME: &str = "Counting Sort";

/// Descriptor estático de complejidad que acompaña al resultado.
pub const COMPLEXITY_LABEL: &str = "O(n)";

/// Valor máximo aceptado por defecto. La tabla de frecuencias ocupa
/// `max + 1` posiciones, así que este límite acota la memoria auxiliar.
pub const DEFAULT_MAX_VALUE: u64 = 1_000_000;

/// Tope duro para `max_value`: builder y configuración recortan cualquier
/// límite mayor a este valor.
pub const MAX_VALUE_LIMIT: u64 = 10_000_000;
