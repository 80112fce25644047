//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`). `AppConfig::from_lookup` permite construirla desde
//! cualquier fuente clave/valor (útil en tests).
use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use serde::Serialize;
use sortflow_core::constants::{DEFAULT_MAX_VALUE, MAX_VALUE_LIMIT};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Rango aceptado para el tamaño de arrays generados.
pub const ARRAY_SIZE_RANGE: (usize, usize) = (10, 200);
/// Rango aceptado para la velocidad de reproducción.
pub const SPEED_RANGE: (u8, u8) = (1, 10);

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub generator: GeneratorConfig,
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    /// Valor máximo aceptado por el engine (inclusive).
    pub max_value: u64,
}

/// Parámetros del generador de arrays aleatorios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    pub array_size: usize,
    /// Los valores caen en `[value_min, value_min + value_span)`.
    pub value_min: i64,
    pub value_span: i64,
    /// Semilla fija para fixtures reproducibles.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackConfig {
    /// 1 (muy lenta) ..= 10 (muy rápida)
    pub speed: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { engine: EngineConfig { max_value: DEFAULT_MAX_VALUE },
               generator: GeneratorConfig { array_size: 50,
                                            value_min: 20,
                                            value_span: 280,
                                            seed: None },
               playback: PlaybackConfig { speed: 5 } }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno (cargando `.env` si existe).
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración consultando `lookup` por cada variable.
    /// Valores mal formados se reemplazan por el default con un `warn!`;
    /// valores fuera de rango se recortan.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();

        let mut max_value = parse_or(&lookup, "SORTFLOW_MAX_VALUE", defaults.engine.max_value);
        if max_value > MAX_VALUE_LIMIT {
            warn!("SORTFLOW_MAX_VALUE={max_value} exceeds {MAX_VALUE_LIMIT}, clamping");
            max_value = MAX_VALUE_LIMIT;
        }
        let array_size = parse_or(&lookup, "SORTFLOW_ARRAY_SIZE", defaults.generator.array_size).clamp(ARRAY_SIZE_RANGE.0,
                                                                                                       ARRAY_SIZE_RANGE.1);
        let mut value_min = parse_or(&lookup, "SORTFLOW_VALUE_MIN", defaults.generator.value_min);
        if value_min < 0 {
            warn!("SORTFLOW_VALUE_MIN={value_min} is negative, using 0");
            value_min = 0;
        }
        let value_span = parse_or(&lookup, "SORTFLOW_VALUE_SPAN", defaults.generator.value_span).max(1);
        let seed = lookup("SORTFLOW_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
                                               Ok(v) => Some(v),
                                               Err(_) => {
                                                   warn!("SORTFLOW_SEED={raw:?} is not a valid u64, ignoring");
                                                   None
                                               }
                                           });
        let speed = parse_or(&lookup, "SORTFLOW_SPEED", defaults.playback.speed).clamp(SPEED_RANGE.0, SPEED_RANGE.1);

        Self { engine: EngineConfig { max_value },
               generator: GeneratorConfig { array_size,
                                            value_min,
                                            value_span,
                                            seed },
               playback: PlaybackConfig { speed } }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
    where T: FromStr + Copy,
          F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                           warn!("{key}={raw:?} could not be parsed, using default");
                                           default
                                       }),
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
