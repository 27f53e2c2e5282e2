use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub bus: BusConfig,
    pub limits: LimitsConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Геометрия салона: колонки A-D фиксированы форматом кода места,
// глубина (количество рядов) настраивается
#[derive(Debug, Clone, Deserialize)]
pub struct BusConfig {
    pub rows: u32,
}

// Ограничения на входные данные
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_input_bytes: usize,
}

// Feature flags для включения/выключения функциональности
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_export: bool,
    pub enable_layout: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "boarding_system=debug,tower_http=debug".to_string()),
            },
            bus: BusConfig {
                rows: env::var("BUS_ROWS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("BUS_ROWS must be a valid number"),
            },
            limits: LimitsConfig {
                max_input_bytes: env::var("MAX_INPUT_BYTES")
                    .unwrap_or_else(|_| "1048576".to_string())
                    .parse()
                    .expect("MAX_INPUT_BYTES must be a valid number"),
            },
            features: FeatureFlags {
                enable_export: env::var("ENABLE_EXPORT")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_EXPORT must be true or false"),
                enable_layout: env::var("ENABLE_LAYOUT")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_LAYOUT must be true or false"),
            },
        }
    }
}
