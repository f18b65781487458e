use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound on request bodies, matching the historical 7 MiB request limit.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 7 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PdfServiceConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub application_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub renderer: RendererConfig,
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub wkhtmltopdf_path: String,
    pub timeout: Duration,
}

impl PdfServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(PdfServiceConfig {
            common,
            service_name: get_env("SERVICE_NAME", "pdf-service"),
            application_name: get_env("APPLICATION_NAME", "PdfServiceApi"),
            log_level: get_env("LOG_LEVEL", "info"),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            renderer: RendererConfig {
                wkhtmltopdf_path: get_env("WKHTMLTOPDF_PATH", "wkhtmltopdf"),
                timeout: Duration::from_secs(parse_env("RENDER_TIMEOUT_SECS", 180u64)?),
            },
            max_request_bytes: parse_env("MAX_REQUEST_BYTES", DEFAULT_MAX_REQUEST_BYTES)?,
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "{} has invalid value '{}': {}",
                key,
                raw,
                e
            ))
        }),
        Err(_) => Ok(default),
    }
}
