//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::cache::CacheConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub redis_url: String,
    pub flash_ttl: u64,
    pub cors_origins: Vec<String>,
    /// Tamaño de página configurado. Los listados no paginan: se devuelven completos.
    pub items_per_page: u32,
    pub session_cookie_secure: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            flash_ttl: 300,
            cors_origins: Vec::new(),
            items_per_page: 20,
            session_cookie_secure: false,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno (con `.env` ya aplicado)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        // En producción la cookie de sesión viaja solo por HTTPS salvo que se indique lo contrario
        let secure_default = environment == "production";

        Ok(Self {
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            flash_ttl: parse_var("FLASH_TTL_SECONDS", defaults.flash_ttl)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            items_per_page: parse_var("ITEMS_PER_PAGE", defaults.items_per_page)?,
            session_cookie_secure: parse_var("SESSION_COOKIE_SECURE", secure_default)?,
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            redis_url: self.redis_url.clone(),
            flash_ttl: self.flash_ttl,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} must be a valid value: {}", name, e)),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
