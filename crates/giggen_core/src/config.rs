//! Core configuration resolved once at process start.
//!
//! # Responsibility
//! - Carry environment-provided settings (public base URL, brand assets)
//!   as an explicit value passed to the components that need it.
//!
//! # Invariants
//! - Configuration is read once and never consulted as ambient global
//!   state afterwards.
//! - `public_base_url` never carries a trailing slash.

use std::env;

/// Default public site origin used when no environment override is set.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://giggen.no";

const BASE_URL_ENV: &str = "GIGGEN_PUBLIC_BASE_URL";
const BRAND_LOGO_ENV: &str = "GIGGEN_BRAND_LOGO_URL";

/// Process-wide core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Absolute origin used to build canonical URLs, without trailing slash.
    pub public_base_url: String,
    /// Brand logo stamped onto generated share cards.
    pub brand_logo_url: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            brand_logo_url: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment variables,
    /// falling back to defaults for unset or blank values.
    pub fn from_env() -> Self {
        let public_base_url = env::var(BASE_URL_ENV)
            .ok()
            .map(|value| normalize_base_url(&value))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());

        let brand_logo_url = env::var(BRAND_LOGO_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            public_base_url,
            brand_logo_url,
        }
    }
}

/// Trims whitespace and any trailing slash from a configured origin.
pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
