//! Engine configuration loaded from environment variables.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Env files read at startup, most specific first. A variable that is
/// already set keeps its value.
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// `*`, blank or unset means any origin; otherwise a comma-separated list.
    pub fn parse(value: Option<&str>) -> Self {
        let origins: Vec<String> = value
            .unwrap_or("*")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// SQLite file holding character documents
    pub database_path: String,
    pub cors_allowed_origins: CorsOrigins,
    /// Clamp current hp/chakra to their maxima on quick-stat and update writes
    pub clamp_current_to_max: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8001,
            database_path: "characters.db".to_string(),
            cors_allowed_origins: CorsOrigins::Any,
            clamp_current_to_max: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(port) => port
                .trim()
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            None => defaults.server_port,
        };

        let clamp_current_to_max = match lookup("CLAMP_CURRENT_TO_MAX") {
            Some(flag) => parse_flag(&flag)
                .with_context(|| format!("CLAMP_CURRENT_TO_MAX must be a boolean, got {flag}"))?,
            None => defaults.clamp_current_to_max,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            database_path: lookup("DATABASE_PATH").unwrap_or(defaults.database_path),
            cors_allowed_origins: CorsOrigins::parse(lookup("CORS_ALLOWED_ORIGINS").as_deref()),
            clamp_current_to_max,
        })
    }
}

/// Load the env files found in `dirs`, skipping directories already seen.
///
/// Returns the files that were read. A file that exists but cannot be parsed
/// is an error.
pub fn load_env_files(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: Vec<PathBuf> = Vec::new();
    let mut loaded = Vec::new();

    for dir in dirs {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.clone());
        if seen.contains(&dir) {
            continue;
        }
        for name in ENV_FILES {
            let path = dir.join(name);
            if path.is_file() {
                dotenvy::from_path(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                loaded.push(path);
            }
        }
        seen.push(dir);
    }
    Ok(loaded)
}

/// Directories searched for env files: the working directory, then the
/// workspace root so `cargo run -p shinobi-engine` works from anywhere.
pub fn env_file_dirs() -> Vec<PathBuf> {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    match env::current_dir() {
        Ok(cwd) => vec![cwd, workspace_root],
        Err(_) => vec![workspace_root],
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_apply() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.server_port, 8001);
    }

    #[test]
    fn when_port_falls_back_to_port_variable() {
        let config = EngineConfig::from_lookup(lookup(&[("PORT", "9000")])).unwrap();
        assert_eq!(config.server_port, 9000);
    }

    #[test]
    fn when_values_are_invalid_then_loading_fails() {
        assert!(EngineConfig::from_lookup(lookup(&[("SERVER_PORT", "nope")])).is_err());
        assert!(EngineConfig::from_lookup(lookup(&[("CLAMP_CURRENT_TO_MAX", "maybe")])).is_err());
    }

    #[test]
    fn when_cors_is_blank_then_any_origin_is_allowed() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("CORS_ALLOWED_ORIGINS", "  "),
            ("CLAMP_CURRENT_TO_MAX", "true"),
        ]))
        .unwrap();
        assert_eq!(config.cors_allowed_origins, CorsOrigins::Any);
        assert!(config.clamp_current_to_max);
    }

    #[test]
    fn when_cors_lists_origins_then_they_are_trimmed() {
        let config = EngineConfig::from_lookup(lookup(&[(
            "CORS_ALLOWED_ORIGINS",
            " http://localhost:5173 , https://fichas.example ,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            CorsOrigins::List(vec![
                "http://localhost:5173".to_string(),
                "https://fichas.example".to_string(),
            ])
        );
        assert_eq!(CorsOrigins::parse(Some("http://a.test,*")), CorsOrigins::Any);
    }

    #[test]
    fn env_files_prefer_local_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env.local"),
            "SHINOBI_ENGINE_CONFIG_TEST_DB=local.db\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "SHINOBI_ENGINE_CONFIG_TEST_DB=shared.db\nSHINOBI_ENGINE_CONFIG_TEST_PORT=9100\n",
        )
        .unwrap();

        let dirs = vec![dir.path().to_path_buf(), dir.path().to_path_buf()];
        let loaded = load_env_files(&dirs).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(
            env::var("SHINOBI_ENGINE_CONFIG_TEST_DB").unwrap(),
            "local.db"
        );
        assert_eq!(env::var("SHINOBI_ENGINE_CONFIG_TEST_PORT").unwrap(), "9100");
    }

    #[test]
    fn when_env_file_is_malformed_then_loading_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "this line has no equals sign\n").unwrap();
        assert!(load_env_files(&[dir.path().to_path_buf()]).is_err());
    }
}
