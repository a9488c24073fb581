use std::{env, path::PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint_url: String,
    pub put_path: String,
    pub burst_path: String,
    pub burst_count: u32,
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    endpoint_url: Option<String>,
    put_path: Option<String>,
    burst_path: Option<String>,
    burst_count: Option<u32>,
    label: Option<String>,
    value: Option<u32>,
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("BEACON_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    // Fall back to a local config next to the executable.
    PathBuf::from("beacon.toml")
}

pub fn load_config() -> Result<Config, String> {
    let config_path = resolve_config_path();

    let file_config = if config_path.exists() {
        let content =
            std::fs::read_to_string(&config_path).map_err(|err| format!("read config: {err}"))?;
        toml::from_str::<FileConfig>(&content).map_err(|err| format!("parse config: {err}"))?
    } else {
        FileConfig::default()
    };

    Ok(resolve(file_config, |key| env::var(key).ok()))
}

// Env wins over file, file wins over defaults.
fn resolve(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let endpoint_url = lookup("BEACON_URL")
        .or(file.endpoint_url)
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let put_path = lookup("BEACON_PUT_PATH").or(file.put_path).unwrap_or_default();
    let burst_path = lookup("BEACON_BURST_PATH")
        .or(file.burst_path)
        .unwrap_or_else(|| "index.js".to_string());
    let burst_count = lookup("BEACON_BURST_COUNT")
        .and_then(|value| value.parse::<u32>().ok())
        .or(file.burst_count)
        .unwrap_or(5);
    let label = lookup("BEACON_LABEL")
        .or(file.label)
        .unwrap_or_else(|| "hello there".to_string());
    let value = lookup("BEACON_VALUE")
        .and_then(|value| value.parse::<u32>().ok())
        .or(file.value)
        .unwrap_or(10);

    Config {
        endpoint_url,
        put_path,
        burst_path,
        burst_count,
        label,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let config = resolve(FileConfig::default(), |_| None);
        assert_eq!(config.endpoint_url, "http://localhost:8080");
        assert_eq!(config.put_path, "");
        assert_eq!(config.burst_path, "index.js");
        assert_eq!(config.burst_count, 5);
        assert_eq!(config.label, "hello there");
        assert_eq!(config.value, 10);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            endpoint_url = "http://localhost:9999"
            burst_count = 3
            label = "ping"
            "#,
        )
        .unwrap();
        let config = resolve(file, |_| None);
        assert_eq!(config.endpoint_url, "http://localhost:9999");
        assert_eq!(config.burst_count, 3);
        assert_eq!(config.label, "ping");
        assert_eq!(config.value, 10);
    }

    #[test]
    fn env_wins_over_file() {
        let file: FileConfig = toml::from_str(r#"value = 7"#).unwrap();
        let config = resolve(file, |key| match key {
            "BEACON_VALUE" => Some("42".to_string()),
            "BEACON_URL" => Some("http://localhost:8081".to_string()),
            _ => None,
        });
        assert_eq!(config.value, 42);
        assert_eq!(config.endpoint_url, "http://localhost:8081");
    }

    #[test]
    fn unparsable_env_number_falls_back() {
        let config = resolve(FileConfig::default(), |key| {
            (key == "BEACON_BURST_COUNT").then(|| "lots".to_string())
        });
        assert_eq!(config.burst_count, 5);
    }
}
