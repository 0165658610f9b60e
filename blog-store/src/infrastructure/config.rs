use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_path = std::env::var("BLOG_DATA_PATH")
            .unwrap_or_else(|_| "lumina.json".into())
            .into();
        let seed = match std::env::var("BLOG_SEED") {
            Ok(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid BLOG_SEED: {}", raw))?,
            Err(_) => default_seed(),
        };

        Ok(Self { data_path, seed })
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_with_data_path_overrides() {
        let config = AppConfig {
            data_path: "lumina.json".into(),
            seed: true,
        }
        .with_data_path("/tmp/other.json");
        assert_eq!(config.data_path, PathBuf::from("/tmp/other.json"));
    }
}
