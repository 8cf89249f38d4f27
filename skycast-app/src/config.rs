use anyhow::Result;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

/// Which broker backs the process, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Seed the in-memory store and serve the list API locally.
    Local,
    /// Page through a remote list API.
    Api,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub port: u16,
    pub backend: Backend,
    pub api_base_url: String,
    pub seed_count: usize,
    pub page_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("SKYCAST"))
            .set_default("port", 3000_i64)?
            .set_default("backend", "local")?
            .set_default("api_base_url", "http://localhost:3000")?
            .set_default("seed_count", 50_i64)?
            .set_default("page_size", 10_i64)?
            .set_default("log_level", "info")?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            backend: Backend::Local,
            api_base_url: "http://localhost:3000".to_string(),
            seed_count: 50,
            page_size: 10,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_deserialize() {
        assert_eq!(
            serde_json::from_str::<Backend>("\"local\"").unwrap(),
            Backend::Local
        );
        assert_eq!(
            serde_json::from_str::<Backend>("\"api\"").unwrap(),
            Backend::Api
        );
    }
}
