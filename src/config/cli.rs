use super::{DEFAULT_BASE_PATH, DEFAULT_BIND, DEFAULT_GATEWAY_URL};
use crate::domain::ports::{ConfigProvider, StorageSettings};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "coupon-service")]
#[command(about = "Coupon CRUD microservice with hypermedia links")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    #[arg(long, default_value = DEFAULT_GATEWAY_URL, help = "Base URL used in hypermedia links")]
    pub gateway_url: String,

    #[arg(long, help = "Persist coupons to this JSON file instead of memory")]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, default_value = "compact")]
    pub log_format: LogFormat,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    fn storage(&self) -> StorageSettings {
        match &self.data_file {
            Some(path) => StorageSettings::File { path: path.clone() },
            None => StorageSettings::Memory,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_base_path("base_path", &self.base_path)?;
        validation::validate_url("gateway_url", &self.gateway_url)?;
        if let Some(path) = &self.data_file {
            validation::validate_path("data_file", path)?;
        }
        Ok(())
    }
}
