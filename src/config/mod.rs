#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_PATH: &str = "/api/cupones";
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8888/api/proxy/cupones";
