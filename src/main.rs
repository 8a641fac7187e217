use clap::Parser;
use coupon_service::app::shutdown_signal;
use coupon_service::utils::error::ErrorCategory;
use coupon_service::utils::logger;
use coupon_service::{CliConfig, ConfigProvider, CouponError, CouponServer, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (有指定時取代命令列設定)
    let toml = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let format = match toml.as_ref().map(TomlConfig::log_format) {
        Some(Ok(Some(format))) => format,
        _ => cli.log_format,
    };
    let level = toml.as_ref().and_then(TomlConfig::log_level);
    logger::init_logger(format, cli.verbose, level);

    tracing::info!("Starting coupon-service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: &dyn ConfigProvider = match &toml {
        Some(config) => {
            tracing::info!("📁 Using configuration from {:?}", cli.config);
            config
        }
        None => &cli,
    };

    let server = match CouponServer::bind(config).await {
        Ok(server) => server,
        Err(e) => fail(e),
    };

    if let Err(e) = server.run_until(shutdown_signal()).await {
        fail(e);
    }

    Ok(())
}

fn fail(e: CouponError) -> ! {
    tracing::error!("❌ coupon-service failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Storage => 2,
        ErrorCategory::NotFound | ErrorCategory::System => 3,
    };
    std::process::exit(exit_code);
}
