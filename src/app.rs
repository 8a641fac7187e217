use crate::adapters::open_store;
use crate::api::{router, AppState, LinkBuilder};
use crate::domain::ports::ConfigProvider;
use crate::domain::service::CouponService;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// 依設定組出完整的 HTTP 應用 (儲存、服務、路由)
pub async fn build_app(config: &dyn ConfigProvider) -> Result<Router> {
    config.validate()?;

    let store = open_store(&config.storage()).await?;
    let service = CouponService::new(store);
    let links = LinkBuilder::new(config.gateway_url());

    tracing::debug!(
        "Mounting coupon routes at '{}' with gateway {}",
        config.base_path(),
        links.gateway_url()
    );

    Ok(router(AppState::new(service, links), config.base_path()))
}

pub struct CouponServer {
    listener: TcpListener,
    app: Router,
}

impl CouponServer {
    pub async fn bind(config: &dyn ConfigProvider) -> Result<Self> {
        let app = build_app(config).await?;
        let addr = validate_socket_addr("bind", config.bind_address())?;
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("🚀 Coupon service listening on {}", self.local_addr()?);
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Coupon service stopped");
        Ok(())
    }
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
