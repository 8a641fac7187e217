use std::sync::Arc;

use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::hateoas::LinkBuilder;
use crate::domain::service::CouponService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CouponService>,
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    pub fn new(service: CouponService, links: LinkBuilder) -> Self {
        Self {
            service: Arc::new(service),
            links: Arc::new(links),
        }
    }
}

fn collection_route() -> MethodRouter<AppState> {
    post(handlers::create_coupon).get(handlers::list_coupons)
}

pub fn coupon_routes() -> Router<AppState> {
    Router::new()
        .route("/", collection_route())
        .route("/hateoas", get(handlers::list_coupons_hateoas))
        .route("/hateoas/{id}", get(handlers::get_coupon_hateoas))
        .route(
            "/{id}",
            get(handlers::get_coupon)
                .put(handlers::update_coupon)
                .delete(handlers::delete_coupon),
        )
}

/// Mounts the coupon routes under `base_path`; empty or "/" mounts at the root.
///
/// The collection answers both with and without a trailing slash.
pub fn router(state: AppState, base_path: &str) -> Router {
    let app: Router<AppState> = if base_path.is_empty() || base_path == "/" {
        Router::new().merge(coupon_routes())
    } else {
        Router::new()
            .nest(base_path, coupon_routes())
            .route(&format!("{}/", base_path), collection_route())
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
