pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{InMemoryCouponStore, JsonFileCouponStore};
pub use app::{build_app, CouponServer};
pub use domain::model::{Coupon, CouponDto, CouponUpdate};
pub use domain::ports::{ConfigProvider, CouponStore, StorageSettings};
pub use domain::service::CouponService;
pub use utils::error::{CouponError, Result};
