use crate::domain::model::Coupon;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;

/// Persistence contract for coupon records, keyed by integer id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Inserts when `coupon.id` is `None`, otherwise replaces the record under that id.
    async fn save(&self, coupon: Coupon) -> Result<Coupon>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Coupon>>;
    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<Coupon>>;
    async fn exists_by_id(&self, id: i32) -> Result<bool>;
    /// No-op when the id is absent.
    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSettings {
    Memory,
    File { path: String },
}

pub trait ConfigProvider: Validate + Send + Sync {
    fn bind_address(&self) -> &str;
    fn base_path(&self) -> &str;
    fn gateway_url(&self) -> &str;
    fn storage(&self) -> StorageSettings;
}
