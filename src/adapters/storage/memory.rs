use super::CouponTable;
use crate::domain::model::Coupon;
use crate::domain::ports::CouponStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryCouponStore {
    table: RwLock<CouponTable>,
}

impl InMemoryCouponStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(CouponTable::new()),
        }
    }

    pub fn with_coupons(coupons: Vec<Coupon>) -> Result<Self> {
        Ok(Self {
            table: RwLock::new(CouponTable::from_records(coupons)?),
        })
    }
}

#[async_trait]
impl CouponStore for InMemoryCouponStore {
    async fn save(&self, coupon: Coupon) -> Result<Coupon> {
        self.table.write().await.save(coupon)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Coupon>> {
        Ok(self.table.read().await.find_by_id(id))
    }

    async fn find_all(&self) -> Result<Vec<Coupon>> {
        Ok(self.table.read().await.find_all())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.table.read().await.exists_by_id(id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.table.write().await.delete_by_id(id);
        Ok(())
    }
}
