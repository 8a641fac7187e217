use crate::domain::model::{Coupon, CouponDto, CouponUpdate};
use crate::domain::ports::CouponStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// CRUD operations over coupons. Holds no state besides the store handle.
#[derive(Clone)]
pub struct CouponService {
    store: Arc<dyn CouponStore>,
}

impl CouponService {
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, dto: CouponDto) -> Result<CouponDto> {
        let saved = self.store.save(Coupon::from(dto)).await?;
        tracing::info!("Created coupon {:?} ({})", saved.id, saved.code);
        Ok(saved.into())
    }

    pub async fn list(&self) -> Result<Vec<CouponDto>> {
        let coupons = self.store.find_all().await?;
        tracing::debug!("Listing {} coupons", coupons.len());
        Ok(coupons.into_iter().map(CouponDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CouponDto>> {
        let coupon = self.store.find_by_id(id).await?;
        if coupon.is_none() {
            tracing::debug!("Coupon {} not found", id);
        }
        Ok(coupon.map(CouponDto::from))
    }

    /// 不存在時直接回傳 `None`，不會呼叫 `save`
    pub async fn update(&self, id: i32, update: CouponUpdate) -> Result<Option<CouponDto>> {
        let Some(mut coupon) = self.store.find_by_id(id).await? else {
            tracing::debug!("Coupon {} not found, skipping update", id);
            return Ok(None);
        };

        coupon.apply(update);
        let saved = self.store.save(coupon).await?;
        tracing::info!("Updated coupon {}", id);
        Ok(Some(saved.into()))
    }

    /// 不存在時回傳 `false`，不會呼叫 `delete_by_id`
    pub async fn delete(&self, id: i32) -> Result<bool> {
        if !self.store.exists_by_id(id).await? {
            tracing::debug!("Coupon {} not found, skipping delete", id);
            return Ok(false);
        }

        self.store.delete_by_id(id).await?;
        tracing::info!("Deleted coupon {}", id);
        Ok(true)
    }
}
