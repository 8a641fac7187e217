pub mod json_file;
pub mod memory;

pub use json_file::JsonFileCouponStore;
pub use memory::InMemoryCouponStore;

use crate::domain::model::Coupon;
use crate::domain::ports::{CouponStore, StorageSettings};
use crate::utils::error::{CouponError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 依設定建立對應的儲存後端
pub async fn open_store(settings: &StorageSettings) -> Result<Arc<dyn CouponStore>> {
    match settings {
        StorageSettings::Memory => {
            tracing::info!("Using in-memory coupon store");
            Ok(Arc::new(InMemoryCouponStore::new()))
        }
        StorageSettings::File { path } => {
            tracing::info!("Using JSON file coupon store at {}", path);
            Ok(Arc::new(JsonFileCouponStore::open(path).await?))
        }
    }
}

/// Ordered record table shared by the store implementations.
#[derive(Debug, Clone)]
pub(crate) struct CouponTable {
    // None once every id up to i32::MAX has been handed out
    next_id: Option<i32>,
    records: BTreeMap<i32, Coupon>,
}

impl Default for CouponTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CouponTable {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Some(1),
            records: BTreeMap::new(),
        }
    }

    pub(crate) fn from_records(coupons: Vec<Coupon>) -> Result<Self> {
        let mut table = Self::new();
        for coupon in coupons {
            table.save(coupon)?;
        }
        Ok(table)
    }

    pub(crate) fn save(&mut self, mut coupon: Coupon) -> Result<Coupon> {
        let id = match coupon.id {
            Some(id) => id,
            None => self.next_free_id()?,
        };
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }

        coupon.id = Some(id);
        self.records.insert(id, coupon.clone());
        Ok(coupon)
    }

    /// 新增時使用的 id；絕不回傳已被佔用的 id
    fn next_free_id(&self) -> Result<i32> {
        match self.next_id {
            Some(id) if !self.records.contains_key(&id) => Ok(id),
            Some(id) => Err(CouponError::storage(format!("id {} is already taken", id))),
            None => Err(CouponError::storage("id space exhausted")),
        }
    }

    pub(crate) fn find_by_id(&self, id: i32) -> Option<Coupon> {
        self.records.get(&id).cloned()
    }

    pub(crate) fn find_all(&self) -> Vec<Coupon> {
        self.records.values().cloned().collect()
    }

    pub(crate) fn exists_by_id(&self, id: i32) -> bool {
        self.records.contains_key(&id)
    }

    pub(crate) fn delete_by_id(&mut self, id: i32) -> bool {
        self.records.remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
