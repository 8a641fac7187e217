use super::CouponTable;
use crate::domain::model::Coupon;
use crate::domain::ports::CouponStore;
use crate::utils::error::{CouponError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Coupon store backed by a single JSON file holding every record.
///
/// The file is read once when the store is opened and rewritten after each
/// mutation. A mutation only becomes visible once the write has succeeded.
#[derive(Debug)]
pub struct JsonFileCouponStore {
    path: PathBuf,
    table: Mutex<CouponTable>,
}

impl JsonFileCouponStore {
    /// 開啟資料檔；檔案不存在時視為空的儲存
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let table = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => CouponTable::new(),
            Ok(bytes) => {
                let coupons: Vec<Coupon> = serde_json::from_slice(&bytes)?;
                if let Some(coupon) = coupons.iter().find(|c| c.id.is_none()) {
                    return Err(CouponError::storage(format!(
                        "record '{}' in {} has no id",
                        coupon.code,
                        path.display()
                    )));
                }
                CouponTable::from_records(coupons)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Data file {} does not exist yet", path.display());
                CouponTable::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Loaded {} coupons from {}", table.len(), path.display());

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &CouponTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| write_error("create directory", parent, e))?;
            }
        }

        let data = serde_json::to_vec_pretty(&table.find_all())?;

        // 先寫暫存檔再改名，避免寫到一半的檔案
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &data)
            .await
            .map_err(|e| write_error("write", &tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| write_error("replace", &self.path, e))?;

        tracing::debug!("Wrote {} coupons to {}", table.len(), self.path.display());
        Ok(())
    }
}

fn write_error(action: &str, path: &Path, e: std::io::Error) -> CouponError {
    CouponError::storage(format!("failed to {} {}: {}", action, path.display(), e))
}

#[async_trait]
impl CouponStore for JsonFileCouponStore {
    async fn save(&self, coupon: Coupon) -> Result<Coupon> {
        let mut table = self.table.lock().await;
        let mut next = table.clone();
        let saved = next.save(coupon)?;
        self.persist(&next).await?;
        *table = next;
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Coupon>> {
        Ok(self.table.lock().await.find_by_id(id))
    }

    async fn find_all(&self) -> Result<Vec<Coupon>> {
        Ok(self.table.lock().await.find_all())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.table.lock().await.exists_by_id(id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let mut table = self.table.lock().await;
        let mut next = table.clone();
        if next.delete_by_id(id) {
            self.persist(&next).await?;
            *table = next;
        }
        Ok(())
    }
}
