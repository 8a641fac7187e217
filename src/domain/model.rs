use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted coupon record. `id` is `None` only until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Option<i32>,
    pub code: String,
    pub discount: i32,
    pub valid_until: NaiveDate,
}

/// Wire representation of a coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    #[serde(default)]
    pub id_cupon: Option<i32>,
    pub codigo: String,
    pub descuento: i32,
    pub valido_hasta: NaiveDate,
}

/// Body of an update request. A missing `validoHasta` keeps the stored date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponUpdate {
    pub codigo: String,
    pub descuento: i32,
    #[serde(default)]
    pub valido_hasta: Option<NaiveDate>,
}

impl From<Coupon> for CouponDto {
    fn from(coupon: Coupon) -> Self {
        Self {
            id_cupon: coupon.id,
            codigo: coupon.code,
            descuento: coupon.discount,
            valido_hasta: coupon.valid_until,
        }
    }
}

impl From<CouponDto> for Coupon {
    fn from(dto: CouponDto) -> Self {
        Self {
            id: dto.id_cupon,
            code: dto.codigo,
            discount: dto.descuento,
            valid_until: dto.valido_hasta,
        }
    }
}

impl Coupon {
    pub fn apply(&mut self, update: CouponUpdate) {
        self.code = update.codigo;
        self.discount = update.descuento;
        if let Some(valid_until) = update.valido_hasta {
            self.valid_until = valid_until;
        }
    }
}
