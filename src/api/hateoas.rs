//! Hypermedia links for coupon representations.
//!
//! Links live next to the DTO in a [`HalResource`] and serialize under
//! `_links` as `relation -> {href, type}`, keeping insertion order.

use crate::domain::model::CouponDto;
use axum::http::Method;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const REL_SELF: &str = "self";
pub const REL_ALL_COUPONS: &str = "todos-los-cupones";
pub const REL_DELETE: &str = "eliminar";
pub const REL_UPDATE: &str = "actualizar";
pub const REL_CREATE: &str = "crear-nuevo-cupon";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            kind: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.kind = Some(method.as_str().to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, Link)>);

impl Links {
    pub fn add(&mut self, rel: impl Into<String>, link: Link) {
        self.0.push((rel.into(), link));
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| r == rel).map(|(_, link)| link)
    }

    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(rel, _)| rel.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

/// A representation plus its hypermedia side-car.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> HalResource<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            links: Links::default(),
        }
    }
}

/// Builds link targets under the gateway base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    gateway_url: String,
}

impl LinkBuilder {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Links for a single coupon: self, collection, delete and update.
    pub fn single(&self, id: i32, dto: CouponDto) -> HalResource<CouponDto> {
        let mut resource = HalResource::new(dto);
        let links = &mut resource.links;

        links.add(REL_SELF, Link::new(format!("{}/hateoas/{}", self.gateway_url, id)));
        links.add(
            REL_ALL_COUPONS,
            Link::new(format!("{}/hateoas", self.gateway_url)),
        );
        links.add(
            REL_DELETE,
            Link::new(format!("{}/{}", self.gateway_url, id)).with_method(Method::DELETE),
        );
        links.add(
            REL_UPDATE,
            Link::new(format!("{}/{}", self.gateway_url, id)).with_method(Method::PUT),
        );

        resource
    }

    /// Links for one element of the collection: self and create.
    pub fn collection_item(&self, dto: CouponDto) -> HalResource<CouponDto> {
        let id = dto.id_cupon;
        let mut resource = HalResource::new(dto);

        match id {
            Some(id) => resource.links.add(
                REL_SELF,
                Link::new(format!("{}/hateoas/{}", self.gateway_url, id)),
            ),
            None => tracing::warn!(
                "Coupon '{}' has no id, omitting its self link",
                resource.data.codigo
            ),
        }
        resource.links.add(
            REL_CREATE,
            Link::new(self.gateway_url.clone()).with_method(Method::POST),
        );

        resource
    }

    pub fn collection(&self, dtos: Vec<CouponDto>) -> Vec<HalResource<CouponDto>> {
        dtos.into_iter()
            .map(|dto| self.collection_item(dto))
            .collect()
    }
}
