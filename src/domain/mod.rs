// Domain layer: coupon models, ports (interfaces) and the CRUD service.

pub mod model;
pub mod ports;
pub mod service;
