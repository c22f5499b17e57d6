//! HTTP handlers for the POS Invoice Bridge

pub mod health;
pub mod orders;
pub mod products;
pub mod proxy;

pub use health::health_check;
pub use orders::{order_status, poll_orders};
pub use products::force_delete_product;
pub use proxy::birfatura_proxy;
