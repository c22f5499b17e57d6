//! Business logic services for the POS Invoice Bridge

pub mod product;
pub mod sales;
pub mod tenant;

pub use product::ProductService;
pub use sales::SalesService;
pub use tenant::TenantService;
