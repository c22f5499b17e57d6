//! External API integrations

pub mod birfatura;

pub use birfatura::BirFaturaClient;
