//! Domain models shared between the translation core and the backend

pub mod order;
pub mod sale;

pub use order::*;
pub use sale::*;
