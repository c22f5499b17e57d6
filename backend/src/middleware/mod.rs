//! Request middleware

pub mod poll_auth;

pub use poll_auth::{poll_auth_middleware, PollTenant};
