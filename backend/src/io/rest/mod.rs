//! # REST API Interface Layer
//!
//! HTTP endpoints for the storefront. This layer handles request and
//! response serialization, translates domain errors to HTTP status codes,
//! and logs requests; business logic stays in the domain layer.

pub mod contact_apis;
pub mod product_apis;
pub mod program_apis;
