//! # Storage Layer
//!
//! Data persistence for the storefront backend: the SQLite connection,
//! the repository traits the domain layer works against, and their
//! SQLite implementations.

pub mod contact_repository;
pub mod db;
pub mod product_repository;
pub mod program_repository;
pub mod traits;

pub use contact_repository::ContactRepository;
pub use db::DbConnection;
pub use product_repository::ProductRepository;
pub use program_repository::ProgramRepository;
pub use traits::{ContactStorage, ProductStorage, ProgramStorage};
