//! # Storage Traits
//!
//! Storage abstraction traits that allow different storage backends to be
//! used interchangeably by the domain layer.

use crate::domain::models::ContactMessage;
use anyhow::Result;
use async_trait::async_trait;
use shared::{Product, Program};

/// Trait defining the interface for product storage operations
#[async_trait]
pub trait ProductStorage: Send + Sync {
    /// Store a new product
    async fn store_product(&self, product: &Product) -> Result<()>;

    /// Retrieve a specific product by ID
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>>;

    /// Retrieve a specific product by its URL slug
    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// List all products ordered by creation date descending (newest first)
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Update an existing product
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Delete a product by ID
    /// Returns true if the product was found and deleted, false otherwise
    async fn delete_product(&self, product_id: &str) -> Result<bool>;
}

/// Trait defining the interface for program storage operations
#[async_trait]
pub trait ProgramStorage: Send + Sync {
    /// Store a new program
    async fn store_program(&self, program: &Program) -> Result<()>;

    /// Retrieve a specific program by ID
    async fn get_program(&self, program_id: &str) -> Result<Option<Program>>;

    /// Retrieve a specific program by its URL slug
    async fn get_program_by_slug(&self, slug: &str) -> Result<Option<Program>>;

    /// List all programs ordered by creation date descending (newest first)
    async fn list_programs(&self) -> Result<Vec<Program>>;

    /// Update an existing program
    async fn update_program(&self, program: &Program) -> Result<()>;

    /// Delete a program by ID
    /// Returns true if the program was found and deleted, false otherwise
    async fn delete_program(&self, program_id: &str) -> Result<bool>;
}

/// Trait defining the interface for contact message storage operations
#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// Store a contact-form message
    async fn store_message(&self, message: &ContactMessage) -> Result<()>;

    /// List stored messages, newest first, with an optional limit
    async fn list_messages(&self, limit: Option<u32>) -> Result<Vec<ContactMessage>>;
}
