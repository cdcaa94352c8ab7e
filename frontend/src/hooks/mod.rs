pub mod use_products;
pub mod use_programs;

pub use use_products::use_products;
pub use use_programs::use_programs;
