#[cfg(test)]
pub mod mock;
mod product_repository;

pub use product_repository::{PgProductRepository, ProductRepository};
