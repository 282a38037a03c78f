mod category_repository;
#[cfg(test)]
pub mod mock;

pub use category_repository::{CategoryRepository, PgCategoryRepository};
