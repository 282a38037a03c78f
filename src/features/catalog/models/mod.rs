mod product;
mod variant;

pub use product::{Product, ProductFilter, ProductListResult};
pub use variant::Variant;
