//! Product categories.
//!
//! Categories are flat, created once and never updated. Every product
//! belongs to exactly one category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List all categories |
//! | POST | `/api/categories` | No | Create a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
