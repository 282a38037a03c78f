//! Product catalog: filtered, paginated product listing and lookup by code.
//!
//! Each variant is exposed with its effective price, see [`pricing`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/catalog` | No | List products (`offset`, `limit`, `category`, `priceLessThan`) |
//! | GET | `/api/catalog/{code}` | No | Get product by code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProductRepository;
pub use services::CatalogService;
