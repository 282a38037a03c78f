use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, NewCategory};

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Unique short code, e.g. "clothing"
    #[serde(default)]
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,

    /// Display name, e.g. "Clothing"
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl CreateCategoryDto {
    /// Trim surrounding whitespace so blank values fail validation
    pub fn trimmed(self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
        }
    }
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
        }
    }
}
