use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String) -> Result<Self, CategoryError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CategoryError::NameRequired);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_category_name() {
        let category = Category::new("  Pizza ".to_string()).unwrap();
        assert_eq!(category.name, "Pizza");
    }

    #[test]
    fn should_reject_blank_category_name() {
        let result = Category::new("   ".to_string());
        assert!(matches!(result, Err(CategoryError::NameRequired)));
    }
}
