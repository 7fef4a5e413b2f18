use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of services.
///
/// The service count of a category is not stored; it is recomputed
/// from the service collection on read (`Business::service_count`),
/// so it can never drift from the truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub color: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}

/// Editable category fields, applied through `CategoryService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl CategoryDraft {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            color: category.color.clone(),
        }
    }
}

/// A category paired with its derived service count, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOverview {
    pub category: Category,
    pub service_count: usize,
}
