use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable offering with a duration and a price.
///
/// `category` is a name reference into the category collection. The
/// reference is denormalized on purpose (it mirrors how bookings carry
/// a `service_name` snapshot); renames are propagated by
/// `CategoryService::edit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub category: String,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            duration_minutes,
            price,
            category: category.into(),
        }
    }
}

/// Editable fields of a service, collected by a form or command
/// arguments before being applied through `CatalogService`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub category: String,
}

impl ServiceDraft {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            duration_minutes: service.duration_minutes,
            price: service.price,
            category: service.category.clone(),
        }
    }
}
