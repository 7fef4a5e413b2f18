use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    appointment::Appointment,
    category::Category,
    profile::BusinessProfile,
    service::Service,
};

/// The state-owning aggregate: one business profile plus the service,
/// category, and appointment collections. Every mutation goes through
/// the operation structs in `core::services`, which keep the
/// collections mutually consistent; the aggregate itself only offers
/// storage and lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            profile: BusinessProfile::new(name),
            services: Vec::new(),
            categories: Vec::new(),
            appointments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_service(&mut self, service: Service) -> Uuid {
        let id = service.id;
        self.services.push(service);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> Uuid {
        let id = appointment.id;
        self.appointments.push(appointment);
        self.touch();
        id
    }

    pub fn service(&self, id: Uuid) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn service_mut(&mut self, id: Uuid) -> Option<&mut Service> {
        self.services.iter_mut().find(|service| service.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    pub fn appointment_mut(&mut self, id: Uuid) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|apt| apt.id == id)
    }

    /// Derived service count for a category name. Membership is exact
    /// name equality, matching how services reference categories.
    pub fn service_count(&self, category_name: &str) -> usize {
        self.services
            .iter()
            .filter(|service| service.category == category_name)
            .count()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_count_tracks_exact_name_matches() {
        let mut business = Business::new("Studio");
        business.add_category(Category::new("Wellness", "", "#10B981"));
        business.add_service(Service::new("Massage", "", 90, 120.0, "Wellness"));
        business.add_service(Service::new("Facial", "", 30, 60.0, "wellness"));

        assert_eq!(business.service_count("Wellness"), 1);
        assert_eq!(business.service_count("wellness"), 1);
        assert_eq!(business.service_count("Consulting"), 0);
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut business = Business::new("Studio");
        let before = business.updated_at;
        business.add_category(Category::new("Hair Care", "", "#3B82F6"));
        assert!(business.updated_at >= before);
    }
}
