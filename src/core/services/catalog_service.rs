//! Business logic helpers for managing the service catalog.

use uuid::Uuid;

use crate::business::{Business, Service, ServiceDraft};
use crate::errors::{BookingError, BookingResult};

/// Provides validated CRUD helpers for bookable services.
pub struct CatalogService;

impl CatalogService {
    /// Adds a new service and returns its identifier.
    ///
    /// The category is a name reference and is not required to exist;
    /// category counts are derived on read, so a dangling name simply
    /// counts toward nothing.
    pub fn add(business: &mut Business, draft: ServiceDraft) -> BookingResult<Uuid> {
        Self::validate(&draft)?;
        let service = Service::new(
            draft.name.trim(),
            draft.description,
            draft.duration_minutes,
            draft.price,
            draft.category.trim(),
        );
        Ok(business.add_service(service))
    }

    /// Replaces the editable fields of the service identified by `id`.
    pub fn edit(business: &mut Business, id: Uuid, draft: ServiceDraft) -> BookingResult<()> {
        Self::validate(&draft)?;
        let service = business
            .service_mut(id)
            .ok_or(BookingError::not_found("service", id))?;
        service.name = draft.name.trim().to_string();
        service.description = draft.description;
        service.duration_minutes = draft.duration_minutes;
        service.price = draft.price;
        service.category = draft.category.trim().to_string();
        business.touch();
        Ok(())
    }

    /// Removes the service identified by `id` together with every
    /// appointment booked against it, returning the removed service.
    pub fn remove(business: &mut Business, id: Uuid) -> BookingResult<Service> {
        let position = business
            .services
            .iter()
            .position(|service| service.id == id)
            .ok_or(BookingError::not_found("service", id))?;
        let service = business.services.remove(position);

        let before = business.appointments.len();
        business.appointments.retain(|apt| apt.service_id != id);
        let cascaded = before - business.appointments.len();
        if cascaded > 0 {
            tracing::debug!(service = %service.name, cascaded, "cascade-deleted appointments");
        }
        business.touch();
        Ok(service)
    }

    pub fn get(business: &Business, id: Uuid) -> BookingResult<&Service> {
        business
            .service(id)
            .ok_or(BookingError::not_found("service", id))
    }

    pub fn list(business: &Business) -> Vec<&Service> {
        business.services.iter().collect()
    }

    fn validate(draft: &ServiceDraft) -> BookingResult<()> {
        if draft.name.trim().is_empty() {
            return Err(BookingError::invalid("service name must not be empty"));
        }
        if draft.duration_minutes == 0 {
            return Err(BookingError::invalid("duration must be positive"));
        }
        if !draft.price.is_finite() || draft.price < 0.0 {
            return Err(BookingError::invalid("price must be zero or positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::{Appointment, Customer};
    use chrono::{NaiveDate, NaiveTime};

    fn draft(name: &str, category: &str) -> ServiceDraft {
        ServiceDraft {
            name: name.into(),
            description: "desc".into(),
            duration_minutes: 60,
            price: 85.0,
            category: category.into(),
        }
    }

    #[test]
    fn add_rejects_non_positive_duration() {
        let mut business = Business::new("Studio");
        let mut bad = draft("Cut", "Hair Care");
        bad.duration_minutes = 0;
        let err = CatalogService::add(&mut business, bad).expect_err("must reject");
        assert!(matches!(err, BookingError::InvalidInput(_)));
    }

    #[test]
    fn add_rejects_negative_price() {
        let mut business = Business::new("Studio");
        let mut bad = draft("Cut", "Hair Care");
        bad.price = -1.0;
        assert!(CatalogService::add(&mut business, bad).is_err());
    }

    #[test]
    fn edit_fails_for_missing_service() {
        let mut business = Business::new("Studio");
        let err = CatalogService::edit(&mut business, Uuid::new_v4(), draft("Cut", "Hair Care"))
            .expect_err("edit must fail for unknown id");
        assert!(matches!(err, BookingError::NotFound { entity: "service", .. }));
    }

    #[test]
    fn remove_cascades_to_appointments() {
        let mut business = Business::new("Studio");
        let id = CatalogService::add(&mut business, draft("Massage", "Wellness")).unwrap();
        let service = business.service(id).unwrap().clone();
        business.add_appointment(Appointment::book(
            &service,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            Customer {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                ..Customer::default()
            },
        ));

        let removed = CatalogService::remove(&mut business, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(business.appointments.is_empty());
    }
}
