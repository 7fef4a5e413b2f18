//! Business logic helpers for booking and managing appointments.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::business::{
    Appointment, AppointmentPatch, AppointmentStatus, Business, Customer,
};
use crate::errors::{BookingError, BookingResult};

/// Provides validated booking, editing, and query helpers for
/// appointments.
pub struct AppointmentService;

impl AppointmentService {
    /// Books `service_id` for `customer` at the given slot and returns
    /// the new appointment's identifier. Price and duration are
    /// snapshotted from the service at this instant.
    ///
    /// Nothing prevents two appointments from sharing a slot; the
    /// source system never had a conflict check and callers that want
    /// one must layer it on top.
    pub fn book(
        business: &mut Business,
        service_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        customer: Customer,
    ) -> BookingResult<Uuid> {
        if customer.name.trim().is_empty() {
            return Err(BookingError::invalid("customer name must not be empty"));
        }
        if customer.email.trim().is_empty() {
            return Err(BookingError::invalid("customer email must not be empty"));
        }
        let service = business
            .service(service_id)
            .ok_or(BookingError::not_found("service", service_id))?;
        let appointment = Appointment::book(service, date, time, customer);
        tracing::debug!(service = %appointment.service_name, date = %date, "booked appointment");
        Ok(business.add_appointment(appointment))
    }

    /// Merges `patch` into the appointment identified by `id`. Status,
    /// price, and duration are never touched by an edit.
    pub fn edit(business: &mut Business, id: Uuid, patch: AppointmentPatch) -> BookingResult<()> {
        if let Some(name) = &patch.customer_name {
            if name.trim().is_empty() {
                return Err(BookingError::invalid("customer name must not be empty"));
            }
        }
        if let Some(email) = &patch.customer_email {
            if email.trim().is_empty() {
                return Err(BookingError::invalid("customer email must not be empty"));
            }
        }
        let appointment = business
            .appointment_mut(id)
            .ok_or(BookingError::not_found("appointment", id))?;
        if let Some(date) = patch.date {
            appointment.date = date;
        }
        if let Some(time) = patch.time {
            appointment.time = time;
        }
        if let Some(name) = patch.customer_name {
            appointment.customer_name = name;
        }
        if let Some(email) = patch.customer_email {
            appointment.customer_email = email;
        }
        if let Some(phone) = patch.customer_phone {
            appointment.customer_phone = phone;
        }
        if let Some(notes) = patch.notes {
            appointment.notes = notes;
        }
        business.touch();
        Ok(())
    }

    /// Moves the appointment to `status`. Transitions are
    /// unconstrained: any status may follow any other.
    pub fn set_status(
        business: &mut Business,
        id: Uuid,
        status: AppointmentStatus,
    ) -> BookingResult<()> {
        let appointment = business
            .appointment_mut(id)
            .ok_or(BookingError::not_found("appointment", id))?;
        appointment.status = status;
        business.touch();
        Ok(())
    }

    /// Removes the appointment identified by `id`, returning it.
    pub fn remove(business: &mut Business, id: Uuid) -> BookingResult<Appointment> {
        let position = business
            .appointments
            .iter()
            .position(|apt| apt.id == id)
            .ok_or(BookingError::not_found("appointment", id))?;
        let appointment = business.appointments.remove(position);
        business.touch();
        Ok(appointment)
    }

    pub fn get(business: &Business, id: Uuid) -> BookingResult<&Appointment> {
        business
            .appointment(id)
            .ok_or(BookingError::not_found("appointment", id))
    }

    /// Filters and sorts appointments for presentation. `today` is the
    /// reference date for the `Today`/`Upcoming`/`Past` buckets, which
    /// compare whole dates only. Results come back ordered by date,
    /// then time of day.
    pub fn search<'a>(
        business: &'a Business,
        filter: &AppointmentFilter,
        today: NaiveDate,
    ) -> Vec<&'a Appointment> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Appointment> = business
            .appointments
            .iter()
            .filter(|apt| match filter.status {
                StatusFilter::All => true,
                StatusFilter::Only(status) => apt.status == status,
            })
            .filter(|apt| match &needle {
                None => true,
                Some(term) => {
                    apt.customer_name.to_lowercase().contains(term)
                        || apt.service_name.to_lowercase().contains(term)
                        || apt.customer_email.to_lowercase().contains(term)
                }
            })
            .filter(|apt| match filter.date {
                DateFilter::All => true,
                DateFilter::Today => apt.date == today,
                DateFilter::Upcoming => apt.date >= today,
                DateFilter::Past => apt.date < today,
            })
            .collect();

        matches.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
        matches
    }
}

/// Presentation-facing appointment query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub date: DateFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Upcoming,
    Past,
}

impl DateFilter {
    pub fn parse(value: &str) -> BookingResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DateFilter::All),
            "today" => Ok(DateFilter::Today),
            "upcoming" => Ok(DateFilter::Upcoming),
            "past" => Ok(DateFilter::Past),
            other => Err(BookingError::invalid(format!(
                "unknown date filter `{other}` (expected all, today, upcoming, or past)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::ServiceDraft;
    use crate::core::services::CatalogService;
    use chrono::NaiveTime;

    fn slot(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn customer(name: &str) -> Customer {
        Customer {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Customer::default()
        }
    }

    fn business_with_service() -> (Business, Uuid) {
        let mut business = Business::new("Studio");
        let id = CatalogService::add(
            &mut business,
            ServiceDraft {
                name: "Deep Tissue Massage".into(),
                description: "Therapeutic massage".into(),
                duration_minutes: 90,
                price: 120.0,
                category: "Wellness".into(),
            },
        )
        .unwrap();
        (business, id)
    }

    #[test]
    fn booking_snapshots_price_and_duration() {
        let (mut business, service_id) = business_with_service();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let id =
            AppointmentService::book(&mut business, service_id, date, slot(14, 30), customer("Mia"))
                .unwrap();

        CatalogService::edit(
            &mut business,
            service_id,
            ServiceDraft {
                name: "Deep Tissue Massage".into(),
                description: "Therapeutic massage".into(),
                duration_minutes: 60,
                price: 150.0,
                category: "Wellness".into(),
            },
        )
        .unwrap();

        let apt = business.appointment(id).unwrap();
        assert_eq!(apt.duration_minutes, 90);
        assert_eq!(apt.price, 120.0);
        assert_eq!(apt.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn booking_requires_customer_contact() {
        let (mut business, service_id) = business_with_service();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let err = AppointmentService::book(
            &mut business,
            service_id,
            date,
            slot(10, 0),
            Customer::default(),
        )
        .expect_err("empty customer must be rejected");
        assert!(matches!(err, BookingError::InvalidInput(_)));
    }

    #[test]
    fn edit_leaves_status_price_duration_alone() {
        let (mut business, service_id) = business_with_service();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let id =
            AppointmentService::book(&mut business, service_id, date, slot(9, 0), customer("Lea"))
                .unwrap();
        AppointmentService::set_status(&mut business, id, AppointmentStatus::Completed).unwrap();

        AppointmentService::edit(
            &mut business,
            id,
            AppointmentPatch {
                date: NaiveDate::from_ymd_opt(2024, 6, 12),
                time: Some(slot(11, 30)),
                customer_phone: Some(Some("+1 555 0100".into())),
                notes: Some(None),
                ..AppointmentPatch::default()
            },
        )
        .unwrap();

        let apt = business.appointment(id).unwrap();
        assert_eq!(apt.status, AppointmentStatus::Completed);
        assert_eq!(apt.price, 120.0);
        assert_eq!(apt.duration_minutes, 90);
        assert_eq!(apt.time, slot(11, 30));
        assert_eq!(apt.customer_phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(apt.notes, None);
    }

    #[test]
    fn any_status_transition_is_allowed() {
        let (mut business, service_id) = business_with_service();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let id =
            AppointmentService::book(&mut business, service_id, date, slot(9, 0), customer("Avi"))
                .unwrap();

        AppointmentService::set_status(&mut business, id, AppointmentStatus::NoShow).unwrap();
        AppointmentService::set_status(&mut business, id, AppointmentStatus::Confirmed).unwrap();
        assert_eq!(
            business.appointment(id).unwrap().status,
            AppointmentStatus::Confirmed
        );
    }

    #[test]
    fn search_sorts_by_date_then_time() {
        let (mut business, service_id) = business_with_service();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        AppointmentService::book(&mut business, service_id, later, slot(9, 0), customer("Bea"))
            .unwrap();
        AppointmentService::book(&mut business, service_id, today, slot(15, 0), customer("Cal"))
            .unwrap();
        AppointmentService::book(&mut business, service_id, today, slot(9, 30), customer("Dan"))
            .unwrap();

        let results =
            AppointmentService::search(&business, &AppointmentFilter::default(), today);
        let names: Vec<&str> = results
            .iter()
            .map(|apt| apt.customer_name.as_str())
            .collect();
        assert_eq!(names, ["Dan", "Cal", "Bea"]);
    }

    #[test]
    fn date_buckets_compare_whole_dates() {
        let (mut business, service_id) = business_with_service();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        AppointmentService::book(
            &mut business,
            service_id,
            today,
            slot(23, 30),
            customer("Late"),
        )
        .unwrap();
        AppointmentService::book(
            &mut business,
            service_id,
            yesterday,
            slot(8, 0),
            customer("Gone"),
        )
        .unwrap();

        let todays = AppointmentService::search(
            &business,
            &AppointmentFilter {
                date: DateFilter::Today,
                ..AppointmentFilter::default()
            },
            today,
        );
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].customer_name, "Late");

        let upcoming = AppointmentService::search(
            &business,
            &AppointmentFilter {
                date: DateFilter::Upcoming,
                ..AppointmentFilter::default()
            },
            today,
        );
        assert_eq!(upcoming.len(), 1, "upcoming includes today");

        let past = AppointmentService::search(
            &business,
            &AppointmentFilter {
                date: DateFilter::Past,
                ..AppointmentFilter::default()
            },
            today,
        );
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].customer_name, "Gone");
    }

    #[test]
    fn text_search_spans_customer_service_and_email() {
        let (mut business, service_id) = business_with_service();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        AppointmentService::book(&mut business, service_id, today, slot(9, 0), customer("Sarah"))
            .unwrap();

        for term in ["sarah", "MASSAGE", "sarah@example.com"] {
            let filter = AppointmentFilter {
                search: Some(term.into()),
                ..AppointmentFilter::default()
            };
            assert_eq!(
                AppointmentService::search(&business, &filter, today).len(),
                1,
                "term `{term}` should match"
            );
        }

        let filter = AppointmentFilter {
            search: Some("haircut".into()),
            ..AppointmentFilter::default()
        };
        assert!(AppointmentService::search(&business, &filter, today).is_empty());
    }
}
