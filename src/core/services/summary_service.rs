use chrono::NaiveDate;

use crate::business::{AppointmentStatus, Business};

/// Derived dashboard statistics. Nothing here is stored; every figure
/// is computed from the collections on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessOverview {
    pub appointments_today: usize,
    pub upcoming_appointments: usize,
    pub completed_revenue: f64,
    pub completion_rate_percent: u32,
    pub service_total: usize,
    pub category_total: usize,
    pub appointment_total: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Computes the overview figures against a reference date.
    /// "Upcoming" counts appointments from `today` onward that are not
    /// cancelled; revenue sums completed appointments only.
    pub fn overview(business: &Business, today: NaiveDate) -> BusinessOverview {
        let appointments = &business.appointments;
        let appointments_today = appointments
            .iter()
            .filter(|apt| apt.date == today)
            .count();
        let upcoming_appointments = appointments
            .iter()
            .filter(|apt| apt.date >= today && apt.status != AppointmentStatus::Cancelled)
            .count();
        let completed = appointments
            .iter()
            .filter(|apt| apt.status == AppointmentStatus::Completed)
            .count();
        let completed_revenue = appointments
            .iter()
            .filter(|apt| apt.status == AppointmentStatus::Completed)
            .map(|apt| apt.price)
            .sum();
        let completion_rate_percent = if appointments.is_empty() {
            0
        } else {
            ((completed as f64 / appointments.len() as f64) * 100.0).round() as u32
        };

        BusinessOverview {
            appointments_today,
            upcoming_appointments,
            completed_revenue,
            completion_rate_percent,
            service_total: business.services.len(),
            category_total: business.categories.len(),
            appointment_total: appointments.len(),
        }
    }
}
