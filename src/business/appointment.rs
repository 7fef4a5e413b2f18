use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;

use super::service::Service;

/// A booked instance of a service for a customer at a date and time.
///
/// `duration_minutes` and `price` are snapshots taken from the service
/// at booking time; later service edits do not reach back into
/// existing appointments. `service_name` is snapshotted the same way
/// so an appointment stays displayable after its service is renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub duration_minutes: u32,
    pub price: f64,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Books a new appointment against `service`, snapshotting its
    /// name, duration, and price. New appointments start confirmed.
    pub fn book(service: &Service, date: NaiveDate, time: NaiveTime, customer: Customer) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_id: service.id,
            service_name: service.name.clone(),
            date,
            time,
            customer_name: customer.name,
            customer_email: customer.email,
            customer_phone: customer.phone,
            notes: customer.notes,
            duration_minutes: service.duration_minutes,
            price: service.price,
            status: AppointmentStatus::Confirmed,
        }
    }
}

/// Contact details captured when an appointment is booked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Fields an appointment edit may change. Status, price, and duration
/// are deliberately absent; status moves through
/// `AppointmentService::set_status` and the snapshots never move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.customer_name.is_none()
            && self.customer_email.is_none()
            && self.customer_phone.is_none()
            && self.notes.is_none()
    }
}

/// Lifecycle state of an appointment.
///
/// There is no transition graph: any status may move to any other.
/// The dashboard's "restore" action is an ordinary transition back to
/// `Confirmed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    /// Human-facing label, e.g. `No show`.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
            "no-show" | "noshow" => Ok(AppointmentStatus::NoShow),
            other => Err(BookingError::invalid(format!(
                "unknown appointment status `{other}`"
            ))),
        }
    }
}
