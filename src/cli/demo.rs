//! Sample data set so the shell has something to show without any
//! persistence: three categories, three services, two bookings.

use chrono::{Days, NaiveTime};

use crate::business::{Business, CategoryDraft, Customer, DayHours, ServiceDraft, Weekday};
use crate::core::services::{AppointmentService, CatalogService, CategoryService};
use crate::errors::{BookingError, BookingResult};

use super::context::today;

fn at(hour: u32, minute: u32) -> BookingResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| BookingError::invalid("time out of range"))
}

pub fn sample_business() -> BookingResult<Business> {
    let mut business = Business::new("BookingPro Business");
    business.profile.description =
        String::from("Professional booking and appointment management for your business");
    business.profile.category = String::from("professional");
    business.profile.address = String::from("123 Business Street, City, State 12345");
    business.profile.phone = String::from("+1 (555) 123-4567");
    business.profile.email = String::from("contact@bookingpro.com");
    business.profile.website = String::from("https://bookingpro.com");
    *business.profile.hours.day_mut(Weekday::Saturday) =
        DayHours::open_between(at(10, 0)?, at(15, 0)?);

    for (name, description, color) in [
        ("Hair Care", "Professional hair services", "#3B82F6"),
        ("Wellness", "Health and wellness treatments", "#10B981"),
        ("Consulting", "Business and professional consulting", "#F59E0B"),
    ] {
        CategoryService::add(
            &mut business,
            CategoryDraft {
                name: name.into(),
                description: description.into(),
                color: color.into(),
            },
        )?;
    }

    let mut service_ids = Vec::new();
    for (name, description, duration_minutes, price, category) in [
        (
            "Hair Cut & Style",
            "Professional haircut with styling consultation. Includes wash, cut, and blow-dry.",
            60,
            85.0,
            "Hair Care",
        ),
        (
            "Deep Tissue Massage",
            "Therapeutic deep tissue massage to relieve muscle tension and stress.",
            90,
            120.0,
            "Wellness",
        ),
        (
            "Business Consultation",
            "Strategic business consultation session covering growth planning and market analysis.",
            45,
            200.0,
            "Consulting",
        ),
    ] {
        let id = CatalogService::add(
            &mut business,
            ServiceDraft {
                name: name.into(),
                description: description.into(),
                duration_minutes,
                price,
                category: category.into(),
            },
        )?;
        service_ids.push(id);
    }

    let today = today();
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| BookingError::invalid("date out of range"))?;

    AppointmentService::book(
        &mut business,
        service_ids[0],
        today,
        at(10, 0)?,
        Customer {
            name: "Sarah Johnson".into(),
            email: "sarah@example.com".into(),
            phone: Some("+1 (555) 123-4567".into()),
            notes: None,
        },
    )?;
    AppointmentService::book(
        &mut business,
        service_ids[1],
        tomorrow,
        at(14, 30)?,
        Customer {
            name: "Mike Chen".into(),
            email: "mike@example.com".into(),
            phone: None,
            notes: Some("Focus on lower back tension".into()),
        },
    )?;

    Ok(business)
}
