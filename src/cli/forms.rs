//! Interactive wizards backed by dialoguer. Script mode never reaches
//! these; commands run from arguments there.

use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input, Select};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::business::{
    Appointment, AppointmentPatch, Business, BusinessProfile, Category, CategoryDraft, Customer,
    DayHours, Service, ServiceDraft, Weekday,
};

use super::context::{parse_date, parse_time, CommandError};

/// The booking slot grid of the dashboard: half-hour steps, lunch
/// break excluded. Any HH:MM is still accepted through `custom`.
pub static TIME_SLOTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "14:00", "14:30",
        "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    ]
});

/// Suggested category colors, matching the dashboard palette.
pub static COLOR_OPTIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4", "#F97316", "#84CC16",
    ]
});

fn text(prompt: &str, default: Option<&str>) -> Result<String, CommandError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string()).show_default(true);
    }
    Ok(input.interact_text()?)
}

fn required_text(prompt: &str, default: Option<&str>) -> Result<String, CommandError> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        });
    if let Some(default) = default {
        input = input.default(default.to_string()).show_default(true);
    }
    Ok(input.interact_text()?)
}

fn date_input(prompt: &str, default: Option<NaiveDate>) -> Result<NaiveDate, CommandError> {
    let default = default.map(|date| date.format("%Y-%m-%d").to_string());
    loop {
        let raw = required_text(prompt, default.as_deref())?;
        match parse_date(&raw) {
            Ok(date) => return Ok(date),
            Err(err) => super::output::warning(err),
        }
    }
}

fn time_input(default: Option<NaiveTime>) -> Result<NaiveTime, CommandError> {
    let mut items: Vec<String> = TIME_SLOTS.iter().map(|slot| slot.to_string()).collect();
    items.push(String::from("custom…"));
    let initial = default
        .map(|time| time.format("%H:%M").to_string())
        .and_then(|current| items.iter().position(|item| item == &current))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Time")
        .items(&items)
        .default(initial)
        .interact()?;
    if picked < TIME_SLOTS.len() {
        return parse_time(items[picked].as_str());
    }
    loop {
        let raw = required_text("Time (HH:MM)", None)?;
        match parse_time(&raw) {
            Ok(time) => return Ok(time),
            Err(err) => super::output::warning(err),
        }
    }
}

/// Collects a full service draft, offering existing categories first.
pub fn service_form(
    business: &Business,
    initial: Option<&Service>,
) -> Result<ServiceDraft, CommandError> {
    let name = required_text("Service name", initial.map(|s| s.name.as_str()))?;
    let description = text("Description", initial.map(|s| s.description.as_str()))?;
    let duration_minutes = minutes_input(initial.map(|s| s.duration_minutes))?;
    let price = price_input(initial.map(|s| s.price))?;
    let category = category_pick(business, initial.map(|s| s.category.as_str()))?;
    Ok(ServiceDraft {
        name,
        description,
        duration_minutes,
        price,
        category,
    })
}

fn minutes_input(default: Option<u32>) -> Result<u32, CommandError> {
    let mut input = Input::<u32>::new()
        .with_prompt("Duration (minutes)")
        .validate_with(|value: &u32| {
            if *value == 0 {
                Err("duration must be positive")
            } else {
                Ok(())
            }
        });
    if let Some(default) = default {
        input = input.default(default).show_default(true);
    }
    Ok(input.interact_text()?)
}

fn price_input(default: Option<f64>) -> Result<f64, CommandError> {
    let mut input = Input::<f64>::new()
        .with_prompt("Price")
        .validate_with(|value: &f64| {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("price must be zero or positive")
            }
        });
    if let Some(default) = default {
        input = input.default(default).show_default(true);
    }
    Ok(input.interact_text()?)
}

fn category_pick(business: &Business, default: Option<&str>) -> Result<String, CommandError> {
    let mut items: Vec<String> = business
        .categories
        .iter()
        .map(|category| category.name.clone())
        .collect();
    if items.is_empty() {
        return required_text("Category", default);
    }
    items.push(String::from("other…"));
    let initial = default
        .and_then(|current| items.iter().position(|item| item == current))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(initial)
        .interact()?;
    if picked + 1 == items.len() {
        required_text("Category", default)
    } else {
        Ok(items[picked].clone())
    }
}

pub fn category_form(initial: Option<&Category>) -> Result<CategoryDraft, CommandError> {
    let name = required_text("Category name", initial.map(|c| c.name.as_str()))?;
    let description = text("Description", initial.map(|c| c.description.as_str()))?;
    let color = color_pick(initial.map(|c| c.color.as_str()))?;
    Ok(CategoryDraft {
        name,
        description,
        color,
    })
}

fn color_pick(default: Option<&str>) -> Result<String, CommandError> {
    let mut items: Vec<String> = COLOR_OPTIONS.iter().map(|color| color.to_string()).collect();
    items.push(String::from("custom…"));
    let initial = default
        .and_then(|current| items.iter().position(|item| item == current))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Color")
        .items(&items)
        .default(initial)
        .interact()?;
    if picked + 1 == items.len() {
        required_text("Color (hex)", default)
    } else {
        Ok(items[picked].clone())
    }
}

/// Walks through the whole booking flow: service, slot, customer.
pub fn booking_form(
    business: &Business,
) -> Result<(Uuid, NaiveDate, NaiveTime, Customer), CommandError> {
    let names: Vec<String> = business
        .services
        .iter()
        .map(|service| {
            format!(
                "{} ({} min, {:.2})",
                service.name, service.duration_minutes, service.price
            )
        })
        .collect();
    if names.is_empty() {
        return Err(CommandError::invalid(
            "No services to book. Create one with `add-service` first.",
        ));
    }
    let picked = Select::new()
        .with_prompt("Service")
        .items(&names)
        .default(0)
        .interact()?;
    let service_id = business.services[picked].id;

    let date = date_input("Date (YYYY-MM-DD, today, tomorrow)", None)?;
    let time = time_input(None)?;
    let name = required_text("Customer name", None)?;
    let email = required_text("Customer email", None)?;
    let phone = optional(text("Customer phone (optional)", None)?);
    let notes = optional(text("Notes (optional)", None)?);

    Ok((
        service_id,
        date,
        time,
        Customer {
            name,
            email,
            phone,
            notes,
        },
    ))
}

/// Edits every mutable appointment field, pre-filled with the current
/// values. Status, price, and duration are not offered.
pub fn appointment_form(appointment: &Appointment) -> Result<AppointmentPatch, CommandError> {
    let date = date_input("Date", Some(appointment.date))?;
    let time = time_input(Some(appointment.time))?;
    let customer_name = required_text("Customer name", Some(&appointment.customer_name))?;
    let customer_email = required_text("Customer email", Some(&appointment.customer_email))?;
    let phone = optional(text(
        "Customer phone (optional)",
        appointment.customer_phone.as_deref(),
    )?);
    let notes = optional(text("Notes (optional)", appointment.notes.as_deref())?);
    Ok(AppointmentPatch {
        date: Some(date),
        time: Some(time),
        customer_name: Some(customer_name),
        customer_email: Some(customer_email),
        customer_phone: Some(phone),
        notes: Some(notes),
    })
}

/// Full profile wizard: contact fields first, then per-day hours.
pub fn profile_form(current: &BusinessProfile) -> Result<BusinessProfile, CommandError> {
    let mut profile = current.clone();
    profile.name = required_text("Business name", Some(&current.name))?;
    profile.description = text("Description", Some(&current.description))?;
    profile.category = text("Business category", Some(&current.category))?;
    profile.address = text("Address", Some(&current.address))?;
    profile.phone = text("Phone", Some(&current.phone))?;
    profile.email = text("Email", Some(&current.email))?;
    profile.website = text("Website", Some(&current.website))?;

    if Confirm::new()
        .with_prompt("Edit operating hours?")
        .default(false)
        .interact()?
    {
        for day in Weekday::ALL {
            let hours = day_hours_input(day, *profile.hours.day(day))?;
            *profile.hours.day_mut(day) = hours;
        }
    }
    Ok(profile)
}

fn day_hours_input(day: Weekday, current: DayHours) -> Result<DayHours, CommandError> {
    let open = Confirm::new()
        .with_prompt(format!("{} open?", day.label()))
        .default(current.open)
        .interact()?;
    if !open {
        return Ok(DayHours::closed());
    }
    let start = time_input(current.start)?;
    let end = time_input(current.end)?;
    Ok(DayHours {
        open,
        start: Some(start),
        end: Some(end),
    })
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
