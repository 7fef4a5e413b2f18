use chrono::Datelike;

use crate::business::{AppointmentPatch, AppointmentStatus, Customer, Weekday};
use crate::cli::context::{
    parse_date, parse_time, short_id, today, CommandError, CommandResult, LoopControl,
    ShellContext,
};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{AppointmentFilter, AppointmentService, DateFilter, StatusFilter};

pub fn list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(args)?;
    let results = AppointmentService::search(&context.business, &filter, today());

    if results.is_empty() {
        if context.business.appointments.is_empty() {
            output::info("No appointments yet. Book one with `book`.");
        } else {
            output::info("No appointments match the current filters.");
        }
        return Ok(LoopControl::Continue);
    }

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Time"),
        TableColumn::left("Service"),
        TableColumn::left("Customer"),
        TableColumn::left("Email"),
        TableColumn::right("Price"),
        TableColumn::left("Status"),
    ]);
    for apt in results {
        table.push_row(vec![
            short_id(apt.id),
            apt.date.format("%Y-%m-%d").to_string(),
            apt.time.format("%H:%M").to_string(),
            apt.service_name.clone(),
            apt.customer_name.clone(),
            apt.customer_email.clone(),
            format!("{:.2}", apt.price),
            apt.status.label().to_string(),
        ]);
    }
    output::section("Appointments");
    output::table(&table);
    Ok(LoopControl::Continue)
}

pub fn book(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (service_id, date, time, customer) = if args.is_empty() {
        if !context.is_interactive() {
            return Err(CommandError::invalid(
                "Usage: book <service> <date> <HH:MM> <customer> <email> [phone]",
            ));
        }
        forms::booking_form(&context.business)?
    } else {
        let [service, date, time, name, email, rest @ ..] = args else {
            return Err(CommandError::invalid(
                "Usage: book <service> <date> <HH:MM> <customer> <email> [phone]",
            ));
        };
        (
            context.resolve_service(service)?,
            parse_date(date)?,
            parse_time(time)?,
            Customer {
                name: name.to_string(),
                email: email.to_string(),
                phone: rest.first().map(|phone| phone.to_string()),
                notes: None,
            },
        )
    };

    let weekday = Weekday::from_chrono(date.weekday());
    if !context.business.profile.hours.day(weekday).open {
        output::warning(format!(
            "The business is closed on {}s; booking anyway.",
            weekday.label()
        ));
    }

    let id = AppointmentService::book(&mut context.business, service_id, date, time, customer)?;
    let apt = AppointmentService::get(&context.business, id)?;
    output::success(format!(
        "Booked `{}` for {} on {} at {} ({}).",
        apt.service_name,
        apt.customer_name,
        apt.date.format("%Y-%m-%d"),
        apt.time.format("%H:%M"),
        short_id(id)
    ));
    Ok(LoopControl::Continue)
}

pub fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args.first().ok_or_else(|| {
        CommandError::invalid("Usage: edit-appointment <appointment> [field=value …]")
    })?;
    let id = context.resolve_appointment(reference)?;

    let patch = if args.len() > 1 {
        patch_from_pairs(&args[1..])?
    } else if context.is_interactive() {
        let current = AppointmentService::get(&context.business, id)?.clone();
        forms::appointment_form(&current)?
    } else {
        return Err(CommandError::invalid(
            "Usage: edit-appointment <appointment> date=… time=… name=… email=… phone=… notes=…",
        ));
    };

    if patch.is_empty() {
        output::info("Nothing to change.");
        return Ok(LoopControl::Continue);
    }
    AppointmentService::edit(&mut context.business, id, patch)?;
    output::success(format!("Appointment `{reference}` updated."));
    Ok(LoopControl::Continue)
}

pub fn set_status(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference, status] = args else {
        return Err(CommandError::invalid(
            "Usage: status <appointment> <confirmed|completed|cancelled|no-show>",
        ));
    };
    let id = context.resolve_appointment(reference)?;
    let status: AppointmentStatus = status.parse().map_err(CommandError::Booking)?;
    AppointmentService::set_status(&mut context.business, id, status)?;
    output::success(format!("Appointment `{reference}` is now {status}."));
    Ok(LoopControl::Continue)
}

pub fn restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: restore <appointment>"))?;
    let id = context.resolve_appointment(reference)?;
    let current = AppointmentService::get(&context.business, id)?.status;
    if current != AppointmentStatus::Cancelled {
        output::warning(format!(
            "Appointment `{reference}` is {current}, not cancelled; restoring anyway."
        ));
    }
    AppointmentService::set_status(&mut context.business, id, AppointmentStatus::Confirmed)?;
    output::success(format!("Appointment `{reference}` restored to confirmed."));
    Ok(LoopControl::Continue)
}

pub fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: remove-appointment <appointment>"))?;
    let id = context.resolve_appointment(reference)?;
    let apt = AppointmentService::get(&context.business, id)?;
    let prompt = format!(
        "Delete the {} appointment for {}?",
        apt.service_name, apt.customer_name
    );
    if !context.confirm(&prompt)? {
        output::info("Nothing deleted.");
        return Ok(LoopControl::Continue);
    }
    let removed = AppointmentService::remove(&mut context.business, id)?;
    output::success(format!(
        "Deleted the {} appointment for {}.",
        removed.service_name, removed.customer_name
    ));
    Ok(LoopControl::Continue)
}

fn parse_filter(args: &[&str]) -> Result<AppointmentFilter, CommandError> {
    let mut filter = AppointmentFilter::default();
    let mut terms: Vec<&str> = Vec::new();
    let mut idx = 0;
    while idx < args.len() {
        match args[idx] {
            "--status" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| CommandError::invalid("--status needs a value"))?;
                filter.status = if value.eq_ignore_ascii_case("all") {
                    StatusFilter::All
                } else {
                    StatusFilter::Only(value.parse().map_err(CommandError::Booking)?)
                };
                idx += 2;
            }
            "--date" => {
                let value = args
                    .get(idx + 1)
                    .ok_or_else(|| CommandError::invalid("--date needs a value"))?;
                filter.date = DateFilter::parse(value).map_err(CommandError::Booking)?;
                idx += 2;
            }
            term => {
                terms.push(term);
                idx += 1;
            }
        }
    }
    if !terms.is_empty() {
        filter.search = Some(terms.join(" "));
    }
    Ok(filter)
}

/// Parses `field=value` pairs into a patch. `phone=` and `notes=`
/// with an empty value clear the field.
fn patch_from_pairs(pairs: &[&str]) -> Result<AppointmentPatch, CommandError> {
    let mut patch = AppointmentPatch::default();
    for pair in pairs {
        let (field, value) = pair.split_once('=').ok_or_else(|| {
            CommandError::invalid(format!("`{pair}` is not a field=value pair"))
        })?;
        match field {
            "date" => patch.date = Some(parse_date(value)?),
            "time" => patch.time = Some(parse_time(value)?),
            "name" => patch.customer_name = Some(value.to_string()),
            "email" => patch.customer_email = Some(value.to_string()),
            "phone" => {
                patch.customer_phone = Some(if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                })
            }
            "notes" => {
                patch.notes = Some(if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                })
            }
            other => {
                return Err(CommandError::invalid(format!(
                    "Unknown field `{other}` (expected date, time, name, email, phone, notes)"
                )))
            }
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parsing_combines_flags_and_terms() {
        let filter = parse_filter(&["--status", "completed", "--date", "past", "sarah"]).unwrap();
        assert_eq!(
            filter.status,
            StatusFilter::Only(AppointmentStatus::Completed)
        );
        assert_eq!(filter.date, DateFilter::Past);
        assert_eq!(filter.search.as_deref(), Some("sarah"));
    }

    #[test]
    fn filter_rejects_unknown_status() {
        assert!(parse_filter(&["--status", "pending"]).is_err());
        assert!(parse_filter(&["--date", "yesterday"]).is_err());
    }

    #[test]
    fn empty_pair_values_clear_optional_fields() {
        let patch = patch_from_pairs(&["phone=", "notes=checkup"]).unwrap();
        assert_eq!(patch.customer_phone, Some(None));
        assert_eq!(patch.notes, Some(Some("checkup".into())));
        assert!(patch.date.is_none());
    }
}
