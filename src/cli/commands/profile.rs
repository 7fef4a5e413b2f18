use crate::business::{DayHours, Weekday};
use crate::cli::context::{
    parse_time, CommandError, CommandResult, LoopControl, ShellContext,
};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::ProfileService;

pub fn show(context: &mut ShellContext) -> CommandResult {
    let profile = &context.business.profile;
    output::section("Business profile");
    output::info(format!("Name:        {}", profile.name));
    if !profile.description.is_empty() {
        output::info(format!("Description: {}", profile.description));
    }
    if !profile.category.is_empty() {
        output::info(format!("Category:    {}", profile.category));
    }
    if !profile.address.is_empty() {
        output::info(format!("Address:     {}", profile.address));
    }
    if !profile.phone.is_empty() {
        output::info(format!("Phone:       {}", profile.phone));
    }
    if !profile.email.is_empty() {
        output::info(format!("Email:       {}", profile.email));
    }
    if !profile.website.is_empty() {
        output::info(format!("Website:     {}", profile.website));
    }

    let mut table = Table::new(vec![
        TableColumn::left("Day"),
        TableColumn::left("Hours"),
    ]);
    for (day, hours) in profile.hours.iter() {
        table.push_row(vec![day.label().to_string(), describe_day(hours)]);
    }
    output::section("Operating hours");
    output::table(&table);
    output::info(format!(
        "Open {} day(s), {} hour(s) per week.",
        profile.hours.open_day_count(),
        profile.hours.weekly_hours()
    ));
    Ok(LoopControl::Continue)
}

pub fn edit(context: &mut ShellContext) -> CommandResult {
    if !context.is_interactive() {
        return Err(CommandError::invalid(
            "edit-profile is interactive; use `set-profile` and `hours` in scripts",
        ));
    }
    let profile = forms::profile_form(&context.business.profile)?;
    ProfileService::replace(&mut context.business, profile)?;
    output::success("Business settings updated.");
    Ok(LoopControl::Continue)
}

pub fn set_field(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [field, rest @ ..] = args else {
        return Err(CommandError::invalid(
            "Usage: set-profile <field> <value…>",
        ));
    };
    if rest.is_empty() {
        return Err(CommandError::invalid("Usage: set-profile <field> <value…>"));
    }
    let value = rest.join(" ");

    let mut profile = context.business.profile.clone();
    match *field {
        "name" => profile.name = value,
        "description" => profile.description = value,
        "category" => profile.category = value,
        "address" => profile.address = value,
        "phone" => profile.phone = value,
        "email" => profile.email = value,
        "website" => profile.website = value,
        other => {
            return Err(CommandError::invalid(format!(
                "Unknown profile field `{other}`"
            )))
        }
    }
    ProfileService::replace(&mut context.business, profile)?;
    output::success(format!("Profile {field} updated."));
    Ok(LoopControl::Continue)
}

pub fn set_hours(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let usage = "Usage: hours <weekday> closed|<HH:MM> <HH:MM>";
    let [day, rest @ ..] = args else {
        return Err(CommandError::invalid(usage));
    };
    let day = parse_weekday(day)?;

    let hours = match rest {
        [keyword] if keyword.eq_ignore_ascii_case("closed") => DayHours::closed(),
        [start, end] => {
            let start = parse_time(start)?;
            let end = parse_time(end)?;
            if end <= start {
                return Err(CommandError::invalid("end time must be after start time"));
            }
            DayHours::open_between(start, end)
        }
        _ => return Err(CommandError::invalid(usage)),
    };

    let mut profile = context.business.profile.clone();
    *profile.hours.day_mut(day) = hours;
    ProfileService::replace(&mut context.business, profile)?;

    output::success(format!(
        "{}: {}.",
        day.label(),
        describe_day(context.business.profile.hours.day(day))
    ));
    Ok(LoopControl::Continue)
}

fn describe_day(hours: &DayHours) -> String {
    match (hours.open, hours.start, hours.end) {
        (true, Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%H:%M"),
            end.format("%H:%M")
        ),
        (true, _, _) => String::from("Open (hours unset)"),
        (false, _, _) => String::from("Closed"),
    }
}

fn parse_weekday(value: &str) -> Result<Weekday, CommandError> {
    let lowered = value.trim().to_ascii_lowercase();
    Weekday::ALL
        .iter()
        .find(|day| {
            let label = day.label().to_ascii_lowercase();
            label == lowered || (lowered.len() >= 3 && label.starts_with(&lowered))
        })
        .copied()
        .ok_or_else(|| CommandError::invalid(format!("`{value}` is not a weekday")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_parsing_accepts_prefixes() {
        assert_eq!(parse_weekday("monday").unwrap(), Weekday::Monday);
        assert_eq!(parse_weekday("Sat").unwrap(), Weekday::Saturday);
        assert!(parse_weekday("mo").is_err(), "too short to be unambiguous");
        assert!(parse_weekday("noday").is_err());
    }
}
