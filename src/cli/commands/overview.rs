use crate::cli::context::{
    today, CommandError, CommandResult, LoopControl, ShellContext, COMMANDS,
};
use crate::cli::demo;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::SummaryService;

pub fn show(context: &mut ShellContext) -> CommandResult {
    let overview = SummaryService::overview(&context.business, today());
    let profile = &context.business.profile;

    output::section(format!("{} overview", profile.name));
    output::info(format!(
        "Today's appointments:  {}",
        overview.appointments_today
    ));
    output::info(format!(
        "Upcoming bookings:     {}",
        overview.upcoming_appointments
    ));
    output::info(format!(
        "Completed revenue:     {:.2}",
        overview.completed_revenue
    ));
    output::info(format!(
        "Completion rate:       {}%",
        overview.completion_rate_percent
    ));
    output::info(format!(
        "Catalog:               {} service(s) in {} categorie(s), {} appointment(s) total",
        overview.service_total, overview.category_total, overview.appointment_total
    ));
    output::info(format!(
        "Schedule:              open {} day(s), {} hour(s) per week",
        profile.hours.open_day_count(),
        profile.hours.weekly_hours()
    ));
    Ok(LoopControl::Continue)
}

pub fn export(context: &mut ShellContext) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.business)?;
    println!("{json}");
    Ok(LoopControl::Continue)
}

pub fn demo(context: &mut ShellContext) -> CommandResult {
    context.business = demo::sample_business().map_err(CommandError::Booking)?;
    output::success("Loaded the sample business data set.");
    Ok(LoopControl::Continue)
}

pub fn help(args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let spec = COMMANDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CommandError::invalid(format!("Unknown command `{name}`.")))?;
        output::info(format!("Usage: {}", spec.usage));
        output::info(spec.summary);
        return Ok(LoopControl::Continue);
    }

    let mut table = Table::new(vec![
        TableColumn::left("Command"),
        TableColumn::left("Description"),
    ]);
    for spec in COMMANDS {
        table.push_row(vec![spec.usage.to_string(), spec.summary.to_string()]);
    }
    output::section("Commands");
    output::table(&table);
    Ok(LoopControl::Continue)
}
