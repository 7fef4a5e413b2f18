//! Shell context, command dispatch, and argument helpers.

use chrono::{Days, Local, NaiveDate, NaiveTime};
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::business::Business;
use crate::errors::BookingError;

use super::commands;
use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CommandError>;

/// Failures that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Failures of a single command; the shell reports them and keeps
/// running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

impl CommandError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }
}

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "overview",
        usage: "overview",
        summary: "Show booking statistics and the business profile",
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        summary: "List categories with their service counts",
    },
    CommandSpec {
        name: "add-category",
        usage: "add-category [name] [description] [color]",
        summary: "Create a category (wizard when run without arguments)",
    },
    CommandSpec {
        name: "edit-category",
        usage: "edit-category <category> [name] [description] [color]",
        summary: "Edit a category; renames propagate to its services",
    },
    CommandSpec {
        name: "remove-category",
        usage: "remove-category <category>",
        summary: "Delete an empty category",
    },
    CommandSpec {
        name: "services",
        usage: "services",
        summary: "List bookable services",
    },
    CommandSpec {
        name: "add-service",
        usage: "add-service [name] [minutes] [price] [category] [description]",
        summary: "Create a service (wizard when run without arguments)",
    },
    CommandSpec {
        name: "edit-service",
        usage: "edit-service <service> [name] [minutes] [price] [category] [description]",
        summary: "Edit a service",
    },
    CommandSpec {
        name: "remove-service",
        usage: "remove-service <service>",
        summary: "Delete a service and every appointment booked on it",
    },
    CommandSpec {
        name: "appointments",
        usage: "appointments [--status <status>] [--date all|today|upcoming|past] [term]",
        summary: "List appointments, filtered and sorted by date and time",
    },
    CommandSpec {
        name: "book",
        usage: "book [service] [date] [HH:MM] [customer] [email] [phone]",
        summary: "Book an appointment (wizard when run without arguments)",
    },
    CommandSpec {
        name: "edit-appointment",
        usage: "edit-appointment <appointment> [field=value ...]",
        summary: "Edit date, time, contact fields, or notes",
    },
    CommandSpec {
        name: "status",
        usage: "status <appointment> <confirmed|completed|cancelled|no-show>",
        summary: "Set an appointment's status",
    },
    CommandSpec {
        name: "restore",
        usage: "restore <appointment>",
        summary: "Move a cancelled appointment back to confirmed",
    },
    CommandSpec {
        name: "remove-appointment",
        usage: "remove-appointment <appointment>",
        summary: "Delete an appointment",
    },
    CommandSpec {
        name: "profile",
        usage: "profile",
        summary: "Show the business profile and weekly schedule",
    },
    CommandSpec {
        name: "edit-profile",
        usage: "edit-profile",
        summary: "Edit the business profile interactively",
    },
    CommandSpec {
        name: "set-profile",
        usage: "set-profile <name|description|category|address|phone|email|website> <value>",
        summary: "Set one profile field",
    },
    CommandSpec {
        name: "hours",
        usage: "hours <weekday> closed|<HH:MM> <HH:MM>",
        summary: "Set operating hours for one weekday",
    },
    CommandSpec {
        name: "export",
        usage: "export",
        summary: "Print the full business state as JSON",
    },
    CommandSpec {
        name: "demo",
        usage: "demo",
        summary: "Replace the current state with the sample data set",
    },
    CommandSpec {
        name: "help",
        usage: "help [command]",
        summary: "Show available commands",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

/// Holds the in-memory business state for the lifetime of the shell.
/// There is no persistence; `exit` discards everything.
pub struct ShellContext {
    mode: CliMode,
    pub business: Business,
    pub running: bool,
    pub last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        crate::init();
        output::set_preferences(output::OutputPreferences {
            plain_mode: mode == CliMode::Script,
            quiet_mode: false,
        });
        Ok(Self {
            mode,
            business: Business::new("My Business"),
            running: true,
            last_command: None,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn prompt(&self) -> String {
        String::from("booking> ")
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match command {
            "overview" => commands::overview::show(self),
            "categories" => commands::category::list(self),
            "add-category" => commands::category::add(self, args),
            "edit-category" => commands::category::edit(self, args),
            "remove-category" => commands::category::remove(self, args),
            "services" => commands::service::list(self),
            "add-service" => commands::service::add(self, args),
            "edit-service" => commands::service::edit(self, args),
            "remove-service" => commands::service::remove(self, args),
            "appointments" => commands::appointment::list(self, args),
            "book" => commands::appointment::book(self, args),
            "edit-appointment" => commands::appointment::edit(self, args),
            "status" => commands::appointment::set_status(self, args),
            "restore" => commands::appointment::restore(self, args),
            "remove-appointment" => commands::appointment::remove(self, args),
            "profile" => commands::profile::show(self),
            "edit-profile" => commands::profile::edit(self),
            "set-profile" => commands::profile::set_field(self, args),
            "hours" => commands::profile::set_hours(self, args),
            "export" => commands::overview::export(self),
            "demo" => commands::overview::demo(self),
            "help" => commands::overview::help(args),
            "exit" | "quit" => Ok(LoopControl::Exit),
            unknown => Err(unknown_command(unknown)),
        }
    }

    /// Asks before a destructive operation. Script mode never blocks
    /// on input, so it treats every confirmation as accepted.
    pub fn confirm(&self, message: &str) -> Result<bool, CommandError> {
        if !self.is_interactive() {
            return Ok(true);
        }
        let accepted = dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(accepted)
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err);
    }

    /// Resolves a service reference: full id, id prefix, or
    /// case-insensitive name.
    pub fn resolve_service(&self, reference: &str) -> Result<Uuid, CommandError> {
        resolve(
            "service",
            reference,
            self.business
                .services
                .iter()
                .map(|service| (service.id, service.name.as_str())),
        )
    }

    pub fn resolve_category(&self, reference: &str) -> Result<Uuid, CommandError> {
        resolve(
            "category",
            reference,
            self.business
                .categories
                .iter()
                .map(|category| (category.id, category.name.as_str())),
        )
    }

    /// Appointments have no unique name; references match by id, id
    /// prefix, or customer name.
    pub fn resolve_appointment(&self, reference: &str) -> Result<Uuid, CommandError> {
        resolve(
            "appointment",
            reference,
            self.business
                .appointments
                .iter()
                .map(|apt| (apt.id, apt.customer_name.as_str())),
        )
    }
}

fn unknown_command(name: &str) -> CommandError {
    let suggestion = COMMANDS
        .iter()
        .map(|spec| (spec.name, levenshtein(name, spec.name)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(candidate, _)| candidate);
    match suggestion {
        Some(candidate) => CommandError::invalid(format!(
            "Unknown command `{name}`. Did you mean `{candidate}`? Try `help`."
        )),
        None => CommandError::invalid(format!("Unknown command `{name}`. Try `help`.")),
    }
}

fn resolve<'a>(
    entity: &'static str,
    reference: &str,
    candidates: impl Iterator<Item = (Uuid, &'a str)>,
) -> Result<Uuid, CommandError> {
    let needle = reference.trim();
    let lowered = needle.to_lowercase();
    let mut by_prefix: Vec<(Uuid, &str)> = Vec::new();
    let mut by_name: Vec<(Uuid, &str)> = Vec::new();

    for (id, name) in candidates {
        if id.to_string() == lowered {
            return Ok(id);
        }
        if id.to_string().starts_with(&lowered) {
            by_prefix.push((id, name));
        }
        if name.to_lowercase() == lowered {
            by_name.push((id, name));
        }
    }

    let matches = if by_name.is_empty() { by_prefix } else { by_name };
    match matches.as_slice() {
        [] => Err(CommandError::invalid(format!(
            "No {entity} matches `{needle}`."
        ))),
        [(id, _)] => Ok(*id),
        many => {
            let listed: Vec<String> = many
                .iter()
                .map(|(id, name)| format!("{} ({})", name, short_id(*id)))
                .collect();
            Err(CommandError::invalid(format!(
                "`{needle}` is ambiguous between: {}.",
                listed.join(", ")
            )))
        }
    }
}

pub fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today()),
        "tomorrow" => today()
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CommandError::invalid("date out of range")),
        raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            CommandError::invalid(format!("`{value}` is not a date (expected YYYY-MM-DD)"))
        }),
    }
}

pub fn parse_time(value: &str) -> Result<NaiveTime, CommandError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| CommandError::invalid(format!("`{value}` is not a time (expected HH:MM)")))
}

pub fn parse_minutes(value: &str) -> Result<u32, CommandError> {
    let minutes: u32 = value
        .trim()
        .parse()
        .map_err(|_| CommandError::invalid(format!("`{value}` is not a whole number of minutes")))?;
    if minutes == 0 {
        return Err(CommandError::invalid("duration must be positive"));
    }
    Ok(minutes)
}

pub fn parse_price(value: &str) -> Result<f64, CommandError> {
    let price: f64 = value
        .trim()
        .parse()
        .map_err(|_| CommandError::invalid(format!("`{value}` is not a price")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CommandError::invalid("price must be zero or positive"));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_commands_get_a_suggestion() {
        let err = unknown_command("servces");
        let message = err.to_string();
        assert!(message.contains("Did you mean `services`?"), "{message}");
    }

    #[test]
    fn parse_date_accepts_iso_and_keywords() {
        assert_eq!(
            parse_date("2024-06-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
        assert_eq!(parse_date("today").unwrap(), today());
        assert!(parse_date("06/10/2024").is_err());
    }

    #[test]
    fn resolver_prefers_exact_names_over_prefixes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let candidates = vec![(a, "Massage"), (b, "Massage Deluxe")];
        let resolved = resolve("service", "massage", candidates.clone().into_iter()).unwrap();
        assert_eq!(resolved, a);

        let err = resolve("service", "nothing", candidates.into_iter()).expect_err("no match");
        assert!(err.to_string().contains("No service matches"));
    }

    #[test]
    fn resolver_reports_ambiguity() {
        let candidates = vec![(Uuid::new_v4(), "Ana"), (Uuid::new_v4(), "ANA")];
        let err = resolve("appointment", "ana", candidates.into_iter()).expect_err("ambiguous");
        assert!(err.to_string().contains("ambiguous"));
    }
}
