use crate::business::ServiceDraft;
use crate::cli::context::{
    parse_minutes, parse_price, short_id, CommandError, CommandResult, LoopControl, ShellContext,
};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::CatalogService;

pub fn list(context: &mut ShellContext) -> CommandResult {
    let services = CatalogService::list(&context.business);
    if services.is_empty() {
        output::info("No services yet. Create one with `add-service`.");
        return Ok(LoopControl::Continue);
    }

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::right("Minutes"),
        TableColumn::right("Price"),
        TableColumn::left("Category"),
        TableColumn::left("Description").capped(40),
    ]);
    for service in services {
        table.push_row(vec![
            short_id(service.id),
            service.name.clone(),
            service.duration_minutes.to_string(),
            format!("{:.2}", service.price),
            service.category.clone(),
            service.description.clone(),
        ]);
    }
    output::section("Services");
    output::table(&table);
    Ok(LoopControl::Continue)
}

pub fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = draft_from_args(context, args)?;
    let id = CatalogService::add(&mut context.business, draft)?;
    let service = CatalogService::get(&context.business, id)?;
    output::success(format!(
        "Service `{}` created ({}).",
        service.name,
        short_id(id)
    ));
    Ok(LoopControl::Continue)
}

pub fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: edit-service <service> [fields…]"))?;
    let id = context.resolve_service(reference)?;
    let current = CatalogService::get(&context.business, id)?.clone();

    let draft = if args.len() > 1 {
        positional_draft(&args[1..])?
    } else if context.is_interactive() {
        forms::service_form(&context.business, Some(&current))?
    } else {
        return Err(CommandError::invalid(
            "Usage: edit-service <service> <name> <minutes> <price> <category> [description]",
        ));
    };

    CatalogService::edit(&mut context.business, id, draft)?;
    output::success(format!("Service `{reference}` updated."));
    Ok(LoopControl::Continue)
}

pub fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: remove-service <service>"))?;
    let id = context.resolve_service(reference)?;
    let service = CatalogService::get(&context.business, id)?;
    let linked = context
        .business
        .appointments
        .iter()
        .filter(|apt| apt.service_id == id)
        .count();

    let prompt = if linked > 0 {
        format!(
            "Delete service `{}` and its {linked} appointment(s)?",
            service.name
        )
    } else {
        format!("Delete service `{}`?", service.name)
    };
    if !context.confirm(&prompt)? {
        output::info("Nothing deleted.");
        return Ok(LoopControl::Continue);
    }

    let removed = CatalogService::remove(&mut context.business, id)?;
    if linked > 0 {
        output::success(format!(
            "Service `{}` deleted along with {linked} appointment(s).",
            removed.name
        ));
    } else {
        output::success(format!("Service `{}` deleted.", removed.name));
    }
    Ok(LoopControl::Continue)
}

fn draft_from_args(context: &ShellContext, args: &[&str]) -> Result<ServiceDraft, CommandError> {
    if args.is_empty() {
        if context.is_interactive() {
            return forms::service_form(&context.business, None);
        }
        return Err(CommandError::invalid(
            "Usage: add-service <name> <minutes> <price> <category> [description]",
        ));
    }
    positional_draft(args)
}

fn positional_draft(args: &[&str]) -> Result<ServiceDraft, CommandError> {
    let [name, minutes, price, category, description @ ..] = args else {
        return Err(CommandError::invalid(
            "Expected: <name> <minutes> <price> <category> [description]",
        ));
    };
    Ok(ServiceDraft {
        name: name.to_string(),
        description: description.join(" "),
        duration_minutes: parse_minutes(minutes)?,
        price: parse_price(price)?,
        category: category.to_string(),
    })
}
