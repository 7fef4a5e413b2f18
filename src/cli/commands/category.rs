use crate::business::CategoryDraft;
use crate::cli::context::{
    short_id, CommandError, CommandResult, LoopControl, ShellContext,
};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::CategoryService;

pub fn list(context: &mut ShellContext) -> CommandResult {
    let categories = CategoryService::list(&context.business);
    if categories.is_empty() {
        output::info("No categories yet. Create one with `add-category`.");
        return Ok(LoopControl::Continue);
    }

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::right("Services"),
        TableColumn::left("Color"),
        TableColumn::left("Description").capped(40),
    ]);
    for entry in categories {
        table.push_row(vec![
            short_id(entry.category.id),
            entry.category.name.clone(),
            entry.service_count.to_string(),
            entry.category.color.clone(),
            entry.category.description.clone(),
        ]);
    }
    output::section("Categories");
    output::table(&table);
    Ok(LoopControl::Continue)
}

pub fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if !context.is_interactive() {
            return Err(CommandError::invalid(
                "Usage: add-category <name> [description] [color]",
            ));
        }
        forms::category_form(None)?
    } else {
        positional_draft(args)
    };
    let id = CategoryService::add(&mut context.business, draft)?;
    let category = CategoryService::get(&context.business, id)?;
    output::success(format!(
        "Category `{}` created ({}).",
        category.name,
        short_id(id)
    ));
    Ok(LoopControl::Continue)
}

pub fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: edit-category <category> [fields…]"))?;
    let id = context.resolve_category(reference)?;
    let current = CategoryService::get(&context.business, id)?.clone();

    let draft = if args.len() > 1 {
        positional_draft(&args[1..])
    } else if context.is_interactive() {
        forms::category_form(Some(&current))?
    } else {
        return Err(CommandError::invalid(
            "Usage: edit-category <category> <name> [description] [color]",
        ));
    };

    let renaming = current.name != draft.name;
    CategoryService::edit(&mut context.business, id, draft)?;
    if renaming {
        output::success(format!(
            "Category `{}` updated; member services now carry the new name.",
            reference
        ));
    } else {
        output::success(format!("Category `{reference}` updated."));
    }
    Ok(LoopControl::Continue)
}

pub fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args
        .first()
        .ok_or_else(|| CommandError::invalid("Usage: remove-category <category>"))?;
    let id = context.resolve_category(reference)?;
    let category = CategoryService::get(&context.business, id)?.clone();

    if !context.confirm(&format!("Delete category `{}`?", category.name))? {
        output::info("Nothing deleted.");
        return Ok(LoopControl::Continue);
    }

    let removed = CategoryService::remove(&mut context.business, id)?;
    output::success(format!("Category `{}` deleted.", removed.name));
    Ok(LoopControl::Continue)
}

fn positional_draft(args: &[&str]) -> CategoryDraft {
    CategoryDraft {
        name: args.first().copied().unwrap_or_default().to_string(),
        description: args.get(1).copied().unwrap_or_default().to_string(),
        color: args
            .get(2)
            .copied()
            .unwrap_or(forms::COLOR_OPTIONS[0])
            .to_string(),
    }
}
