use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use grocerylist::config::Config;
use grocerylist::grocery::{
    AddError, Category, GroceryItem, GroceryPersistence, ItemId, ItemStore,
};
use grocerylist::logging::init_tracing;
use grocerylist::settings::FileSettings;
use grocerylist::ui::list::{limit_notice, render_rows, ListIntent, ListReducer, ListScreenState};
use grocerylist::ui::mvi::Reducer;

#[derive(Debug, Parser)]
#[command(name = "grocerylist", version, about = "Household grocery list")]
struct Cli {
    /// Settings file holding the list (overrides the config file).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add an item.
    Add {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[arg(short, long, default_value = "Other", value_parser = parse_category)]
        category: Category,
    },
    /// Check or uncheck an item by id.
    Toggle { id: ItemId },
    /// Delete items by id.
    Delete {
        #[arg(required = true)]
        ids: Vec<ItemId>,
    },
    /// Delete items by their position in `list`.
    Remove {
        #[arg(required = true)]
        positions: Vec<usize>,
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Show the list in display order.
    List {
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
        /// Print item ids.
        #[arg(long)]
        ids: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        let labels: Vec<_> = Category::all().iter().map(|c| c.label()).collect();
        format!("unknown category '{}', expected one of: {}", s, labels.join(", "))
    })
}

/// Screen state for a one-shot command: a category narrows the list,
/// otherwise everything is shown.
fn screen_for(category: Option<Category>) -> ListScreenState {
    let intent = match category {
        Some(c) => ListIntent::SelectCategory(c),
        None => ListIntent::ToggleShowAll,
    };
    ListReducer::reduce(ListScreenState::default(), intent)
}

/// The single message reported for an add: a confirmation, the limit
/// notice when the screen raised it, or the error otherwise.
fn add_outcome(
    screen: &ListScreenState,
    result: &Result<GroceryItem, AddError>,
) -> Result<String, String> {
    match result {
        Ok(item) => Ok(format!(
            "Added {} ({}) {}",
            item.name(),
            item.category(),
            item.id()
        )),
        Err(_) if screen.limit_notice => Err(limit_notice()),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings_path = match cli.settings {
        Some(path) => path,
        None => Config::load()
            .context("failed to load grocerylist config")?
            .settings_path(),
    };
    tracing::info!(path = %settings_path.display(), "opening grocery list");

    let mut store = ItemStore::open(GroceryPersistence::new(FileSettings::new(settings_path)));

    match cli.command {
        Command::Add { name, category } => {
            let draft = name.join(" ");
            let result = store.add(&draft, category);
            let screen = ListReducer::reduce_all(
                ListScreenState::default(),
                std::iter::once(ListIntent::EditDraft(draft))
                    .chain(ListIntent::from_add_result(&result)),
            );
            match add_outcome(&screen, &result) {
                Ok(line) => println!("{}", line),
                Err(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }
        Command::Toggle { id } => {
            store.toggle(id)?;
            if let Some(item) = store.get(id) {
                let state = if item.is_checked() { "checked" } else { "unchecked" };
                println!("{} is now {}", item.name(), state);
            }
        }
        Command::Delete { ids } => {
            let removed = store.delete(&ids);
            println!("Removed {} item(s)", removed);
        }
        Command::Remove { positions, category } => {
            let removed = store.delete_at(screen_for(category).filter(), &positions);
            println!("Removed {} item(s)", removed);
        }
        Command::List { category, ids } => {
            let screen = screen_for(category);
            let view = store.view(screen.filter());
            if view.is_empty() {
                println!("No items.");
            }
            for (row, item) in render_rows(&view).into_iter().zip(&view) {
                if ids {
                    println!("{}  {}", row, item.id());
                } else {
                    println!("{}", row);
                }
            }
            println!("{}/{} items", store.len(), store.capacity());
        }
    }

    Ok(())
}
