use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fasthealth::export::ExportKind;
use fasthealth::{AppError, AppState};
use fasthealth_shared::{Diet, MeatType};

mod cli;

/// fasthealth - weekly breakfast planning
#[derive(Parser)]
#[command(name = "fasthealth")]
#[command(about = "Weekly breakfast planner with an aggregated shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes in the catalog
    Recipes {
        /// vegetarian or non-vegetarian
        #[arg(long)]
        diet: Option<Diet>,

        /// chicken, beef, fish, pork or lamb
        #[arg(long)]
        meat: Option<MeatType>,

        /// Matches titles and ingredient lines
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Show a recipe with its ingredients and steps
    Recipe { id: String },
    /// Show or edit the weekly plan
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Print the shopping list for the planned week
    Shopping {
        #[arg(long)]
        json: bool,

        /// Mark an item as bought, given as section__name__unit
        #[arg(long = "check", value_name = "KEY")]
        checked: Vec<String>,
    },
    /// Write a dated text export
    Export {
        #[arg(value_enum)]
        target: ExportTarget,

        /// Directory the file is written to
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// Print a message for sharing the plan
    Share,
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Print the plan summary
    Show,
    /// Plan a recipe on a day, replacing what was there
    Set {
        day: String,
        recipe_id: String,

        #[arg(long, default_value_t = 1)]
        portions: u32,
    },
    /// Empty one day
    Clear { day: String },
    /// Empty every day
    ClearWeek,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportTarget {
    Shopping,
    Plan,
}

impl From<ExportTarget> for ExportKind {
    fn from(target: ExportTarget) -> Self {
        match target {
            ExportTarget::Shopping => ExportKind::ShoppingList,
            ExportTarget::Plan => ExportKind::WeeklyPlan,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fasthealth::Config::load(cli.config.clone())?;
    config.validate().map_err(AppError::InvalidConfig)?;

    fasthealth::observability::init_observability(
        "fasthealth",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let state = AppState::new(config)?;

    match cli.command {
        Commands::Recipes {
            diet,
            meat,
            search,
            json,
        } => cli::recipes::list(&state, diet, meat, search, json),
        Commands::Recipe { id } => cli::recipes::show(&state, &id),
        Commands::Plan { command } => match command {
            PlanCommands::Show => cli::plan::show(&state),
            PlanCommands::Set {
                day,
                recipe_id,
                portions,
            } => cli::plan::set(&state, &day, &recipe_id, portions),
            PlanCommands::Clear { day } => cli::plan::clear(&state, &day),
            PlanCommands::ClearWeek => cli::plan::clear_week(&state),
        },
        Commands::Shopping { json, checked } => cli::shopping::show(&state, json, &checked),
        Commands::Export { target, output } => {
            cli::shopping::export(&state, target.into(), &output)
        }
        Commands::Share => cli::plan::share(&state),
    }
}
