use anyhow::Result;
use clap::{Parser, Subcommand};
use mealcart::cli::{DishArg, Format, PlanInput};
use mealcart_shared::Category;

/// mealcart - Monthly grocery planning
#[derive(Parser)]
#[command(name = "mealcart")]
#[command(about = "Plan a month of meals and get the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dishes on the menu
    Catalog {
        /// Only this category
        #[arg(long)]
        category: Option<Category>,

        /// Also print each dish's ingredient lines
        #[arg(long)]
        ingredients: bool,
    },
    /// Sign in, pick dishes and print the monthly shopping list in one go
    Plan {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Number of family members
        #[arg(long)]
        family_size: String,

        /// Dish to pick as category:dish[=times per month], repeatable
        #[arg(long = "dish", required = true)]
        dishes: Vec<DishArg>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Step through the wizard interactively, one command per line on stdin
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealcart::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealcart::observability::init_observability(
        "mealcart",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog {
            category,
            ingredients,
        } => mealcart::cli::catalog(category, ingredients, &mut out),
        Commands::Plan {
            username,
            password,
            family_size,
            dishes,
            format,
        } => mealcart::cli::plan(
            &config.planner,
            PlanInput {
                username,
                password,
                family_size,
                dishes,
                format,
            },
            &mut out,
        ),
        Commands::Session => {
            mealcart::cli::session(&config.planner, std::io::stdin().lock(), &mut out)
        }
    }
}
