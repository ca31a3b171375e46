mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dinerec-cli")]
#[command(about = "Restaurant recommendations from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommend restaurants for a city, cuisine, and price preference
    Recommend {
        #[arg(long)]
        city: String,
        #[arg(long)]
        cuisine: String,
        /// A number ("700"), a range ("500-1000"), or a tier
        /// (budget/moderate/premium)
        #[arg(long)]
        price: String,
        /// How many results to print
        #[arg(long)]
        top: Option<usize>,
    },
    /// List the cities present in the dataset
    Cities,
    /// List the cuisines present in the dataset
    Cuisines,
    /// Show cost-for-two statistics over the dataset
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = dinerec_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Recommend {
            city,
            cuisine,
            price,
            top,
        } => commands::run_recommend(&config, &city, &cuisine, &price, top).await,
        Commands::Cities => commands::run_cities(&config),
        Commands::Cuisines => commands::run_cuisines(&config),
        Commands::Stats => commands::run_stats(&config),
    }
}
