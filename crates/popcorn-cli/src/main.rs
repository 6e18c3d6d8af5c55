use clap::{ArgAction, Parser, Subcommand};
use commands::{config, info, search, watched};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "popcorn")]
#[command(about = "popcorn - search movies and keep a rated watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search movies by title
    #[command(long_about = "Search OMDb for titles matching the query. Queries shorter than 3 characters are rejected without contacting the API.")]
    Search {
        /// Title fragment to search for
        query: String,
    },
    /// Show full details for one movie
    #[command(long_about = "Look up a single title by IMDb id and print its details, including your own rating if you have watched it.")]
    Info {
        /// IMDb id, e.g. tt0111161
        imdb_id: String,
    },
    /// Manage your rated watched list
    Watched {
        #[command(subcommand)]
        cmd: WatchedCommands,
    },
    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum WatchedCommands {
    /// List all watched movies
    List,
    /// Fetch a movie's details and add it with your rating
    Add {
        /// IMDb id, e.g. tt0111161
        imdb_id: String,

        /// Your rating, 1-10
        #[arg(short, long)]
        rating: u8,
    },
    /// Remove a movie from the watched list
    Remove {
        /// IMDb id, e.g. tt0111161
        imdb_id: String,
    },
    /// Show count and averages over the watched list
    Summary,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,
    /// Set the OMDb API key
    SetKey {
        /// The API key to store
        api_key: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Search { query } => search::run_search(&query, &output).await,
        Commands::Info { imdb_id } => info::run_info(&imdb_id, &output).await,
        Commands::Watched { cmd } => match cmd {
            WatchedCommands::List => watched::run_list(&output).await,
            WatchedCommands::Add { imdb_id, rating } => {
                watched::run_add(&imdb_id, rating, &output).await
            }
            WatchedCommands::Remove { imdb_id } => watched::run_remove(&imdb_id, &output).await,
            WatchedCommands::Summary => watched::run_summary(&output).await,
        },
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::run_show(&output),
            ConfigCommands::SetKey { api_key } => config::run_set_key(&api_key, &output),
        },
    }
}
