mod commands;
mod output;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use teams_core::LEAGUE_SIZE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nfl-teams")]
#[command(version, about = "NFL team reference table CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read teams from a table file (JSON, YAML or TOML) instead of the embedded snapshot
    #[arg(long, global = true)]
    table: Option<String>,

    /// Season year (defaults to 2022, or the year in the table file name)
    #[arg(long, global = true)]
    season: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every team in authored order
    List {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Look up one team by an exact key
    Find {
        #[command(flatten)]
        key: FindKey,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate a team table file
    Check {
        /// Path to the table file (JSON, YAML or TOML)
        file: String,

        /// Enable strict validation mode (fail on warnings)
        #[arg(short, long)]
        strict: bool,

        /// Number of records the table must contain
        #[arg(short, long, default_value_t = LEAGUE_SIZE)]
        expected: usize,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Recognise a matchup in a channel title
    Parse {
        /// Channel title, e.g. "NFL 705: Las Vegas Raiders vs Minnesota Vikings @ 04:25 PM"
        line: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FindKey {
    /// Team identifier, e.g. 12
    #[arg(long)]
    id: Option<String>,

    /// Team abbreviation (case-sensitive), e.g. KC
    #[arg(long)]
    abbr: Option<String>,

    /// Full team name, e.g. "Kansas City Chiefs"
    #[arg(long)]
    name: Option<String>,
}

impl FindKey {
    fn into_lookup(self) -> Option<commands::find::Lookup> {
        use commands::find::Lookup;

        self.id
            .map(Lookup::Id)
            .or(self.abbr.map(Lookup::Abbr))
            .or(self.name.map(Lookup::Name))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let source = commands::TableSource {
        path: cli.table.as_deref(),
        season: cli.season,
    };

    // Execute command
    match cli.command {
        Commands::List { format } => commands::list::execute(&source, &format),

        Commands::Find { key, format } => {
            let lookup = key
                .into_lookup()
                .ok_or_else(|| anyhow!("One of --id, --abbr or --name is required"))?;
            commands::find::execute(&source, &lookup, &format)
        }

        Commands::Check {
            file,
            strict,
            expected,
            format,
        } => commands::check::execute(&file, cli.season, strict, expected, &format),

        Commands::Parse { line, format } => commands::parse::execute(&source, &line, &format),
    }
}
