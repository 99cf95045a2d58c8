//! StudyHere - find a great place to focus
//!
//! Command-line front end over the StudyHere core: list and search the
//! catalog, inspect a single space, or browse interactively with
//! session-local reservations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use studyhere_core::{Catalog, Session, SortKey, SpaceId, StudyHereConfig};

mod browse;
mod input;
mod render;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "studyhere",
    about = "Find a great place to focus. Filter by capacity, availability, and more.",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Load spaces from this catalog file instead of the configured one
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List study spaces matching the given filters
    List {
        /// Search query (searches name, building, noise)
        query: Option<String>,

        /// Minimum capacity (non-numeric values mean 0)
        #[clap(long, allow_hyphen_values = true)]
        min_capacity: Option<String>,

        /// Only show spaces that are open now (`--open-now=false` shows closed ones too)
        #[clap(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        open_now: Option<bool>,

        /// Sort order: default, name-asc, capacity-desc, capacity-asc
        #[clap(long)]
        sort: Option<String>,

        /// Mark these space ids as reserved (comma-separated)
        #[clap(long, value_delimiter = ',')]
        reserved: Vec<SpaceId>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show details for one study space
    Show {
        /// Space id
        id: SpaceId,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Browse interactively: filter, sort and reserve in one session
    Browse,
}

/// Initialize tracing from the --log-level flag
///
/// Logs go to stderr so stdout stays clean for tables and JSON.
/// RUST_LOG directives are layered on top of the chosen level.
fn initialize_tracing(log_level: &LogLevel) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if let Ok(env) = std::env::var("RUST_LOG") {
        for directive in env.split(',').filter(|d| !d.is_empty()) {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let loaded = StudyHereConfig::discover(cli.config.as_deref())?;
    debug!("Configuration source: {}", loaded.source);

    let mut config = loaded.config;
    if let Some(path) = cli.catalog {
        config.catalog = Some(path);
    }
    let catalog = config.load_catalog()?;

    match cli.command {
        Command::List {
            query,
            min_capacity,
            open_now,
            sort,
            reserved,
            json,
        } => {
            let mut session = config.start_session(catalog);
            let filters = ListFilters {
                query,
                min_capacity,
                open_now,
                sort,
                reserved,
            };
            filters.apply(&mut session);
            list_command(&session, json)
        }
        Command::Show { id, json } => show_command(&catalog, id, json),
        Command::Browse => browse_command(config.start_session(catalog)),
    }
}

/// Raw `list` flags, applied on top of the configured defaults
struct ListFilters {
    query: Option<String>,
    min_capacity: Option<String>,
    open_now: Option<bool>,
    sort: Option<String>,
    reserved: Vec<SpaceId>,
}

impl ListFilters {
    fn apply(self, session: &mut Session) {
        if let Some(query) = self.query {
            session.set_search_term(query);
        }
        if let Some(raw) = self.min_capacity {
            session.set_min_capacity(input::coerce_capacity(&raw));
        }
        if let Some(only_open) = self.open_now {
            session.set_only_open(only_open);
        }
        if let Some(raw) = self.sort {
            session.set_sort_key(SortKey::parse_lenient(&raw));
        }

        let mut reserved = self.reserved;
        reserved.sort_unstable();
        reserved.dedup();
        for id in reserved {
            session.toggle_reservation(id);
        }
    }
}

fn list_command(session: &Session, json_output: bool) -> Result<()> {
    let entries = session.view_entries();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", render::render_view(&entries));
    }

    Ok(())
}

fn show_command(catalog: &Catalog, id: SpaceId, json_output: bool) -> Result<()> {
    let space = catalog
        .get(id)
        .with_context(|| format!("Space {id} not found in catalog"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(space)?);
    } else {
        println!("{}", render::render_card(space, false));
    }

    Ok(())
}

fn browse_command(session: Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let session = browse::BrowseShell::new(session, stdin.lock(), stdout.lock()).run()?;
    debug!(
        "Browse session ended with {} reservation(s)",
        session.reservations().len()
    );
    Ok(())
}
