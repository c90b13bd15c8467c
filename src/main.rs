//! Catalog CLI - serve and inspect the in-memory GraphQL catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use catalog::config::{self, CliOverrides, ServerSettings};
use catalog::ui::{self, Icons};
use catalog::{EntityKind, MemoryStore, QueryEngine};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "In-memory bookstore and countries dataset behind one GraphQL endpoint")]
#[command(long_about = r#"
Catalog serves authors, books, continents and countries through a single
GraphQL endpoint. All data lives in memory and resets on restart.

Example usage:
  catalog serve --port 8000
  catalog query '{ author(id: 1) { name books { name } } }'
  catalog show books
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server (default)
    Serve {
        /// Port to listen on (overrides PORT and the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Directory holding the static page client
        #[arg(long)]
        client_dir: Option<PathBuf>,

        /// Do not serve GraphiQL on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Execute a GraphQL document against a freshly seeded store
    Query {
        /// The query or mutation document
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Show a collection as a table
    Show {
        /// authors, books, continents or countries
        entity: String,
    },

    /// Show statistics about the dataset
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
        client_dir: None,
        no_graphiql: false,
    });

    match command {
        Commands::Serve { port, host, client_dir, no_graphiql } => {
            let file = config::load_config(cli.config.as_deref())?;
            let mut settings = ServerSettings::from_env(file.as_ref())?;
            settings.apply_overrides(CliOverrides { port, host, client_dir, no_graphiql });

            ui::header("Catalog GraphQL server");
            ui::status(Icons::GLOBE, "Address", &settings.address());
            ui::status(Icons::GEAR, "GraphiQL", if settings.graphiql { "enabled" } else { "disabled" });
            ui::status(Icons::BOOK, "Client", &settings.client_dir.display().to_string());
            if !settings.client_dir.exists() {
                ui::warn(&format!(
                    "Client directory {} does not exist; only /graphql will respond",
                    settings.client_dir.display()
                ));
            }

            catalog::server::start_server(settings, Arc::new(MemoryStore::seeded())).await?;
        }

        Commands::Schema => {
            let schema = catalog::build_schema(Arc::new(MemoryStore::seeded()));
            println!("{}", schema.sdl());
        }

        Commands::Query { document, variables } => {
            let variables = variables
                .map(|raw| serde_json::from_str::<serde_json::Value>(&raw))
                .transpose()
                .map_err(catalog::Error::from)?;

            let schema = catalog::build_schema(Arc::new(MemoryStore::seeded()));
            let response = catalog::schema::execute(&schema, &document, variables).await;
            let failed = response.is_err();

            println!("{}", serde_json::to_string_pretty(&response)?);
            if failed {
                ui::error("Query returned errors");
                std::process::exit(1);
            }
        }

        Commands::Show { entity } => {
            let kind: EntityKind = entity.parse()?;
            let tables = MemoryStore::seeded().snapshot();

            ui::section(&format!(" {} ", kind.plural()));
            println!("{}", ui::entity_table(kind, &tables));
        }

        Commands::Stats => {
            let store = MemoryStore::seeded();
            let stats = QueryEngine::new(&store).stats();

            println!("{} Catalog Statistics", Icons::STATS);
            println!("{}", ui::stats_table(&stats));
            if stats.dangling_books + stats.dangling_countries > 0 {
                ui::warn("Some records reference entities that do not exist");
            } else {
                ui::success("All references resolve");
            }
        }
    }

    Ok(())
}
