/**
 * Yatube Server Entry Point
 *
 * Without arguments the binary serves the site. `group add` creates a
 * community from the command line, since groups have no web form.
 */

use clap::{Parser, Subcommand};

use yatube::backend::server::config::load_database;
use yatube::backend::server::create_app;
use yatube::backend::store::groups::create_group;
use yatube::shared::config::AppConfig;
use yatube::shared::forms::validate_slug;

#[derive(Parser, Debug)]
#[command(name = "yatube-server")]
#[command(about = "Yatube blogging server", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage groups
    #[command(subcommand)]
    Group(GroupCommand),
}

#[derive(Subcommand, Debug)]
enum GroupCommand {
    /// Create a group
    Add {
        /// URL name: lowercase letters, digits, `-` and `_`
        slug: String,
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;

    match args.command {
        Some(Command::Group(GroupCommand::Add {
            slug,
            title,
            description,
        })) => add_group(&config, &slug, &title, &description).await,
        None => serve(config).await,
    }
}

async fn add_group(
    config: &AppConfig,
    slug: &str,
    title: &str,
    description: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_slug(slug)?;

    let pool = load_database(config).await?;
    let group = create_group(&pool, title, slug, description).await?;
    tracing::info!(id = group.id, slug = %group.slug, "Group created");

    Ok(())
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = create_app(config).await?;

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
