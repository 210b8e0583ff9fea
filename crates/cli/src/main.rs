//! Quire CLI — the main entry point.
//!
//! Commands:
//! - `init`    — Write a default config file
//! - `serve`   — Start the admin HTTP gateway
//! - `render`  — Print a demo edit view to stdout
//! - `config`  — Show, validate, or locate the configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quire",
    about = "Quire — admin edit views for CMS content",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render a demo edit view to stdout
    Render {
        /// Which demo content type to render
        #[arg(short, long, value_enum, default_value_t = commands::render::Kind::Article)]
        kind: commands::render::Kind,

        /// Role of the viewer
        #[arg(short, long, default_value = "editor")]
        role: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Render { kind, role } => commands::render::run(kind, &role)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["quire", "render"]).unwrap();
        match cli.command {
            Commands::Render { kind, role } => {
                assert_eq!(kind, commands::render::Kind::Article);
                assert_eq!(role, "editor");
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn serve_port_override() {
        let cli = Cli::try_parse_from(["quire", "serve", "--port", "9000"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000) }));
    }
}
