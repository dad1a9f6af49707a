use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio - personal site with a contact form that emails the owner
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio site and contact mail endpoint", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit the contact form of a running server
    Contact {
        /// Base URL of the site
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config)?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            portfolio::cli::server::serve(config, host, port).await
        }
        Commands::Contact {
            url,
            name,
            email,
            subject,
            message,
        } => {
            portfolio::cli::contact::submit(
                &url,
                portfolio::cli::contact::ContactArgs {
                    name,
                    email,
                    subject,
                    message,
                },
            )
            .await
        }
    }
}
