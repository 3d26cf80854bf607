use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// replykit - replies on product reviews
#[derive(Parser)]
#[command(name = "replykit")]
#[command(about = "REST API for staff replies on product reviews", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print a bearer token for the given user
    Token {
        /// Numeric user ID (0 is anonymous)
        #[arg(long)]
        user_id: u64,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Capability to grant, repeatable (moderate_comments, manage_store)
        #[arg(long = "cap")]
        capabilities: Vec<String>,

        /// Token lifetime in seconds (overrides config file)
        #[arg(long)]
        lifetime: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = replykit::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    replykit::observability::init_observability("replykit", &config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => replykit::migrate::migrate(&config).await,
        Commands::Reset => replykit::migrate::reset(&config).await,
        Commands::Token {
            user_id,
            name,
            email,
            capabilities,
            lifetime,
        } => cli::token::issue(config, user_id, name, email, capabilities, lifetime),
    }
}
