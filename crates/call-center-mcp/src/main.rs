//! Call Center MCP Server: entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use call_center_mcp::config::{open_desk, resolve_data_path, resolve_max_line_bytes};
use call_center_mcp::protocol::ProtocolHandler;
use call_center_mcp::registry::build_registry;
use call_center_mcp::transport::StdioTransport;
use call_center_mcp::types::InitializeResult;

#[derive(Parser)]
#[command(
    name = "call-center-mcp",
    about = "MCP server exposing call-center tools and resources over stdio",
    version
)]
struct Cli {
    /// Path to a JSON desk fixture.
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve {
        /// Maximum size of one JSON-RPC line in bytes.
        #[arg(long)]
        max_line_bytes: Option<usize>,
    },

    /// Load the desk fixture and report what it contains.
    Validate,

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   call-center-mcp completions bash > ~/.local/share/bash-completion/completions/call-center-mcp
    ///   call-center-mcp completions zsh > ~/.zfunc/_call-center-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        max_line_bytes: None,
    }) {
        Commands::Serve { max_line_bytes } => {
            let desk = Arc::new(open_desk(cli.data.as_deref())?);
            let registry = Arc::new(build_registry(desk)?);
            let max_line_bytes = resolve_max_line_bytes(max_line_bytes);

            tracing::info!("Call Center MCP server v{}", env!("CARGO_PKG_VERSION"));
            let handler = ProtocolHandler::new(registry);
            let mut transport = StdioTransport::new(handler).with_max_frame_bytes(max_line_bytes);
            transport.run().await?;
        }

        Commands::Validate => match open_desk(cli.data.as_deref()) {
            Ok(desk) => {
                let snapshot = desk.snapshot();
                match resolve_data_path(cli.data.as_deref()) {
                    Some(path) => println!("Valid desk fixture: {}", path.display()),
                    None => println!("Using built-in desk data"),
                }
                println!("  Agents: {}", snapshot.agents.len());
                println!("  AI agents: {}", snapshot.ai_agents.len());
                println!("  Interactions: {}", snapshot.interactions.len());
                println!("  Calls today: {}", snapshot.stats.total_calls_today);
            }
            Err(e) => {
                eprintln!("Invalid desk fixture: {e}");
                std::process::exit(1);
            }
        },

        Commands::Info => {
            let registry = build_registry(Arc::new(open_desk(cli.data.as_deref())?))?;
            let init = InitializeResult::default_result();
            let tools = registry.list_tools();
            let resources = registry.list_resources();
            let info = serde_json::json!({
                "server": init.server_info,
                "protocol_version": init.protocol_version,
                "capabilities": init.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
                "resources": resources.iter().map(|r| &r.uri).collect::<Vec<_>>(),
                "resource_count": resources.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "call-center-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
