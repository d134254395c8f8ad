use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell as CompShell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ehop::commands::connection::ConnectionOptions;
use ehop::commands::{devices, send};
use ehop::config::UserConfig;

#[derive(Parser)]
#[command(name = "ehop")]
#[command(version)]
#[command(about = "Authenticated requests against an ExtraHop appliance")]
#[command(long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Appliance hostname
    #[arg(long = "host", env = "EHOP_HOST")]
    host: Option<String>,
    /// API key
    #[arg(long = "key", env = "EHOP_API_KEY", hide_env_values = true)]
    key: Option<String>,
    /// JSON file mapping hostname to API key
    #[arg(long = "key-file", env = "EHOP_KEY_FILE")]
    key_file: Option<PathBuf>,
    /// API base path appended to the hostname
    #[arg(long = "base-path")]
    base_path: Option<String>,
    /// URL scheme
    #[arg(long = "scheme")]
    scheme: Option<String>,
    /// Verify the appliance's TLS certificate
    #[arg(long = "verify-tls")]
    verify_tls: bool,
    /// Request timeout (e.g. "30s", "500ms"); none by default
    #[arg(long = "timeout")]
    timeout: Option<String>,
}

impl From<ConnectionArgs> for ConnectionOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            host: args.host,
            key: args.key,
            key_file: args.key_file,
            base_path: args.base_path,
            scheme: args.scheme,
            verify_tls: args.verify_tls,
            timeout: args.timeout,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single API request
    Send {
        /// HTTP method (GET, POST, etc.)
        method: String,
        /// Call path relative to the API base (e.g. "devices")
        call: String,
        /// Request body; "@file" reads it from a file
        #[arg(short = 'd', long = "data")]
        data: Option<String>,
        /// Print only the response body
        #[arg(long = "raw")]
        raw: bool,
        #[command(flatten)]
        connection: ConnectionArgs,
    },
    /// List devices known to the appliance
    Devices {
        /// Maximum number of devices to fetch
        #[arg(long = "limit")]
        limit: Option<usize>,
        #[command(flatten)]
        connection: ConnectionArgs,
    },
    /// Generate shell completions (internal)
    #[command(hide = true)]
    Completions {
        /// Shell: bash, zsh, fish
        shell: String,
    },
    /// Generate man page (internal)
    #[command(hide = true)]
    Man,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ehop={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Send {
            method,
            call,
            data,
            raw,
            connection,
        } => {
            let config = UserConfig::load();
            send::handle_send(
                send::SendOptions {
                    method,
                    call,
                    data,
                    raw,
                    connection: connection.into(),
                },
                &config,
            )
            .await?;
        }
        Commands::Devices { limit, connection } => {
            let config = UserConfig::load();
            devices::handle_devices(limit, connection.into(), &config).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            let sh = match shell.as_str() {
                "bash" => CompShell::Bash,
                "zsh" => CompShell::Zsh,
                "fish" => CompShell::Fish,
                "powershell" | "pwsh" => CompShell::PowerShell,
                "elvish" => CompShell::Elvish,
                other => {
                    eprintln!(
                        "Unsupported shell: {} (use bash|zsh|fish|powershell|elvish)",
                        other
                    );
                    std::process::exit(2);
                }
            };
            generate(sh, &mut cmd, name, &mut std::io::stdout());
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            man.render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_send_arguments() {
        let cli = Cli::try_parse_from([
            "ehop", "send", "POST", "records/search", "-d", "{}", "--host", "eh.example.com",
            "--key", "abc", "--timeout", "10s",
        ])
        .unwrap();

        match cli.command {
            Commands::Send { method, call, data, connection, .. } => {
                assert_eq!(method, "POST");
                assert_eq!(call, "records/search");
                assert_eq!(data.as_deref(), Some("{}"));
                assert_eq!(connection.host.as_deref(), Some("eh.example.com"));
                assert_eq!(connection.timeout.as_deref(), Some("10s"));
                assert!(!connection.verify_tls);
            }
            _ => panic!("Expected Send command"),
        }
    }
}
