//! k8s-release-dev CLI - Release resolution and image publishing helper

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use k8s_release_dev::config::Settings;
use k8s_release_dev::release::ReleaseChannel;
use k8s_release_dev::utils::display_error_and_exit;
use k8s_release_dev::{log_error, log_info};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "k8s-release-dev")]
#[command(author, version, about = "Development CLI tool for Kubernetes release resolution and image publishing", long_about = None)]
struct Cli {
    /// Verbose output (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG, -vvv: TRACE
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a release channel to a Kubernetes version
    Release {
        /// Release channel (stable, stable/amd64, stable/arm64, head/amd64, head/arm64)
        channel: String,
    },

    /// Fetch the SHA-256 checksum for a release artifact
    Checksum {
        /// Artifact download URL
        url: String,
    },

    /// Publish an image with a multi-architecture manifest
    Publish {
        /// Release version to publish
        release: String,

        /// Registry repository to push to
        #[arg(short, long)]
        registry: Option<String>,

        /// Platforms for the manifest (comma-separated)
        #[arg(short, long)]
        platforms: Option<String>,

        /// Path to the import-and-push script
        #[arg(short, long)]
        script: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print an example configuration file
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity level
    let log_level = match cli.verbose {
        0 => "warn",  // Default: only warnings and errors
        1 => "info",  // -v: info level
        2 => "debug", // -vv: debug level
        _ => "trace", // -vvv: trace level
    };
    k8s_release_dev::utils::logger::init(log_level);

    match cli.command {
        Commands::Release { channel } => handle_release_command(&channel),
        Commands::Checksum { url } => handle_checksum_command(&url),
        Commands::Publish {
            release,
            registry,
            platforms,
            script,
        } => handle_publish_command(release, registry, platforms, script),
        Commands::Config { command } => handle_config_command(command),
        Commands::Completion { shell } => handle_completion_command(shell),
        Commands::Version => handle_version_command(),
    }
}

fn handle_release_command(channel: &str) -> Result<()> {
    // An unknown channel is a misconfiguration, not a transient failure:
    // bail out before any network request.
    let channel: ReleaseChannel = match channel.parse() {
        Ok(channel) => channel,
        Err(err) => display_error_and_exit(err),
    };

    match k8s_release_dev::release::resolve(channel)? {
        Some(version) => {
            // Emit the channel file exactly as served, trailing newline and all
            print!("{}", version);
            io::stdout().flush()?;
            Ok(())
        }
        None => {
            // Already logged by the resolver; nothing to print
            std::process::exit(1);
        }
    }
}

fn handle_checksum_command(url: &str) -> Result<()> {
    let checksum = k8s_release_dev::checksum::fetch_checksum(url)?;
    println!("{}", checksum);
    Ok(())
}

fn handle_publish_command(
    release: String,
    registry: Option<String>,
    platforms: Option<String>,
    script: Option<String>,
) -> Result<()> {
    let settings = Settings::load();

    let registry = match registry.or(settings.publish.registry) {
        Some(registry) => registry,
        None => {
            log_error!("No registry given; pass --registry or set publish.registry in the config file");
            std::process::exit(1);
        }
    };
    let platforms = platforms.unwrap_or(settings.publish.platforms);
    let script = PathBuf::from(script.unwrap_or(settings.publish.script));

    let status = k8s_release_dev::publish::publish(&script, &release, &platforms, &registry)?;

    if status.success() {
        log_info!("Publish completed successfully");
        Ok(())
    } else {
        // Surface the script's exit code verbatim
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Example => {
            print!("{}", Settings::example_config());
            Ok(())
        }
    }
}

fn handle_completion_command(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "k8s-release-dev", &mut io::stdout());
    Ok(())
}

fn handle_version_command() -> Result<()> {
    println!("k8s-release-dev {}", env!("CARGO_PKG_VERSION"));
    println!("Development CLI tool for Kubernetes release resolution and image publishing");
    Ok(())
}
