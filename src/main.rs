use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use sealnote::cli::{
    handle_config_command, handle_inspect_command, handle_open_command, handle_seal_command,
    log_level, ConfigCommands, InspectArgs, LogFormat, OpenArgs, SealArgs,
};
use sealnote::config::{paths::SealPaths, settings::Settings};
use sealnote::SealError;

#[derive(Parser)]
#[command(
    name = "sealnote",
    version,
    about = "Seal short messages with a password",
    long_about = "sealnote encrypts a message with a key derived from your password \
                  and prints a Base64 envelope you can paste anywhere. The same \
                  password opens it again. Envelopes can carry a timestamp so they \
                  stop opening after a time-to-live."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message into an envelope
    #[command(alias = "encrypt")]
    Seal(SealArgs),

    /// Decrypt an envelope back into its message
    #[command(alias = "decrypt")]
    Open(OpenArgs),

    /// Show an envelope's header without decrypting it
    Inspect(InspectArgs),

    /// View or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = SealPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Seal(args) => handle_seal_command(&settings, args)?,
        Commands::Open(args) => handle_open_command(&settings, args)?,
        Commands::Inspect(args) => handle_inspect_command(args)?,
        Commands::Config(cmd) => handle_config_command(&paths, &mut settings, cmd)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose), cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Codec failures get the generic notice; never the variant or internals.
            match err.downcast_ref::<SealError>() {
                Some(seal_err) => eprintln!("Error: {}", seal_err.user_message()),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
