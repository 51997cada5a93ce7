use anyhow::Result;
use brand_tone_cli::app::App;
use brand_tone_cli::config::Config;
use brand_tone_cli::output::OutputHandler;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brand-tone")]
#[command(about = "Brand tone guide generator - tone, copy variants and vocabulary", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.brand-tone/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Run in verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a tone guide for a brand
    Generate {
        brand: String,

        /// Gemini API key; stored for later runs
        #[arg(long)]
        api_key: Option<String>,

        /// Use templates only, never call the API
        #[arg(long)]
        offline: bool,

        /// Save the result under the brand name
        #[arg(long)]
        save: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved brands
    Saved {
        #[arg(long)]
        json: bool,
    },
    /// Show a saved tone guide
    Show {
        brand: String,

        #[arg(long)]
        json: bool,
    },
    /// Delete a saved tone guide
    Delete { brand: String },
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store an API key
    Set { key: String },
    /// Remove the stored API key
    Clear,
}

fn init_logging(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let config = Config::load_or_default(cli.config.as_deref());
    let mut app = App::new(config)?;

    match cli.command {
        Command::Generate {
            brand,
            api_key,
            offline,
            save,
            json,
        } => {
            let mut output = OutputHandler::new().with_json(json);

            if let Some(key) = api_key.as_deref() {
                if let Err(e) = app.library.persist_credential(key) {
                    output.print_advisory(&format!("Could not store API key: {}", e))?;
                }
            }

            let credential = if offline {
                None
            } else {
                app.resolve_credential(api_key.as_deref())
            };

            let message = if credential.is_some() {
                "🤖 Generating with AI (Google Gemini)..."
            } else {
                "📋 No API key found - using template mode..."
            };
            let spinner = (!json).then(|| output.start_spinner(message));
            let result = app.generate(&brand, credential.as_deref()).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let generation = match result {
                Ok(generation) => generation,
                Err(e) => {
                    output.print_error(&e.to_string())?;
                    std::process::exit(2);
                }
            };
            output.print_generation(&generation)?;

            if save {
                match app.save_current() {
                    Ok(_) => {
                        if !json {
                            output.print_success(&format!("Saved \"{}\"", generation.record.brand))?;
                        }
                    }
                    Err(e) => output.print_error(&format!("Save failed: {}", e))?,
                }
            }
        }
        Command::Saved { json } => {
            let mut output = OutputHandler::new().with_json(json);
            output.print_saved_list(&app.library.saved_brands())?;
        }
        Command::Show { brand, json } => {
            let mut output = OutputHandler::new().with_json(json);
            match app.load_saved(&brand) {
                Some(record) => output.print_record(record)?,
                None => {
                    output.print_error(&format!("No saved tone guide for \"{}\"", brand))?;
                    std::process::exit(1);
                }
            }
        }
        Command::Delete { brand } => {
            let mut output = OutputHandler::new();
            match app.delete_saved(&brand) {
                Ok(true) => output.print_success(&format!("Deleted \"{}\"", brand))?,
                Ok(false) => output.print_system(&format!("No saved tone guide for \"{}\"", brand))?,
                Err(e) => output.print_error(&format!("Delete failed: {}", e))?,
            }
        }
        Command::Key { action } => {
            let mut output = OutputHandler::new();
            let (key, done) = match &action {
                KeyAction::Set { key } => (key.as_str(), "API key stored"),
                KeyAction::Clear => ("", "API key cleared"),
            };
            match app.library.persist_credential(key) {
                Ok(()) => output.print_success(done)?,
                Err(e) => output.print_error(&format!("Could not update API key: {}", e))?,
            }
        }
    }

    Ok(())
}
