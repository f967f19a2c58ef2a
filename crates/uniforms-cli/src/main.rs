//! uniforms CLI
//!
//! Command-line tool for inspecting and populating form declarations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use uniforms_cli::{load_form, render_fields, render_form, render_rules, render_values};
use uniforms_core::FormOptions;

/// Inspect and populate JSON form declarations.
#[derive(Parser)]
#[command(name = "uniforms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write every attribute to the output, not only id, method and action.
    #[arg(long, env = "UNIFORMS_PRESERVE_ATTRIBUTES")]
    preserve_attributes: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form declaration.
    Show {
        /// Form declaration file.
        form: PathBuf,

        /// JSON object of values to bind before printing.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Indent the output.
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print each field's value.
    Values {
        /// Form declaration file.
        form: PathBuf,

        /// JSON object of values to bind before printing.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print each field's declared rules.
    Rules {
        /// Form declaration file.
        form: PathBuf,
    },

    /// List fields with their types.
    Fields {
        /// Form declaration file.
        form: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = FormOptions::new().preserve_attributes(cli.preserve_attributes);
    debug!("Options: {:?}", options);

    let output = match cli.command {
        Commands::Show {
            form,
            input,
            pretty,
        } => {
            let form = load_form(&form, input.as_deref(), options)?;
            render_form(&form, pretty)?
        }

        Commands::Values { form, input } => {
            let form = load_form(&form, input.as_deref(), options)?;
            render_values(&form)?
        }

        Commands::Rules { form } => {
            let form = load_form(&form, None, options)?;
            render_rules(&form)?
        }

        Commands::Fields { form } => {
            let form = load_form(&form, None, options)?;
            render_fields(&form)
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
