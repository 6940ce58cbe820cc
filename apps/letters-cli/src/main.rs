//! Letters CLI binary
//!
//! Lists, resolves and renders letter templates from the command line.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use letter_engine::{DocumentFamily, FieldSet};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::RenderOptions;

#[derive(Parser, Debug)]
#[command(name = "letters")]
#[command(version, about = "Render dispute, remedy and trust letters from built-in templates")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available templates
    Templates {
        /// Only list one family: dispute, remedy or trust
        #[arg(short, long)]
        family: Option<DocumentFamily>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a template without substitution
    ///
    /// Exits non-zero when the key is unknown and the family default was printed.
    Show {
        family: DocumentFamily,
        key: String,
    },
    /// Render a letter
    Render {
        #[arg(short, long, default_value = "dispute")]
        family: DocumentFamily,

        /// Category key; defaults to --dispute-type
        #[arg(short, long)]
        key: Option<String>,

        #[arg(long)]
        creditor_name: Option<String>,

        #[arg(long)]
        account_number: Option<String>,

        #[arg(long)]
        reason: Option<String>,

        #[arg(long)]
        dispute_type: Option<String>,

        /// Date for date placeholders (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Write the letter to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the letter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Templates { family, json } => {
            println!("{}", commands::templates(family, json)?);
        }
        Command::Show { family, key } => {
            let (text, matched) = commands::show(family, &key);
            println!("{}", text);
            if !matched {
                anyhow::bail!("No {} template for key {:?}; printed the family default", family, key);
            }
        }
        Command::Render {
            family,
            key,
            creditor_name,
            account_number,
            reason,
            dispute_type,
            date,
            output,
        } => {
            let options = RenderOptions {
                family,
                key,
                fields: FieldSet {
                    creditor_name,
                    account_number,
                    reason,
                    dispute_type,
                },
                date: date.unwrap_or_else(|| Local::now().date_naive()),
            };

            let doc = commands::render(&options);
            if !doc.is_complete() {
                tracing::warn!(
                    "Letter still has placeholders to complete: {}",
                    doc.unresolved.join(", ")
                );
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, &doc.text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => print!("{}", doc.text),
            }
        }
    }

    Ok(())
}
