#![doc = include_str!("../../docs/cli_usage.md")]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use formloom::{
    BuilderApp, DirStore, Form, FormStore, RespondApp, SubmissionStore, UiOptions, export_csv,
};

#[derive(Debug, Parser)]
#[command(
    name = "formloom",
    version,
    about = "Build forms and collect responses in the terminal"
)]
struct Cli {
    /// Directory holding saved forms and responses
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        global = true,
        default_value = "formloom-data"
    )]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the form designer
    Build {
        /// Saved form to reopen; omit to start a new one
        #[arg(value_name = "FORM_ID")]
        form_id: Option<String>,

        /// Redraw interval in milliseconds
        #[arg(long = "tick-ms", value_name = "MS", default_value_t = 250)]
        tick_ms: u64,
    },

    /// Fill a saved form and record one response
    Respond {
        #[arg(value_name = "FORM_ID")]
        form_id: String,
    },

    /// List saved forms, most recently updated first
    List,

    /// Delete a form together with its responses
    Delete {
        #[arg(value_name = "FORM_ID")]
        form_id: String,

        /// Confirm the deletion
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Write a form's responses as CSV
    Export {
        #[arg(value_name = "FORM_ID")]
        form_id: String,

        /// Destination file; omit or pass "-" for stdout
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = DirStore::open(&cli.data_dir)
        .wrap_err_with(|| format!("failed to open data directory {}", cli.data_dir.display()))?;

    match cli.command {
        Command::Build { form_id, tick_ms } => run_build(store, form_id.as_deref(), tick_ms),
        Command::Respond { form_id } => run_respond(store, &form_id),
        Command::List => run_list(&store),
        Command::Delete { form_id, yes } => run_delete(&store, &form_id, yes),
        Command::Export { form_id, output } => run_export(&store, &form_id, output.as_deref()),
    }
}

fn load_form(store: &DirStore, form_id: &str) -> Result<Form> {
    store
        .fetch(form_id)?
        .ok_or_else(|| eyre!("no form with id '{form_id}' (see `formloom list`)"))
}

fn run_build(store: DirStore, form_id: Option<&str>, tick_ms: u64) -> Result<()> {
    let form = match form_id {
        Some(id) => load_form(&store, id)?,
        None => Form::new(),
    };
    let options = UiOptions::default().with_tick_rate(Duration::from_millis(tick_ms));
    let app = BuilderApp::with_form(form, Arc::new(store), options);
    let form = app.run().map_err(Report::msg)?;
    match form.id {
        Some(id) => println!("Saved as {id}"),
        None => println!("Nothing was saved"),
    }
    Ok(())
}

fn run_respond(store: DirStore, form_id: &str) -> Result<()> {
    let form = load_form(&store, form_id)?;
    let app = RespondApp::new(form, Arc::new(store), UiOptions::default()).map_err(Report::msg)?;
    if app.run().map_err(Report::msg)? {
        println!("Response recorded");
    } else {
        println!("No response recorded");
    }
    Ok(())
}

fn run_list(store: &DirStore) -> Result<()> {
    let summaries = store.list()?;
    if summaries.is_empty() {
        println!("No forms yet. Run `formloom build` to create one.");
        return Ok(());
    }
    for summary in summaries {
        let responses = store.responses(&summary.id)?.len();
        println!(
            "{}  {:<28}  {:>2} field(s)  {:>3} response(s)  updated {}",
            summary.id,
            clip(&summary.title, 28),
            summary.field_count,
            responses,
            summary.updated_at.format("%Y-%m-%d %H:%M"),
        );
    }
    Ok(())
}

fn run_delete(store: &DirStore, form_id: &str, yes: bool) -> Result<()> {
    let form = load_form(store, form_id)?;
    let responses = store.responses(form_id)?.len();
    if !yes {
        return Err(eyre!(
            "this removes '{}' and its {responses} response(s); pass --yes to confirm",
            form.title
        ));
    }
    store.delete(form_id)?;
    println!("Deleted {form_id}");
    Ok(())
}

fn run_export(store: &DirStore, form_id: &str, output: Option<&Path>) -> Result<()> {
    let form = load_form(store, form_id)?;
    let records = store.responses(form_id)?;
    if records.is_empty() {
        return Err(eyre!("form '{}' has no responses yet", form.title));
    }
    let csv = export_csv(&form, &records);
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, &csv)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} response(s) to {}", records.len(), path.display());
        }
        _ => println!("{csv}"),
    }
    Ok(())
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
