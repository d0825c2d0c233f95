use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use sketchnote::Config;
use sketchnote::export::{ExportDependencies, ExportOutcome, Exporter, NoteColor, NoteMetadata};
use sketchnote::input::{SketchSession, script};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHNOTE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchnote")]
#[command(version = VERSION, about = "Freehand sketch engine with PNG download and note upload")]
struct Cli {
    /// Use this config file instead of ~/.config/sketchnote/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded input script and save the sketch as a PNG
    Download {
        /// JSON input script to replay
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// Directory to write the image to (overrides the configured one)
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Replay a recorded input script and upload the sketch as an image note
    Upload {
        /// JSON input script to replay
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// User the note is created for
        #[arg(long, value_name = "ID")]
        user: String,

        /// Note title
        #[arg(long, default_value = "")]
        title: String,

        /// Note background as R,G,B or R,G,B,A (channels 0-255, alpha 0-1)
        #[arg(long, value_name = "R,G,B[,A]")]
        background: Option<NoteColor>,

        /// Reminder time, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS"
        #[arg(long, value_name = "DATETIME", value_parser = parse_remind)]
        remind: Option<NaiveDateTime>,

        /// Note text content
        #[arg(long, default_value = "")]
        content: String,
    },
}

fn parse_remind(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| format!("expected \"YYYY-MM-DD HH:MM[:SS]\", got '{value}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let outcome = runtime.block_on(run(cli.command, config))?;

    match outcome {
        ExportOutcome::Downloaded(path) => {
            println!("Saved {}", path.display());
            Ok(())
        }
        ExportOutcome::Uploaded => {
            println!("Note uploaded");
            Ok(())
        }
        ExportOutcome::Failed { stage, message } => {
            Err(anyhow::anyhow!("Export failed during {stage}: {message}"))
        }
    }
}

async fn run(command: Command, config: Config) -> Result<ExportOutcome> {
    match command {
        Command::Download { script, output } => {
            let session = replay_script(&config, &script)?;
            let mut download = config.download_config();
            if let Some(directory) = output {
                download.directory = directory;
            }

            let exporter = Exporter::new(ExportDependencies::local(), download);
            Ok(exporter.download(&session).await)
        }
        Command::Upload {
            script,
            user,
            title,
            background,
            remind,
            content,
        } => {
            let endpoint = config
                .upload_endpoint()
                .context("Invalid [upload] configuration")?;
            let dependencies =
                ExportDependencies::new(endpoint).context("Failed to set up exporter")?;

            let session = replay_script(&config, &script)?;
            let metadata = NoteMetadata {
                title,
                background: background.unwrap_or_default(),
                remind_at: remind,
                content,
            };

            let exporter = Exporter::new(dependencies, config.download_config());
            Ok(exporter.upload(&session, &metadata, &user).await)
        }
    }
}

fn replay_script(config: &Config, path: &Path) -> Result<SketchSession> {
    let steps = script::load(path)
        .with_context(|| format!("Failed to load script {}", path.display()))?;

    let mut session = config.new_session();
    script::replay(&mut session, &steps)
        .with_context(|| format!("Failed to replay script {}", path.display()))?;

    log::info!(
        "Replayed {} steps into {} strokes",
        steps.len(),
        session.sketch().len()
    );
    Ok(session)
}
