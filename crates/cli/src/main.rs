#![warn(clippy::pedantic)]

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use kettle_domain::{
    ExerciseRepository, ExerciseService, GenerationRequest, GenerationService, ScheduleService,
    Service, SessionRepository, TrackRepository, TrackService, Week,
};
use kettle_storage::{JsonFileStore, MemoryStore};

use crate::{
    logger::Repository,
    settings::{Settings, SettingsRepository},
};

mod logger;
mod render;
mod settings;

/// Generates periodized workout programs for the built-in training tracks.
#[derive(Parser, Debug)]
#[command(name = "kettle", version)]
struct Cli {
    /// Configuration file
    #[arg(long, env = "KETTLE_CONFIG", default_value = "kettle.toml", global = true)]
    config: PathBuf,
    /// Data file holding tracks, exercises and generated sessions
    #[arg(long, env = "KETTLE_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,
    /// Minimum level of log messages written to stderr
    #[arg(long, env = "KETTLE_LOG_LEVEL", global = true)]
    log_level: Option<String>,
    /// Seed for reproducible generation
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Work on an in-memory copy of the catalog instead of the data file
    #[arg(long, global = true)]
    dry_run: bool,
    /// Print a summary of warnings and errors after the command
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and store sessions for consecutive weeks of a track
    Generate {
        track: String,
        #[arg(long, default_value_t = 1)]
        start_week: u32,
        #[arg(long, default_value_t = 1)]
        weeks: u32,
    },
    /// Show the blocks one week of a track would get, without storing anything
    Preview {
        track: String,
        #[arg(long, default_value_t = 1)]
        week: u32,
    },
    /// Show the stored sessions of one week
    Week {
        track: String,
        #[arg(long, default_value_t = 1)]
        week: u32,
    },
    /// Show the stored sessions of one day
    Day {
        track: String,
        #[arg(long, default_value_t = 1)]
        week: u32,
        #[arg(long)]
        day: u8,
    },
    /// List the available tracks
    Tracks,
    /// Write a configuration file with the default settings
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file = settings::TomlFile::new(&cli.config);

    if let Command::InitConfig = cli.command {
        file.write_settings(&Settings::default())?;
        println!("wrote {}", file.path().display());
        return Ok(());
    }

    let settings = file.read_settings()?.with_overrides(
        cli.data_file.clone(),
        cli.log_level.clone(),
        cli.seed,
    );
    let memory_log = Arc::new(logger::MemoryLog::default());
    logger::init(memory_log.clone(), settings.level_filter()?)
        .context("failed to initialize logger")?;

    let result = if cli.dry_run {
        let service = Service::new(MemoryStore::new()?).with_seed(settings.seed);
        run(&service, &cli.command)
    } else {
        let store = JsonFileStore::open(&settings.data_file)
            .with_context(|| format!("failed to open {}", settings.data_file.display()))?;
        run(&Service::new(store).with_seed(settings.seed), &cli.command)
    };

    if cli.verbose {
        let entries = memory_log.read_entries()?;
        let (warnings, errors) = logger::count_problems(&entries);
        eprintln!("{warnings} warning(s), {errors} error(s)");
        for entry in entries.iter().rev().filter(|e| e.level <= log::Level::Warn) {
            eprintln!("  {}", logger::format_entry(entry));
        }
    }

    result
}

fn run<R>(service: &Service<R>, command: &Command) -> anyhow::Result<()>
where
    R: TrackRepository + ExerciseRepository + SessionRepository,
{
    match command {
        Command::Generate {
            track,
            start_week,
            weeks,
        } => {
            let result = service.generate(&GenerationRequest {
                track: track.clone(),
                start_week: *start_week,
                week_count: *weeks,
            })?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Preview { track, week } => {
            let planned = service.preview(track, Week::new(*week)?)?;
            println!("{}", serde_json::to_string_pretty(&planned)?);
        }
        Command::Week { track, week } => {
            let sessions = service.get_week(track, Week::new(*week)?)?;
            if sessions.is_empty() {
                println!("no sessions stored for {track} week {week}");
            } else {
                print!("{}", render::sessions(&sessions, &exercise_names(service)?));
            }
        }
        Command::Day { track, week, day } => {
            let sessions = service.get_day(track, Week::new(*week)?, *day)?;
            if sessions.is_empty() {
                println!("no sessions stored for {track} week {week} day {day}");
            } else {
                print!("{}", render::sessions(&sessions, &exercise_names(service)?));
            }
        }
        Command::Tracks => print!("{}", render::tracks(&service.get_tracks()?)),
        Command::InitConfig => {}
    }
    Ok(())
}

fn exercise_names<S: ExerciseService>(service: &S) -> anyhow::Result<render::ExerciseNames> {
    Ok(service
        .get_exercises()?
        .into_iter()
        .map(|e| (e.id, e.name.to_string()))
        .collect())
}
