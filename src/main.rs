//! Command-line front end: classify save files, print limit tables and
//! convert single stored records.

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use pokemon_transfer::{
    detect_entity_format, is_backup, is_size_valid, limits, ConverterSettings, Entity,
    EntityConverter, EntityFormat, SaveProfile, SaveRecognizer, TransferError, TransferResult,
};

/// Pokemon Transfer - save recognition and record conversion
#[derive(Parser, Debug)]
#[command(name = "pokemon-transfer", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the save type of each file
    Classify {
        /// Save files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print a JSON report instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the limit table of a record format
    Limits {
        /// Record format, e.g. "PK7"
        #[arg(value_parser = parse_format)]
        format: EntityFormat,
    },

    /// Convert one stored record to another format
    Convert {
        /// Stored record file
        file: PathBuf,

        /// Source format; guessed from the record size when omitted
        #[arg(long, value_parser = parse_format)]
        from: Option<EntityFormat>,

        /// Destination format
        #[arg(long, value_parser = parse_format)]
        to: EntityFormat,

        /// Where to write the converted record
        #[arg(long)]
        out: Option<PathBuf>,

        /// Converter settings (RON)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Allow best-effort conversions outside the official routes
        #[arg(long, default_value_t = false)]
        allow_incompatible: bool,
    },
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    file: &'a Path,
    save_type: Option<String>,
    profile: Option<&'static SaveProfile>,
    wrapped: bool,
    backup: bool,
    size_valid: bool,
}

fn parse_format(value: &str) -> Result<EntityFormat, String> {
    EntityFormat::from_str(&value.to_ascii_uppercase()).map_err(|_| format!("unknown record format '{}'", value))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose > 0 {
        logger.filter_level(match cli.verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    logger.init();

    let outcome = match cli.command {
        Commands::Classify { files, json } => classify_files(&files, json),
        Commands::Limits { format } => print_limits(format),
        Commands::Convert {
            file,
            from,
            to,
            out,
            settings,
            allow_incompatible,
        } => convert_file(&file, from, to, out.as_deref(), settings.as_deref(), allow_incompatible),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file was recognized.
fn classify_files(files: &[PathBuf], json: bool) -> TransferResult<bool> {
    let recognizer = SaveRecognizer::new();
    let mut all_recognized = true;
    let mut reports = Vec::with_capacity(files.len());

    for file in files {
        let data = fs::read(file)?;
        debug!("Read {} bytes from {}", data.len(), file.display());
        let save = recognizer.recognize(&data);
        all_recognized &= save.is_some();

        let report = ClassifyReport {
            file,
            save_type: save.as_ref().map(|s| s.display_name()),
            profile: save.as_ref().map(|s| s.profile()),
            wrapped: save.as_ref().is_some_and(|s| s.metadata().has_wrapper()),
            backup: is_backup(file),
            size_valid: is_size_valid(data.len()),
        };
        if json {
            reports.push(report);
            continue;
        }

        match (&report.save_type, report.profile) {
            (Some(name), Some(profile)) => println!(
                "{}: {} ({}, Gen {}){}{}",
                file.display(),
                name,
                profile.label,
                profile.generation,
                if report.wrapped { " [wrapped]" } else { "" },
                if report.backup { " [backup]" } else { "" },
            ),
            _ => println!(
                "{}: unrecognized ({:#X} bytes{})",
                file.display(),
                data.len(),
                if report.size_valid { ", known size" } else { "" },
            ),
        }
    }

    if json {
        let text = serde_json::to_string_pretty(&reports).map_err(std::io::Error::other)?;
        println!("{}", text);
    }
    Ok(all_recognized)
}

fn print_limits(format: EntityFormat) -> TransferResult<bool> {
    let text = serde_json::to_string_pretty(limits(format)).map_err(std::io::Error::other)?;
    println!("{}", text);
    Ok(true)
}

fn convert_file(
    file: &Path,
    from: Option<EntityFormat>,
    to: EntityFormat,
    out: Option<&Path>,
    settings: Option<&Path>,
    allow_incompatible: bool,
) -> TransferResult<bool> {
    let data = fs::read(file)?;
    let Some(format) = from.or_else(|| detect_entity_format(&data)) else {
        eprintln!("{}: cannot tell the record format from {:#X} bytes; pass --from", file.display(), data.len());
        return Ok(false);
    };
    let entity = Entity::from_bytes(format, data)?;

    let settings = match settings {
        Some(path) => ConverterSettings::load(path)?,
        None => ConverterSettings::default(),
    };
    let mut converter = EntityConverter::from_settings(&settings);
    if allow_incompatible {
        converter.set_allow_incompatible(true);
    }

    let converted = match converter.convert_to_format(&entity, to) {
        Ok(converted) => converted,
        Err(e) => {
            eprintln!("{} -> {} failed ({:?}): {}", format, to, e.code(), e);
            return Ok(false);
        }
    };
    println!(
        "{} -> {}: {:?}, species {}",
        format,
        to,
        converted.result,
        converted.entity.species()
    );

    if let Some(path) = out {
        fs::write(path, converted.entity.data()).map_err(TransferError::from)?;
        println!("Wrote {:#X} bytes to {}", converted.entity.data().len(), path.display());
    }
    Ok(true)
}
