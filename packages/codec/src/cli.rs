//! Command-line interface for the codec.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SourceFormat;
use crate::container::write_archive;
use crate::error::{KmlError, Result};
use crate::parser::KmlParser;
use crate::summary::DocumentSummary;
use crate::writer::serialize;

/// KML Codec - Read, inspect and write KML/KMZ documents.
#[derive(Parser)]
#[command(name = "kml-codec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document and print a summary.
    Inspect {
        /// Input file (.kml or .kmz)
        file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Skip unknown elements instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Parse a document and write it back out (.kml or .kmz).
    Convert {
        /// Input file (.kml or .kmz)
        input: PathBuf,

        /// Output file; a .kmz extension writes an archive
        output: PathBuf,

        /// Skip unknown elements instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Verify that documents survive a parse/serialize/parse cycle.
    Check {
        /// Input files (.kml or .kmz)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip unknown elements instead of failing
        #[arg(long)]
        lenient: bool,
    },
}

/// Output encoding of the `inspect` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            format,
            lenient,
        } => inspect_command(&file, format, parser(lenient)),
        Commands::Convert {
            input,
            output,
            lenient,
        } => convert_command(&input, &output, parser(lenient)),
        Commands::Check { files, lenient } => check_command(&files, parser(lenient)),
    }
}

fn parser(lenient: bool) -> KmlParser {
    KmlParser::new().strict(!lenient)
}

/// Execute the inspect command.
fn inspect_command(file: &Path, format: ReportFormat, parser: KmlParser) -> Result<()> {
    let kml = parser.parse_file(file)?;
    let summary = DocumentSummary::from_kml(&kml);

    match format {
        ReportFormat::Text => {
            println!("{} {}", style("Inspecting").bold(), style(file.display()).cyan());
            println!();
            print!("{}", summary.to_text());
        }
        ReportFormat::Json => println!("{}", summary.to_json()?),
        ReportFormat::Yaml => print!("{}", summary.to_yaml()?),
    }

    Ok(())
}

/// Execute the convert command.
fn convert_command(input: &Path, output: &Path, parser: KmlParser) -> Result<()> {
    // Validate the target before doing any work
    let target = SourceFormat::from_path(output)?;

    let kml = parser.parse_file(input)?;
    let bytes = serialize(&kml)?;

    if target.is_archive() {
        let file = File::create(output)?;
        write_archive(&bytes, BufWriter::new(file))?;
    } else {
        fs::write(output, &bytes)?;
    }

    println!(
        "{} {} -> {}",
        style("Converted").green().bold(),
        input.display(),
        output.display()
    );
    Ok(())
}

/// Execute the check command.
fn check_command(files: &[PathBuf], parser: KmlParser) -> Result<()> {
    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green/white} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut failures = Vec::new();
    for file in files {
        pb.set_message(file.display().to_string());
        if let Err(reason) = round_trip(file, parser) {
            failures.push((file, reason));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    for file in files {
        match failures.iter().find(|(failed, _)| *failed == file) {
            Some((_, reason)) => println!(
                "{} {}: {}",
                style("FAIL").red().bold(),
                file.display(),
                reason
            ),
            None => println!("{} {}", style("ok").green(), file.display()),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(KmlError::CheckFailed {
            failed: failures.len(),
            total: files.len(),
        })
    }
}

/// Parse, serialize and re-parse one file; describe the first difference.
fn round_trip(file: &Path, parser: KmlParser) -> std::result::Result<(), String> {
    let first = parser.parse_file(file).map_err(|e| e.to_string())?;
    let bytes = serialize(&first).map_err(|e| e.to_string())?;
    let second = parser
        .parse(&bytes)
        .map_err(|e| format!("re-parse failed: {e}"))?;

    if first == second {
        Ok(())
    } else {
        Err("document changed after serialization".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["kml-codec", "inspect", "doc.kml"]);

        let Commands::Inspect {
            file,
            format,
            lenient,
        } = cli.command
        else {
            panic!("expected inspect");
        };
        assert_eq!(file, PathBuf::from("doc.kml"));
        assert_eq!(format, ReportFormat::Text);
        assert!(!lenient);
    }

    #[test]
    fn test_cli_parse_inspect_json_lenient() {
        let cli = Cli::parse_from(["kml-codec", "inspect", "doc.kmz", "-f", "json", "--lenient"]);

        let Commands::Inspect {
            format, lenient, ..
        } = cli.command
        else {
            panic!("expected inspect");
        };
        assert_eq!(format, ReportFormat::Json);
        assert!(lenient);
    }

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["kml-codec", "convert", "in.kml", "out.kmz"]);

        let Commands::Convert { input, output, .. } = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(input, PathBuf::from("in.kml"));
        assert_eq!(output, PathBuf::from("out.kmz"));
    }

    #[test]
    fn test_cli_parse_check_requires_files() {
        assert!(Cli::try_parse_from(["kml-codec", "check"]).is_err());

        let cli = Cli::parse_from(["kml-codec", "check", "a.kml", "b.kmz"]);
        let Commands::Check { files, lenient } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(files.len(), 2);
        assert!(!lenient);
    }

    #[test]
    fn test_parser_mode_from_flag() {
        assert!(parser(false).is_strict());
        assert!(!parser(true).is_strict());
    }

    #[test]
    fn test_round_trip_reports_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.kml");
        fs::write(&path, "<kml><Bogus/></kml>").unwrap();

        let reason = round_trip(&path, KmlParser::new()).unwrap_err();
        assert!(reason.contains("Bogus"));
        assert!(round_trip(&path, KmlParser::lenient()).is_ok());
    }
}
