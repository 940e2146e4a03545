//! CLI interface for the ATS evaluator

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intelligent-ats")]
#[command(about = "Improve your resume for Applicant Tracking Systems")]
#[command(long_about = "Score a PDF resume against up to three job descriptions with a hosted LLM, list missing keywords, and export the results as a PDF report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a resume against job descriptions
    Evaluate {
        /// Path to the resume (PDF)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Job description file (TXT, MD); repeat up to three times
        #[arg(short, long = "job", value_name = "FILE")]
        jobs: Vec<PathBuf>,

        /// Where to write the PDF report (defaults to the configured report file)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip writing the PDF report
        #[arg(long)]
        no_export: bool,

        /// Output format: console, json
        #[arg(short, long, default_value = "console", value_parser = parse_output_format)]
        format: OutputFormat,

        /// Feedback about the results
        #[arg(long)]
        feedback: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
