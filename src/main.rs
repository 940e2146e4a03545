//! Intelligent ATS: score a resume against job descriptions with a hosted LLM

use clap::Parser;
use colored::Colorize;
use intelligent_ats::cli::{Cli, Commands, ConfigAction};
use intelligent_ats::config::{Config, OutputFormat};
use intelligent_ats::error::Result;
use intelligent_ats::input::InputManager;
use intelligent_ats::llm::GeminiClient;
use intelligent_ats::output::formatter::formatter_for;
use intelligent_ats::output::pdf::save_report;
use intelligent_ats::processing::{Evaluator, Submission};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        eprintln!("An error occurred: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Evaluate {
            resume,
            jobs,
            save,
            no_export,
            format,
            feedback,
        } => {
            // Fail on a missing credential before touching any input
            let api_key = config.api_key()?;
            let client = GeminiClient::new(config.completion.clone(), api_key);
            debug!("Using model {}", client.model());

            let resume = match resume {
                Some(path) => Some(InputManager::load_resume(&path).await?),
                None => None,
            };
            let job_descriptions = InputManager::load_job_descriptions(&jobs).await?;

            let evaluator = Evaluator::new(client);
            let results = evaluator
                .evaluate(&Submission::new(resume, job_descriptions))
                .await?;

            if results.is_empty() {
                println!("No job descriptions provided");
                return Ok(());
            }

            let use_colors = config.output.color_output && format == OutputFormat::Console;
            let formatter = formatter_for(format, use_colors);
            println!("{}", formatter.format_results(&results)?);

            if !no_export {
                let path: PathBuf = save.unwrap_or_else(|| config.output.report_file.clone());
                save_report(&results, &path)?;
                if format == OutputFormat::Console {
                    println!("Results saved as PDF: {}", path.display());
                }
            }

            if let Some(text) = feedback.filter(|text| !text.trim().is_empty()) {
                debug!("Feedback received ({} chars), not stored", text.len());
                println!("Thank you for your feedback!");
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let key_status = if config.api_key().is_ok() { "set" } else { "not set" };

                println!("{}\n", "Current Configuration".bold());
                println!(
                    "Config File: {}",
                    config_path
                        .map(Path::to_path_buf)
                        .unwrap_or_else(Config::config_path)
                        .display()
                );
                println!("Model: {}", config.completion.model);
                println!("Endpoint: {}", config.completion.endpoint);
                println!("API Key Variable: {} ({})", config.completion.api_key_env, key_status);
                println!("Report File: {}", config.output.report_file.display());
                println!("Colored Output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let path = Config::default().save(config_path)?;
                info!("Configuration reset at {}", path.display());
                println!("Configuration reset to defaults: {}", path.display());
            }
        },
    }

    Ok(())
}
