//! ats-scan: score a resume against a job description the way an ATS would

use ats_scan::cli::{self, Cli, Commands, ConfigAction};
use ats_scan::config::Config;
use ats_scan::error::{AtsScanError, Result};
use ats_scan::input::DocumentReader;
use ats_scan::output::{AnalysisReport, ReportGenerator};
use ats_scan::processing::AtsAnalyzer;
use clap::Parser;
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| AtsScanError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| AtsScanError::InvalidInput(format!("Job description file: {}", e)))?;
            let output_format = cli::parse_output_format(&output).map_err(AtsScanError::InvalidInput)?;

            info!("Reading input files");
            let mut reader = DocumentReader::new();
            let resume_text = reader.read_text(&resume).await?;
            let job_text = reader.read_text(&job).await?;
            info!(
                "Resume: {} chars, job description: {} chars",
                resume_text.len(),
                job_text.len()
            );

            let analyzer = AtsAnalyzer::with_options(
                &resume_text,
                &job_text,
                &config.analysis.extra_skill_patterns,
                config.scoring,
            );
            let analysis = analyzer.analyze();
            info!("Analysis complete: overall score {}", analysis.score.overall_score);

            let show_details = detailed || config.output.detailed;
            let mut report = AnalysisReport::new(
                analysis,
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
            );
            if show_details {
                report =
                    report.with_details(analyzer.resume_sections(), analyzer.job_requirements());
            }

            let generator = ReportGenerator::new(config.output.color_output, show_details);
            println!("{}", generator.format(&report, output_format)?);

            if let Some(path) = save {
                generator.save(&report, output_format, &path)?;
                info!("Report saved to {}", path.display());
            }

            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    AtsScanError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("# {}\n{}", Config::config_path().display(), rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}
