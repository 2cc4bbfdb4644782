use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use student_migration_dss::adapters::{FileResultStore, JsonFileDataSource};
use student_migration_dss::application::{
    CompareAlternativesHandler, CompareAlternativesQuery, RunAnalysisCommand, RunAnalysisHandler,
    RunSensitivityCommand, RunSensitivityHandler,
};
use student_migration_dss::cli::{Cli, Commands};
use student_migration_dss::config::{AppConfig, LoggingConfig};
use student_migration_dss::domain::analysis::SawScorer;
use student_migration_dss::ports::{AnalysisDataSource, AnalysisResultStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging);

    let dataset_path = cli
        .dataset
        .clone()
        .unwrap_or_else(|| config.storage.dataset_path.clone());
    let data_source: Arc<dyn AnalysisDataSource> = Arc::new(JsonFileDataSource::new(&dataset_path));
    let result_store: Arc<dyn AnalysisResultStore> =
        Arc::new(FileResultStore::new(&config.storage.results_dir));
    let handler_config = config.handler_config()?;

    info!(dataset = %dataset_path, method = %handler_config.normalization, "Starting");

    match cli.command {
        Commands::Rank { run, method } => {
            let handler = RunAnalysisHandler::new(data_source, result_store, handler_config);
            let result = handler
                .handle(RunAnalysisCommand {
                    weights: run.apply_to(config.preferences.to_weight_set()),
                    method,
                    session: run.session.clone(),
                    persist: config.storage.persist_results && !run.no_persist,
                })
                .await?;
            print_json(&result.record)?;
        }
        Commands::Sensitivity {
            run,
            method,
            variations,
            focus,
        } => {
            let handler = RunSensitivityHandler::new(data_source, result_store, handler_config);
            let record = handler
                .handle(RunSensitivityCommand {
                    weights: run.apply_to(config.preferences.to_weight_set()),
                    variations,
                    focus,
                    method,
                    session: run.session.clone(),
                    persist: config.storage.persist_results && !run.no_persist,
                })
                .await?;
            print_json(&record)?;
        }
        Commands::Compare {
            alternatives,
            criteria,
        } => {
            let handler = CompareAlternativesHandler::new(data_source, handler_config);
            let comparison = handler
                .handle(CompareAlternativesQuery {
                    alternatives,
                    criteria,
                })
                .await?;
            print_json(&comparison)?;
        }
        Commands::Show { id } => {
            let record = result_store.load_analysis(id).await?;
            print_json(&record)?;
        }
        Commands::List => {
            let ids = result_store.list_analyses().await?;
            print_json(&ids)?;
        }
        Commands::MethodInfo => print_json(&SawScorer::method_info())?,
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
