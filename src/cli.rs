//! Command line interface.

use clap::{Parser, Subcommand};

use crate::domain::analysis::{NormalizationMethod, WeightSet};
use crate::domain::foundation::AnalysisId;

#[derive(Parser, Debug)]
#[command(name = "student-migration-dss")]
#[command(about = "Rank study destinations and check how stable the ranking is", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Override the dataset file from the configuration
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank every alternative in the dataset
    Rank {
        #[command(flatten)]
        run: RunArgs,

        /// Normalization method (min_max, z_score, vector)
        #[arg(long)]
        method: Option<NormalizationMethod>,
    },

    /// Sweep each weight and report ranking stability
    Sensitivity {
        #[command(flatten)]
        run: RunArgs,

        /// Normalization method (min_max, z_score, vector)
        #[arg(long)]
        method: Option<NormalizationMethod>,

        /// Variation fractions, e.g. -0.2,0.2
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        variations: Option<Vec<f64>>,

        /// Only sweep these weight keys
        #[arg(long, value_delimiter = ',')]
        focus: Option<Vec<String>>,
    },

    /// Compare raw criterion values of selected alternatives
    Compare {
        /// Alternatives to compare
        #[arg(required = true)]
        alternatives: Vec<String>,

        /// Criteria to compare (defaults to all)
        #[arg(long, value_delimiter = ',')]
        criteria: Option<Vec<String>>,
    },

    /// Print a stored ranking run
    Show {
        /// Analysis id
        id: AnalysisId,
    },

    /// List stored ranking runs
    List,

    /// Describe the scoring method
    MethodInfo,
}

/// Arguments shared by the ranking and sensitivity commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Weight override as key=value, e.g. cost_of_living_weight=2.5 (repeatable)
    #[arg(long = "weight", value_parser = parse_weight)]
    pub weights: Vec<(String, f64)>,

    /// Session label stored with the result
    #[arg(long)]
    pub session: Option<String>,

    /// Do not store the result
    #[arg(long)]
    pub no_persist: bool,
}

impl RunArgs {
    /// Applies the overrides on top of the base weights.
    pub fn apply_to(&self, base: WeightSet) -> WeightSet {
        self.weights
            .iter()
            .fold(base, |weights, (key, value)| weights.with(key.clone(), *value))
    }
}

/// Parses `key=value` into a weight entry.
pub fn parse_weight(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err("weight key cannot be empty".to_string());
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{}': {}", value, e))?;

    Ok((key.to_string(), value))
}
