use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueHint};

use crate::ui::types::choices::{DumpFormat, LearnerChoice};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "K-fold cross-validation runner for batch classifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one or more learners on a delimited dataset
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Delimited data file: numeric features, class label in the last column
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Number of cross-validation folds
    #[arg(
        long,
        default_value_t = 10,
        value_name = "K",
        value_parser = clap::value_parser!(u64).range(2..),
    )]
    pub folds: u64,

    /// Learner to evaluate, repeatable
    /// (e.g. majority-class, decision-tree:max-depth=20,split-rule=entropy)
    #[arg(long = "learner", value_name = "SPEC", required = true)]
    pub learners: Vec<String>,

    /// Shuffle rows with this seed before folding (omit for contiguous folds)
    #[arg(long, value_name = "SEED")]
    pub shuffle_seed: Option<u64>,

    /// Field delimiter of the data file
    #[arg(long, default_value_t = ',', value_name = "CHAR")]
    pub delimiter: char,

    /// Skip the first non-comment line as a header row
    #[arg(long)]
    pub skip_header: bool,

    /// Print the confusion matrix for each learner
    #[arg(long)]
    pub confusion: bool,

    /// Print per-class and averaged ROC areas for each learner
    #[arg(long)]
    pub roc: bool,

    /// File to dump the final report after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,

    /// Format for the dump file (csv, tsv, json)
    #[arg(long, value_name = "FORMAT")]
    pub dump_format: Option<String>,
}

impl RunArgs {
    /// Parses every `--learner` spec, keeping the raw spec as display label.
    pub fn learner_choices(&self) -> Result<Vec<(String, LearnerChoice)>> {
        self.learners
            .iter()
            .map(|spec| {
                let choice = spec
                    .parse()
                    .with_context(|| format!("invalid learner '{spec}'"))?;
                Ok((spec.clone(), choice))
            })
            .collect()
    }

    pub fn dump_format(&self) -> Result<DumpFormat> {
        match &self.dump_format {
            Some(fmt) => {
                parse_dump_format(fmt).with_context(|| format!("invalid dump format '{fmt}'"))
            }
            None => Ok(DumpFormat::default()),
        }
    }
}

fn parse_dump_format(input: &str) -> Result<DumpFormat> {
    match input.trim().to_lowercase().as_str() {
        "csv" => Ok(DumpFormat::Csv),
        "tsv" => Ok(DumpFormat::Tsv),
        "json" => Ok(DumpFormat::Json),
        other => Err(anyhow!("unknown format '{other}'")),
    }
}
