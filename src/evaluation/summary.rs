use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

/// One evaluated model: the headline scores plus CPU accounting.
#[derive(Clone, Debug, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
    pub accuracy: f64,
    pub fit_seconds: f64,
    pub predict_seconds: f64,
}

impl Display for ModelSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{},{:.3},{:.3},{:.3}",
            self.name, self.precision, self.recall, self.f_score
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

/// Ordered collection of model summaries from one evaluation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    rows: Vec<ModelSummary>,
}

impl Report {
    pub fn push(&mut self, row: ModelSummary) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ModelSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn export(&self, path: &Path, format: ReportFormat) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            ReportFormat::Csv => self.write_delimited(&mut writer, ','),
            ReportFormat::Tsv => self.write_delimited(&mut writer, '\t'),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &self.rows)?;
                writeln!(writer)
            }
        }
    }

    fn write_delimited<W: Write>(&self, writer: &mut W, sep: char) -> Result<(), Error> {
        writeln!(
            writer,
            "classifier{sep}precision{sep}recall{sep}f_score{sep}accuracy{sep}fit_seconds{sep}predict_seconds"
        )?;
        for row in &self.rows {
            writeln!(
                writer,
                "{}{sep}{:.6}{sep}{:.6}{sep}{:.6}{sep}{:.6}{sep}{:.6}{sep}{:.6}",
                row.name,
                row.precision,
                row.recall,
                row.f_score,
                row.accuracy,
                row.fit_seconds,
                row.predict_seconds
            )?;
        }
        Ok(())
    }
}
