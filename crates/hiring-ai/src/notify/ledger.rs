//! Append-only spreadsheet ledger acting as the system of record. Each sheet
//! is one CSV file in the configured directory; rows are only ever appended.

use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::config::LedgerConfig;

/// Named sheets in the hiring workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetName {
    Candidates,
    Assessments,
    Interviews,
    Decisions,
}

impl SheetName {
    pub const fn title(self) -> &'static str {
        match self {
            SheetName::Candidates => "Candidates",
            SheetName::Assessments => "Personality Assessments",
            SheetName::Interviews => "Interview Evaluations",
            SheetName::Decisions => "Hiring Decisions",
        }
    }

    const fn file_stem(self) -> &'static str {
        match self {
            SheetName::Candidates => "candidates",
            SheetName::Assessments => "assessments",
            SheetName::Interviews => "interviews",
            SheetName::Decisions => "decisions",
        }
    }
}

/// One row bound for a sheet. Headers describe the row and are written once
/// when the sheet file is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    pub sheet: SheetName,
    pub headers: &'static [&'static str],
    pub values: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Outcome of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendReceipt {
    Recorded,
    Skipped { reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LedgerStatus {
    pub configured: bool,
    pub detail: String,
}

/// Storage abstraction so workflows can be exercised without touching disk.
pub trait SheetLedger: Send + Sync {
    fn append(&self, record: &LedgerRecord) -> Result<AppendReceipt, LedgerError>;
    fn status(&self) -> LedgerStatus;
}

/// Production adapter writing one CSV file per sheet. An unset directory
/// disables persistence without failing requests.
#[derive(Debug, Clone)]
pub struct CsvLedger {
    directory: Option<PathBuf>,
}

impl CsvLedger {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            directory: config.directory.clone(),
        }
    }

    pub fn at(directory: PathBuf) -> Self {
        Self {
            directory: Some(directory),
        }
    }
}

impl SheetLedger for CsvLedger {
    fn append(&self, record: &LedgerRecord) -> Result<AppendReceipt, LedgerError> {
        let Some(directory) = &self.directory else {
            return Ok(AppendReceipt::Skipped {
                reason: "ledger directory not configured",
            });
        };

        std::fs::create_dir_all(directory)?;
        let path = directory.join(format!("{}.csv", record.sheet.file_stem()));
        let needs_header = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(record.headers)?;
        }
        writer.write_record(&record.values)?;
        writer.flush()?;

        Ok(AppendReceipt::Recorded)
    }

    fn status(&self) -> LedgerStatus {
        match &self.directory {
            Some(directory) => LedgerStatus {
                configured: true,
                detail: format!("csv ledger at {}", directory.display()),
            },
            None => LedgerStatus {
                configured: false,
                detail: "ledger directory not configured".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LedgerRecord {
        LedgerRecord {
            sheet: SheetName::Assessments,
            headers: &["Timestamp", "Candidate"],
            values: vec!["2026-01-05T12:00:00Z".to_string(), "Jordan Avery".to_string()],
        }
    }

    #[test]
    fn unconfigured_ledger_skips_without_error() {
        let ledger = CsvLedger::new(&LedgerConfig { directory: None });
        let receipt = ledger.append(&sample_record()).expect("append succeeds");
        assert!(matches!(receipt, AppendReceipt::Skipped { .. }));
        assert!(!ledger.status().configured);
    }

    #[test]
    fn appends_header_then_rows() {
        let dir = std::env::temp_dir().join(format!(
            "hiring-ai-ledger-test-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let ledger = CsvLedger::at(dir.clone());

        ledger.append(&sample_record()).expect("first append");
        ledger.append(&sample_record()).expect("second append");

        let contents =
            std::fs::read_to_string(dir.join("assessments.csv")).expect("sheet file exists");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Timestamp,Candidate");
        assert!(lines[1].contains("Jordan Avery"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
