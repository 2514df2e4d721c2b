//! CSV loading service
//!
//! Turns the raw bytes of an upload into a [`Dataset`]: Latin-1 decoding,
//! missing-marker detection, and coercion of the order date and amount
//! columns. Cells that fail coercion become missing and are counted.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, info, trace};

use crate::config::Settings;
use crate::error::{DashError, DashResult};
use crate::models::{Column, Dataset, Money, ORDER_DATE, PROFIT, SALES};

/// Tokens read as a missing value (the usual dataframe NA markers)
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// How an upload is parsed
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Date formats tried in order for the order date column
    pub date_formats: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl LoadOptions {
    /// Build options from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            // Settings::validate guarantees an ASCII delimiter
            delimiter: settings.delimiter as u8,
            date_formats: settings.date_formats.clone(),
        }
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the date formats
    pub fn with_date_formats(mut self, formats: &[&str]) -> Self {
        self.date_formats = formats.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// Loads uploads into datasets
pub struct DatasetLoader {
    options: LoadOptions,
}

impl DatasetLoader {
    /// Create a new loader
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a `.csv` file from disk
    pub fn load_path(&self, path: &Path) -> DashResult<Dataset> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(DashError::Load(format!(
                "Unsupported file type: {} (expected a .csv file)",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| DashError::Load(format!("Failed to read {}: {}", path.display(), e)))?;

        info!(path = %path.display(), bytes = bytes.len(), "Loading upload");
        self.load_bytes(&bytes)
    }

    /// Parse an upload held in memory
    pub fn load_bytes(&self, bytes: &[u8]) -> DashResult<Dataset> {
        let text = decode_latin1(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.options.delimiter)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(DashError::Load("No columns to parse from file".into()));
        }

        let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() > headers.len() {
                return Err(DashError::Load(format!(
                    "Row {}: expected {} fields, saw {}",
                    idx + 1,
                    headers.len(),
                    record.len()
                )));
            }
            for (col, cells) in raw.iter_mut().enumerate() {
                cells.push(record.get(col).and_then(normalize_cell));
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw)
            .map(|(name, cells)| self.build_column(name, cells))
            .collect();

        let dataset = Dataset::new(columns)?;
        info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "Upload parsed"
        );
        Ok(dataset)
    }

    fn build_column(&self, name: String, cells: Vec<Option<String>>) -> Column {
        match name.as_str() {
            ORDER_DATE => {
                let mut unparseable = 0;
                let values = cells
                    .iter()
                    .map(|cell| {
                        cell.as_deref().and_then(|s| {
                            let parsed = self.parse_date(s.trim());
                            if parsed.is_none() {
                                unparseable += 1;
                                trace!(value = s, "Unparseable order date");
                            }
                            parsed
                        })
                    })
                    .collect();
                if unparseable > 0 {
                    debug!(column = %name, unparseable, "Dates coerced to missing");
                }
                Column::dates(name, values, unparseable)
            }
            SALES | PROFIT => {
                let mut unparseable = 0;
                let values = cells
                    .iter()
                    .map(|cell| {
                        cell.as_deref().and_then(|s| match Money::parse(s) {
                            Ok(m) => Some(m),
                            Err(e) => {
                                unparseable += 1;
                                trace!(error = %e, "Unparseable amount");
                                None
                            }
                        })
                    })
                    .collect();
                if unparseable > 0 {
                    debug!(column = %name, unparseable, "Amounts coerced to missing");
                }
                Column::amounts(name, values, unparseable)
            }
            _ => Column::text(name, cells),
        }
    }

    /// Parse a date string using the configured formats
    fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        self.options
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    }
}

/// Decode Latin-1 bytes; every byte maps to the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    bytes.iter().map(|&b| b as char).collect()
}

/// Check whether a raw cell is one of the missing markers
pub fn is_missing_token(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell.trim())
}

/// Text cells keep their padding; only the missing check ignores it
fn normalize_cell(cell: &str) -> Option<String> {
    if is_missing_token(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}
