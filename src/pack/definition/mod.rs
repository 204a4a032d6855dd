use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod category;
pub mod question;


pub use question::{Question, RawQuestion};

lazy_static! {
    static ref BATCH_FILE_NAME_REGEX: Regex = Regex::new(r"^questions_batch.*\.csv$").unwrap();
}

pub const CSV_DELIMITER: u8 = b';';

pub fn is_batch_file_name(name: &str) -> bool {
    BATCH_FILE_NAME_REGEX.is_match(name)
}

/// Lists the batch files directly inside `input_dir`, sorted by file name.
pub fn discover_batch_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("could not read input directory {}", input_dir.display()))?;

    let mut batch_files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("could not list input directory {}", input_dir.display()))?;
        let is_match = entry
            .file_name()
            .to_str()
            .map_or(false, is_batch_file_name);
        if is_match && entry.path().is_file() {
            batch_files.push(entry.path());
        }
    }

    batch_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(batch_files)
}

#[derive(Debug)]
pub struct BatchDefinition {
    name: String,
    questions: Vec<Question>,
}

impl BatchDefinition {
    pub fn open(source: &Path) -> Result<BatchDefinition> {
        let file = File::open(source)
            .with_context(|| format!("could not open batch file {}", source.display()))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        csv_reader
            .headers()
            .with_context(|| format!("could not read batch file {}", source.display()))?;

        let mut questions = Vec::new();
        for record in csv_reader.records() {
            let record =
                record.with_context(|| format!("could not read batch file {}", source.display()))?;
            match RawQuestion::from_record(&record) {
                Some(raw_question) => questions.push(raw_question.into()),
                None => debug!(
                    file = %source.display(),
                    line = record.position().map(|p| p.line()),
                    fields = record.len(),
                    "skipping short row"
                ),
            }
        }

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());

        Ok(BatchDefinition { name, questions })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
