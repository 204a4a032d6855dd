use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use self::definition::category::is_known_category;
use self::definition::*;
use crate::config::Config;

pub mod definition;


pub const FREE_PACK_ID: &str = "free_base";
pub const FREE_PACK_NAME: &str = "Základní balíček";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPack {
    pub pack_id: String,
    pub pack_name: String,
    pub is_premium: bool,
    pub questions: Vec<Question>,
}

impl QuestionPack {
    pub fn free(questions: Vec<Question>) -> QuestionPack {
        QuestionPack {
            pack_id: FREE_PACK_ID.to_owned(),
            pack_name: FREE_PACK_NAME.to_owned(),
            is_premium: false,
            questions,
        }
    }

    pub fn summarize(&self) -> PackSummary {
        PackSummary::new(&self.questions)
    }

    pub fn write(&self, destination: &Path) -> Result<()> {
        let file = File::create(destination)
            .with_context(|| format!("could not create {}", destination.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("could not serialize pack to {}", destination.display()))?;
        writer
            .flush()
            .with_context(|| format!("could not write {}", destination.display()))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackSummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<u32, usize>,
}

impl PackSummary {
    pub fn new(questions: &[Question]) -> PackSummary {
        PackSummary {
            total: questions.len(),
            by_category: questions
                .iter()
                .map(|q| q.category_id.clone())
                .counts()
                .into_iter()
                .collect(),
            by_difficulty: questions
                .iter()
                .map(|q| q.difficulty)
                .counts()
                .into_iter()
                .collect(),
        }
    }

    pub fn unknown_categories(&self) -> Vec<&str> {
        self.by_category
            .keys()
            .map(|c| c.as_str())
            .filter(|c| !is_known_category(c))
            .collect()
    }

    fn trace(&self) {
        info!(total = self.total, "questions parsed");
        for (category, count) in &self.by_category {
            info!(category = %category, count, "questions by category");
        }
        for (difficulty, count) in &self.by_difficulty {
            info!(difficulty, count, "questions by difficulty");
        }
        for category in self.unknown_categories() {
            warn!(category = %category, "category is not known to the app");
        }
    }
}

/// Parses every batch file in `input_dir`, in file name order.
pub fn collect_questions(input_dir: &Path) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    for path in discover_batch_files(input_dir)? {
        let batch = BatchDefinition::open(&path)?;
        info!(
            file = batch.get_name(),
            count = batch.get_questions().len(),
            "processed batch file"
        );
        questions.extend(batch.into_questions());
    }
    Ok(questions)
}

/// Builds the free pack from `config.input_dir` and writes it to `config.output_path()`.
pub fn build_pack(config: &Config) -> Result<PathBuf> {
    let questions = collect_questions(&config.input_dir)?;
    let pack = QuestionPack::free(questions);
    pack.summarize().trace();

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "could not create output directory {}",
            config.output_dir.display()
        )
    })?;

    let destination = config.output_path();
    pack.write(&destination)?;

    let size = fs::metadata(&destination)
        .with_context(|| format!("could not stat {}", destination.display()))?
        .len();
    info!(
        path = %destination.display(),
        size_kb = %format!("{:.1}", size as f64 / 1024.0),
        "created question pack"
    );

    Ok(destination)
}
