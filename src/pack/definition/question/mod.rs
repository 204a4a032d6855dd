use csv::StringRecord;
use serde::Serialize;
use uuid::Uuid;

use super::category::normalize_category;

#[cfg(test)]
mod tests;

pub const ANSWER_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// Rows shorter than this are skipped. The fun fact column is optional.
pub const MIN_FIELDS: usize = 8;

/// Answer marked correct when the letter column is blank or not A-D.
pub const CORRECT_ANSWER_FALLBACK: usize = 0;

/// Difficulty used when the difficulty column is not a plain number.
pub const DIFFICULTY_FALLBACK: u32 = 1;

pub fn correct_answer_index(letter: &str) -> usize {
    let letter = letter.trim().to_uppercase();
    ANSWER_LETTERS
        .iter()
        .position(|l| *l == letter)
        .unwrap_or(CORRECT_ANSWER_FALLBACK)
}

pub fn parse_difficulty(field: &str) -> u32 {
    let field = field.trim();
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return DIFFICULTY_FALLBACK;
    }
    field.parse().unwrap_or(DIFFICULTY_FALLBACK)
}

fn non_empty(field: &str) -> Option<String> {
    let field = field.trim();
    if field.is_empty() {
        None
    } else {
        Some(field.to_owned())
    }
}

/// One CSV row, trimmed but otherwise uninterpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawQuestion {
    pub category: String,
    pub question_text: String,
    pub answers: [String; 4],
    pub correct_letter: String,
    pub difficulty: String,
    pub fun_fact: Option<String>,
}

impl RawQuestion {
    pub fn from_record(record: &StringRecord) -> Option<RawQuestion> {
        if record.len() < MIN_FIELDS {
            return None;
        }
        let field = |i: usize| record.get(i).unwrap_or_default().trim().to_owned();
        Some(RawQuestion {
            category: field(0),
            question_text: field(1),
            answers: [field(2), field(3), field(4), field(5)],
            correct_letter: field(6),
            difficulty: field(7),
            fun_fact: record.get(8).and_then(non_empty),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub category_id: String,
    pub question_text: String,
    pub difficulty: u32,
    pub fun_fact: Option<String>,
    pub answers: [Answer; 4],
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        let correct_index = correct_answer_index(&raw_question.correct_letter);
        let answer = |text: String, index: usize| Answer {
            text,
            is_correct: index == correct_index,
        };
        let [a, b, c, d] = raw_question.answers;

        Question {
            id: Uuid::new_v4(),
            category_id: normalize_category(&raw_question.category),
            question_text: raw_question.question_text,
            difficulty: parse_difficulty(&raw_question.difficulty),
            fun_fact: raw_question.fun_fact,
            answers: [answer(a, 0), answer(b, 1), answer(c, 2), answer(d, 3)],
        }
    }
}
