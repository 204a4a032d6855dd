use super::*;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

fn parse_row(fields: &[&str]) -> Question {
    RawQuestion::from_record(&record(fields))
        .expect("row should be accepted")
        .into()
}

#[test]
fn skips_short_rows() {
    assert!(RawQuestion::from_record(&record(&[])).is_none());
    assert!(RawQuestion::from_record(&record(&["Historie", "Otázka?", "a", "b", "c", "d", "A"])).is_none());
}

#[test]
fn reads_eight_field_row() {
    let raw = RawQuestion::from_record(&record(&[
        " Historie ",
        " Kdy vznikl stát? ",
        "907",
        " 1918",
        "1993 ",
        "2004",
        " b ",
        "2",
    ]))
    .unwrap();
    assert_eq!(raw.category, "Historie");
    assert_eq!(raw.question_text, "Kdy vznikl stát?");
    assert_eq!(raw.answers, ["907", "1918", "1993", "2004"].map(String::from));
    assert_eq!(raw.correct_letter, "b");
    assert_eq!(raw.fun_fact, None);
}

#[test]
fn marks_lettered_answer_correct() {
    for (letter, expected) in &[("A", 0), ("b", 1), ("C", 2), (" d ", 3)] {
        let question = parse_row(&["Sport", "Q", "w", "x", "y", "z", *letter, "1"]);
        let correct: Vec<usize> = question
            .answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_correct)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(correct, vec![*expected]);
    }
}

#[test]
fn unknown_letter_falls_back_to_first_answer() {
    for letter in &["", "E", "1", "AB"] {
        let question = parse_row(&["Sport", "Q", "w", "x", "y", "z", *letter, "1"]);
        assert_eq!(question.answers.len(), 4);
        assert!(question.answers[CORRECT_ANSWER_FALLBACK].is_correct);
        assert_eq!(question.answers.iter().filter(|a| a.is_correct).count(), 1);
    }
    assert_eq!(correct_answer_index("?"), CORRECT_ANSWER_FALLBACK);
}

#[test]
fn difficulty_falls_back_on_non_digits() {
    assert_eq!(parse_difficulty("abc"), DIFFICULTY_FALLBACK);
    assert_eq!(parse_difficulty(""), DIFFICULTY_FALLBACK);
    assert_eq!(parse_difficulty("-3"), DIFFICULTY_FALLBACK);
    assert_eq!(parse_difficulty("2.5"), DIFFICULTY_FALLBACK);
    assert_eq!(parse_difficulty("99999999999999999999"), DIFFICULTY_FALLBACK);
}

#[test]
fn difficulty_keeps_parsed_value() {
    assert_eq!(parse_difficulty("0"), 0);
    assert_eq!(parse_difficulty(" 3 "), 3);
    assert_eq!(parse_difficulty("007"), 7);
}

#[test]
fn blank_fun_fact_is_absent() {
    let question = parse_row(&["Kultura", "Q", "w", "x", "y", "z", "A", "1", "   "]);
    assert_eq!(question.fun_fact, None);

    let question = parse_row(&["Kultura", "Q", "w", "x", "y", "z", "A", "1", " Věděli jste? "]);
    assert_eq!(question.fun_fact.as_deref(), Some("Věděli jste?"));
}

#[test]
fn normalizes_category() {
    let question = parse_row(&["Zeměpis", "Q", "w", "x", "y", "z", "A", "1"]);
    assert_eq!(question.category_id, "zemepis");
}

#[test]
fn generates_fresh_ids() {
    let fields = ["Sport", "Q", "w", "x", "y", "z", "A", "1"];
    assert_ne!(parse_row(&fields).id, parse_row(&fields).id);
}

#[test]
fn serializes_in_pack_layout() {
    let question = parse_row(&["Historie", "Kdy vznikl stát?", "907", "1918", "1993", "2004", "B", "2"]);
    let json = serde_json::to_value(&question).unwrap();
    assert_eq!(json["id"], question.id.to_string());
    assert_eq!(json["categoryId"], "historie");
    assert_eq!(json["questionText"], "Kdy vznikl stát?");
    assert_eq!(json["difficulty"], 2);
    assert!(json["funFact"].is_null());
    assert_eq!(json["answers"][1]["text"], "1918");
    assert_eq!(json["answers"][1]["isCorrect"], true);
    assert_eq!(json["answers"][0]["isCorrect"], false);
}
