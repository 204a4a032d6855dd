use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Category identifiers the mobile app ships artwork and labels for.
/// Questions outside this set are still packed, only reported.
pub const KNOWN_CATEGORY_IDS: [&str; 5] = ["historie", "zemepis", "osobnosti", "kultura", "sport"];

/// Turns a display label such as `Zeměpis` into its identifier `zemepis`.
pub fn normalize_category(label: &str) -> String {
    label
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_letter(*c))
        .collect()
}

/// Letters proper (Lu, Ll, Lt, Lm, Lo). Letter numbers and circled letters are
/// alphabetic to `char::is_alphabetic` but are not kept here.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub fn is_known_category(category_id: &str) -> bool {
    KNOWN_CATEGORY_IDS.contains(&category_id)
}
