use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "admin-panel";
pub const DEFAULT_OUTPUT_DIR: &str = "Resources/Questions";
pub const DEFAULT_OUTPUT_FILE: &str = "free_questions.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }

    /// Usage: `question-pack [INPUT_DIR] [OUTPUT_DIR]`
    ///
    /// Positional arguments win over the environment:
    /// - `QUESTION_PACK_INPUT_DIR` (default: "admin-panel")
    /// - `QUESTION_PACK_OUTPUT_DIR` (default: "Resources/Questions")
    /// - `QUESTION_PACK_OUTPUT_FILE` (default: "free_questions.json")
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    fn resolve<A, E>(args: A, env: E) -> Self
    where
        A: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let input_dir = args
            .next()
            .or_else(|| env("QUESTION_PACK_INPUT_DIR"))
            .unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string());
        let output_dir = args
            .next()
            .or_else(|| env("QUESTION_PACK_OUTPUT_DIR"))
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let output_file =
            env("QUESTION_PACK_OUTPUT_FILE").unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

        Self {
            output_file,
            ..Self::new(input_dir, output_dir)
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
