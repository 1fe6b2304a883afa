use crate::branch::BranchFilter;

/// Environment variable overriding the git program name
pub const PROGRAM_ENV: &str = "GIT_BRANCH_SELECT_GIT";

#[derive(Debug, Clone)]
pub struct Config {
    /// Version control executable to run
    pub program: String,
    /// List remote-tracking branches too
    pub all: bool,
    /// Echo commands and resolved paths to stdout
    pub verbose: bool,
    pub filter: Option<BranchFilter>,
}

impl Config {
    /// Create a new config with explicit values
    pub fn new(program: String, all: bool, verbose: bool, filter: Option<BranchFilter>) -> Self {
        Self {
            program,
            all,
            verbose,
            filter,
        }
    }

    /// Default config for tests
    pub fn default_for_tests() -> Self {
        Self {
            program: "git".to_string(),
            all: false,
            verbose: false,
            filter: None,
        }
    }

    /// Default program name, `$GIT_BRANCH_SELECT_GIT` or "git" if unset
    pub fn default_program() -> String {
        Self::program_or_git(std::env::var(PROGRAM_ENV).ok())
    }

    /// An unset or empty override falls back to "git"
    fn program_or_git(program: Option<String>) -> String {
        program
            .filter(|program| !program.is_empty())
            .unwrap_or_else(|| "git".to_string())
    }
}
