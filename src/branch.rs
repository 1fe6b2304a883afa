use colored::Colorize;
use regex::Regex;
use regex::RegexBuilder;

use crate::error::Result;
use crate::error::SelectError;

/// Parse `git branch` output into branch names.
///
/// Spaces and the `*` current-branch marker are trimmed from both ends of each
/// line; empty lines are dropped. Order is preserved.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .split('\n')
        .map(|line| line.trim_matches(|c| c == ' ' || c == '*'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive filter over branch names.
#[derive(Debug, Clone)]
pub struct BranchFilter {
    text: String,
    matcher: Regex,
}

impl BranchFilter {
    /// Match names containing `text`. Regex metacharacters in `text` match themselves.
    pub fn literal(text: &str) -> Result<Self> {
        Self::build(text, &regex::escape(text))
    }

    /// Match names against `text` as a regular expression.
    pub fn pattern(text: &str) -> Result<Self> {
        Self::build(text, text)
    }

    fn build(text: &str, source: &str) -> Result<Self> {
        let matcher = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Self {
            text: text.to_string(),
            matcher,
        })
    }

    /// The filter as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    pub fn apply(&self, branches: Vec<String>) -> Vec<String> {
        branches
            .into_iter()
            .filter(|name| self.is_match(name))
            .collect()
    }
}

/// Render one menu entry, e.g. ` 3: main`.
pub fn format_entry(index: usize, name: &str) -> String {
    let index = format!("{:>2}", index);
    format!("{}: {}", index.as_str().cyan(), name)
}

pub fn write_branch_list(branches: &[String], stdout: &mut impl std::io::Write) -> Result<()> {
    for (index, name) in branches.iter().enumerate() {
        writeln!(stdout, "{}", format_entry(index, name))?;
    }
    Ok(())
}

/// Look up the branch at a user-supplied index.
pub fn select(branches: &[String], index: i64) -> Result<&str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| branches.get(i))
        .map(String::as_str)
        .ok_or(SelectError::IndexOutOfRange {
            index,
            len: branches.len(),
        })
}
