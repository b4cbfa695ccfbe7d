//! Output file name derivation by suffix stripping.

use crate::error::Result;
use log::debug;
use regex::Regex;

/// Strips configured suffixes from template file names.
///
/// Suffixes are literals matched case-insensitively at the end of the name.
/// When several suffixes match, the longest one is removed.
#[derive(Debug, Clone, Default)]
pub struct SuffixStripper {
    pattern: Option<Regex>,
}

impl SuffixStripper {
    /// Builds a stripper from a list of suffixes; an empty list yields the identity.
    pub fn new<S: AsRef<str>>(suffixes: &[S]) -> Result<Self> {
        let mut literals: Vec<&str> = suffixes
            .iter()
            .map(AsRef::as_ref)
            .filter(|suffix| !suffix.is_empty())
            .collect();
        if literals.is_empty() {
            return Ok(Self::default());
        }

        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();
        let alternation = literals
            .iter()
            .map(|suffix| regex::escape(suffix))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i)(?:{alternation})$"))?;
        debug!("Suffix pattern: {}", pattern.as_str());

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Returns `file_name` with one matching suffix removed, or unchanged if none matches.
    pub fn strip<'a>(&self, file_name: &'a str) -> &'a str {
        match self.pattern.as_ref().and_then(|p| p.find(file_name)) {
            Some(found) => &file_name[..found.start()],
            None => file_name,
        }
    }
}
