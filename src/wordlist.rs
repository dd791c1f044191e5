//! Common-password lookup: a small built-in baseline set plus an optional
//! supplemental set loaded from a line-delimited wordlist file.
//!
//! The baseline is process-wide immutable static data. The supplemental set
//! belongs to the invocation and is unioned at lookup time, never merged
//! into storage.
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::io::{DEFAULT_MMAP_THRESHOLD_BYTES, iter_lines_auto};

/// Built-in baseline of known-weak passwords.
pub const BASELINE_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "qwerty",
    "abc123",
    "football",
    "111111",
    "123123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "login",
];

fn baseline() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| BASELINE_PASSWORDS.iter().copied().collect())
}

#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("failed to read wordlist {path}: {reason}")]
    Read { path: String, reason: String },
}

/// Baseline common-password set, optionally extended with entries from a
/// supplemental wordlist.
#[derive(Debug, Default, Clone)]
pub struct CommonSet {
    supplemental: HashSet<String>,
}

impl CommonSet {
    /// Baseline-only set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse supplemental entries from in-memory contents: one entry per
    /// line, trimmed, blank lines skipped.
    pub fn from_contents(contents: &str) -> Self {
        let supplemental = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Self { supplemental }
    }

    /// Load supplemental entries from a wordlist file, streaming lines with
    /// mmap for large files. Read errors are returned to the caller, which
    /// decides whether they are fatal (they are not, for the CLI).
    pub fn load_from_path<P: AsRef<Path>>(
        path: P,
        mmap_threshold_bytes: u64,
    ) -> Result<Self, WordlistError> {
        let display = path.as_ref().display().to_string();
        let iter = iter_lines_auto(&path, mmap_threshold_bytes).map_err(|e| {
            WordlistError::Read {
                path: display.clone(),
                reason: e.to_string(),
            }
        })?;
        let mut supplemental = HashSet::new();
        for line in iter {
            let line = line.map_err(|e| WordlistError::Read {
                path: display.clone(),
                reason: e.to_string(),
            })?;
            let entry = line.trim();
            if !entry.is_empty() {
                supplemental.insert(entry.to_string());
            }
        }
        Ok(Self { supplemental })
    }

    /// Convenience wrapper using the default mmap threshold.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        Self::load_from_path(path, DEFAULT_MMAP_THRESHOLD_BYTES)
    }

    /// Exact, case-sensitive lookup: baseline first, then the supplemental
    /// set, short-circuiting on the first match.
    pub fn contains(&self, password: &str) -> bool {
        if baseline().contains(password) {
            return true;
        }
        self.supplemental.contains(password)
    }

    /// Number of supplemental entries (the baseline is not counted).
    pub fn supplemental_len(&self) -> usize {
        self.supplemental.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn baseline_matches_are_case_sensitive() {
        let set = CommonSet::new();
        assert!(set.contains("123456"));
        assert!(set.contains("qwerty"));
        assert!(!set.contains("QWERTY"));
        assert!(!set.contains("not-in-any-list"));
    }

    #[test]
    fn supplemental_union_without_merging() {
        let set = CommonSet::from_contents("\nhunter2\n  correcthorse  \n\n");
        assert_eq!(set.supplemental_len(), 2);
        assert!(set.contains("hunter2"));
        assert!(set.contains("correcthorse"));
        // Baseline still answers.
        assert!(set.contains("password"));
    }

    #[test]
    fn load_from_file_trims_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "hunter2").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "  spaced  ").unwrap();
        let set = CommonSet::load(&path).unwrap();
        assert_eq!(set.supplemental_len(), 2);
        assert!(set.contains("spaced"));
    }

    #[test]
    fn missing_file_is_an_error_for_the_caller() {
        let err = CommonSet::load("/definitely/not/here.txt");
        assert!(err.is_err());
    }
}
