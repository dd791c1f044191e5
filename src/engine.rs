//! Engine: orchestrates password evaluation over whole inputs. Owns the
//! common-password set for the invocation, collects Assessments in input
//! order, and provides streaming file/reader loaders with optional
//! memory-mapped I/O plus an order-preserving parallel batch path.
//!
//! Typical usage:
//!
//! ```no_run
//! use pwcheck::engine::Engine;
//! # fn main() -> anyhow::Result<()> {
//! let mut engine = Engine::new();
//! engine.evaluate_from_path("/path/to/passwords.txt")?;
//! for a in &engine.assessments {
//!     println!("{}", pwcheck::report::render_assessment(a, false));
//! }
//! # Ok(())
//! # }
//! ```
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use log::warn;
use rayon::prelude::*;

use crate::assessment::Assessment;
use crate::evaluator::evaluate;
use crate::io::{DEFAULT_MMAP_THRESHOLD_BYTES, iter_lines_auto, iter_lines_reader};
use crate::wordlist::CommonSet;

/// Evaluates passwords against a shared common set and aggregates results.
#[derive(Debug, Default)]
pub struct Engine {
    pub common: CommonSet,
    pub assessments: Vec<Assessment>,
}

impl Engine {
    /// Engine with the built-in baseline set only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_common(common: CommonSet) -> Self {
        Self {
            common,
            assessments: Vec::new(),
        }
    }

    /// Extend the common set from a supplemental wordlist. A missing or
    /// unreadable wordlist is never fatal: the baseline set still applies.
    pub fn load_wordlist<P: AsRef<Path>>(&mut self, path: P, mmap_threshold_bytes: u64) {
        match CommonSet::load_from_path(&path, mmap_threshold_bytes) {
            Ok(set) => {
                log::debug!(
                    "loaded {} supplemental entries from {}",
                    set.supplemental_len(),
                    path.as_ref().display()
                );
                self.common = set;
            }
            Err(e) => warn!("{} (continuing with built-in set)", e),
        }
    }

    /// Evaluate one password, record and return the Assessment.
    pub fn evaluate_one(&mut self, password: &str) -> Assessment {
        let a = evaluate(password, &self.common);
        self.assessments.push(a.clone());
        a
    }

    /// Evaluate an in-memory batch sequentially, in input order. Blank
    /// entries are skipped. Intended for tests and small programmatic use.
    pub fn evaluate_batch<I, S>(&mut self, passwords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pw in passwords {
            if pw.as_ref().trim().is_empty() {
                continue;
            }
            self.evaluate_one(pw.as_ref());
        }
    }

    /// Evaluate a collected batch on the rayon pool. `par_iter` keeps the
    /// collected order aligned with the input order, so the observable
    /// result is identical to the sequential path.
    pub fn evaluate_batch_parallel(&mut self, passwords: &[String]) {
        let common = &self.common;
        let mut batch: Vec<Assessment> = passwords
            .par_iter()
            .filter(|pw| !pw.trim().is_empty())
            .map(|pw| evaluate(pw, common))
            .collect();
        self.assessments.append(&mut batch);
    }

    /// Stream passwords from a file, one per non-blank line. Open or read
    /// errors are fatal here; the caller decides the exit path.
    pub fn evaluate_from_path_with_threshold<P: AsRef<Path>>(
        &mut self,
        path: P,
        mmap_threshold_bytes: u64,
    ) -> Result<()> {
        let iter = iter_lines_auto(&path, mmap_threshold_bytes)?;
        for line in iter {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.evaluate_one(&line);
        }
        Ok(())
    }

    /// Convenience wrapper using the default mmap threshold.
    pub fn evaluate_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.evaluate_from_path_with_threshold(path, DEFAULT_MMAP_THRESHOLD_BYTES)
    }

    /// Stream passwords from any reader (the CLI passes piped stdin).
    pub fn evaluate_from_reader<R: Read + Send + 'static>(&mut self, reader: R) -> Result<()> {
        for line in iter_lines_reader(reader) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.evaluate_one(&line);
        }
        Ok(())
    }
}
