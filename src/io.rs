//! Line-oriented input plumbing shared by the password and wordlist
//! loaders. Small files go through a buffered reader; files at or above the
//! mmap threshold are memory-mapped and scanned for newlines, which matters
//! for supplemental wordlists that routinely run to hundreds of megabytes.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// File size at or above which the mmap path is used. Callers can override
/// per invocation (`0` is treated by the CLI as "never mmap").
pub const DEFAULT_MMAP_THRESHOLD_BYTES: u64 = 8 * 1024 * 1024; // 8 MiB

pub type LineIter = Box<dyn Iterator<Item = io::Result<String>> + Send + 'static>;

pub fn should_use_mmap(file_size_bytes: u64, threshold_bytes: u64) -> bool {
    file_size_bytes >= threshold_bytes
}

/// Iterate lines of any reader (stdin, in tests a cursor). Buffered; never
/// memory-mapped since the size is unknowable up front.
pub fn iter_lines_reader<R: Read + Send + 'static>(reader: R) -> LineIter {
    Box::new(BufReader::new(reader).lines())
}

fn iter_lines_bufread<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    Ok(Box::new(BufReader::new(file).lines()))
}

fn iter_lines_mmap<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    let mmap =
        unsafe { Mmap::map(&file) }.with_context(|| format!("mmap {}", path.as_ref().display()))?;
    Ok(Box::new(MmapLines { mmap, pos: 0 }))
}

struct MmapLines {
    mmap: Mmap,
    pos: usize,
}

impl Iterator for MmapLines {
    type Item = io::Result<String>;
    fn next(&mut self) -> Option<Self::Item> {
        let data: &[u8] = &self.mmap;
        if self.pos >= data.len() {
            return None;
        }
        let start = self.pos;
        match memchr::memchr(b'\n', &data[self.pos..]) {
            Some(off) => {
                let end = self.pos + off;
                self.pos = end + 1;
                Some(Ok(line_from_bytes(&data[start..end])))
            }
            None => {
                // Final line without a trailing newline.
                self.pos = data.len();
                Some(Ok(line_from_bytes(&data[start..])))
            }
        }
    }
}

fn line_from_bytes(bytes: &[u8]) -> String {
    // Handle Windows CRLF line endings.
    let slice = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    // Passwords are never rejected as invalid input, so undecodable bytes
    // degrade to replacement characters instead of erroring.
    String::from_utf8_lossy(slice).into_owned()
}

/// Choose mmap or buffered reading by file size and return a line iterator.
pub fn iter_lines_auto<P: AsRef<Path>>(path: P, threshold_bytes: u64) -> Result<LineIter> {
    let meta =
        std::fs::metadata(&path).with_context(|| format!("stat {}", path.as_ref().display()))?;
    if meta.is_file() && should_use_mmap(meta.len(), threshold_bytes) {
        iter_lines_mmap(path)
    } else {
        iter_lines_bufread(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_iterator_yields_lines() {
        let cursor = std::io::Cursor::new(b"one\ntwo\r\nthree".to_vec());
        let lines: Vec<String> = iter_lines_reader(cursor).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn mmap_and_bufread_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "alpha\nbeta\r\ngamma").unwrap();
        drop(f);

        let buffered: Vec<String> = iter_lines_auto(&path, u64::MAX)
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        let mapped: Vec<String> = iter_lines_auto(&path, 1)
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(buffered, mapped);
        assert_eq!(mapped, vec!["alpha", "beta", "gamma"]);
    }
}
