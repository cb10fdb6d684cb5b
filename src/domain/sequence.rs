// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/sequence.rs
//
// Output file naming: `<stem>_<counter:03>.png` next to the source image.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constant::{COUNTER_WIDTH, FIRST_CROP_INDEX, OUTPUT_EXT};

/// Counter and naming scheme for the crops cut out of one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSequence {
    directory: PathBuf,
    stem: String,
    counter: u32,
}

impl CropSequence {
    /// Build the sequence for `source`, continuing after the highest crop
    /// index already present in its directory.
    pub fn scan(source: &Path) -> io::Result<Self> {
        let mut sequence = Self::starting_at(source, FIRST_CROP_INDEX);

        let mut highest: Option<u32> = None;
        for entry in fs::read_dir(&sequence.directory)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(index) = crop_index(&sequence.stem, name) {
                highest = Some(highest.map_or(index, |h| h.max(index)));
            }
        }

        if let Some(highest) = highest {
            sequence.counter = highest.saturating_add(1);
        }

        log::debug!(
            "crop sequence for {} starts at {}",
            source.display(),
            sequence.counter
        );

        Ok(sequence)
    }

    /// Build the sequence without touching the file system.
    pub fn starting_at(source: &Path, counter: u32) -> Self {
        let directory = match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            directory,
            stem,
            counter,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }

    pub fn advance(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Directory plus `<stem>_`; the counter and extension follow.
    pub fn prefix(&self) -> PathBuf {
        self.directory.join(format!("{}_", self.stem))
    }

    /// Path the next crop will be written to.
    pub fn output_path(&self) -> PathBuf {
        let mut path = self.prefix().into_os_string();
        path.push(format!(
            "{:0width$}.{OUTPUT_EXT}",
            self.counter,
            width = COUNTER_WIDTH
        ));
        PathBuf::from(path)
    }
}

/// Parse `<stem>_<digits>.png` and return the digits.
///
/// The underscore has to follow the stem directly, so `photo_old_003.png`
/// does not count as a crop of `photo`.
fn crop_index(stem: &str, file_name: &str) -> Option<u32> {
    let rest = file_name.strip_prefix(stem)?.strip_prefix('_')?;
    let (digits, ext) = rest.rsplit_once('.')?;

    if !ext.eq_ignore_ascii_case(OUTPUT_EXT)
        || digits.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    digits.parse().ok()
}
