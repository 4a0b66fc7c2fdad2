// SPDX-License-Identifier: MPL-2.0
//! Cursor over the virtual slide sequence.
//!
//! The sequence is `[Splash, Intro, Fabric(e1), ..., Fabric(en)]` and the
//! cursor lives in `[-1, n]`: `-1` is the splash, `0` the intro and `k` the
//! k-th fabric. Transitions saturate at both ends; nothing here can fail.

use super::Intent;
use crate::catalog::CatalogEntry;

/// Cursor value of the splash screen.
pub const SPLASH: isize = -1;
/// Cursor value of the intro slide.
pub const INTRO: isize = 0;

/// What the cursor currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide<'a> {
    Splash,
    Intro,
    Fabric(&'a CatalogEntry),
}

/// 1-based position of a fabric slide among all fabrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabricPosition {
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    cursor: isize,
    catalog_len: usize,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    /// Starts on the splash screen with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: SPLASH,
            catalog_len: 0,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    /// Highest reachable cursor value (`n`).
    #[must_use]
    pub fn max_cursor(&self) -> isize {
        isize::try_from(self.catalog_len).unwrap_or(isize::MAX)
    }

    /// Updates the number of fabric slides, pulling the cursor back into range
    /// if the catalog shrank.
    pub fn set_catalog_len(&mut self, len: usize) {
        self.catalog_len = len;
        self.cursor = self.cursor.clamp(SPLASH, self.max_cursor());
    }

    /// Moves one slide forward. Returns whether the cursor changed.
    pub fn next(&mut self) -> bool {
        if self.cursor < self.max_cursor() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves one slide back. Returns whether the cursor changed.
    pub fn previous(&mut self) -> bool {
        if self.cursor > SPLASH {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
        }
    }

    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.cursor == SPLASH
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.max_cursor()
    }

    /// The slide under the cursor.
    #[must_use]
    pub fn current_slide<'a>(&self, entries: &'a [CatalogEntry]) -> Slide<'a> {
        slide_at(self.cursor, entries)
    }

    /// The slide a `next()` would land on, if any.
    #[must_use]
    pub fn upcoming_slide<'a>(&self, entries: &'a [CatalogEntry]) -> Option<Slide<'a>> {
        if self.is_at_end() {
            None
        } else {
            Some(slide_at(self.cursor + 1, entries))
        }
    }

    /// Position among fabrics when a fabric slide is current.
    #[must_use]
    pub fn fabric_position(&self) -> Option<FabricPosition> {
        let index = usize::try_from(self.cursor).ok().filter(|&i| i >= 1)?;
        Some(FabricPosition {
            index,
            total: self.catalog_len,
        })
    }
}

/// Maps a cursor value to its slide.
///
/// Values past either end resolve to the nearest valid slide, so this is
/// total even for inputs the sequencer itself never produces.
#[must_use]
pub fn slide_at(cursor: isize, entries: &[CatalogEntry]) -> Slide<'_> {
    if cursor <= SPLASH {
        return Slide::Splash;
    }
    if cursor == INTRO {
        return Slide::Intro;
    }

    let index = usize::try_from(cursor - 1).unwrap_or(usize::MAX);
    match entries.get(index).or_else(|| entries.last()) {
        Some(entry) => Slide::Fabric(entry),
        None => Slide::Intro,
    }
}
