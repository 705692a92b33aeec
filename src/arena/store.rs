//! In-memory leaderboard
//!
//! The board only grows: entries are never removed or edited once
//! inserted, and the whole thing is dropped at the end of the session.

use super::score::ScoreSource;
use serde::Serialize;

/// One ranked challenger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub score: u8,
}

/// Ordered sequence of entries, highest score first
///
/// Ties keep insertion order, so a newcomer with an existing score lands
/// after everyone who already holds it.
pub struct Leaderboard {
    entries: Vec<Entry>,
    scores: Box<dyn ScoreSource>,
}

impl Leaderboard {
    pub fn new(scores: Box<dyn ScoreSource>) -> Self {
        Self {
            entries: Vec::new(),
            scores,
        }
    }

    /// Seed a score for `name`, add it, and re-rank the board
    pub fn insert(&mut self, name: impl Into<String>) -> Entry {
        let entry = Entry {
            name: name.into(),
            score: self.scores.next_score(),
        };

        self.entries.push(entry.clone());
        // sort_by is stable: equal scores keep their relative order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        // Everyone at or above this score, the newcomer last among them
        let rank = self
            .entries
            .iter()
            .filter(|e| e.score >= entry.score)
            .count();

        tracing::debug!(
            name = %entry.name,
            score = entry.score,
            rank,
            total = self.entries.len(),
            "Leaderboard entry added"
        );

        entry
    }

    /// Current ranking, best first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score on the board, if anyone has entered
    pub fn top_score(&self) -> Option<u8> {
        self.entries.first().map(|e| e.score)
    }
}

impl std::fmt::Debug for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaderboard")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
