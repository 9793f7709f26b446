use tracing::info;

/// One finished game. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

/// Session leaderboard: every finished game of this process run, kept in
/// descending score order. Never persisted and never pruned.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and re-sort. The sort is stable, so equal scores keep
    /// their insertion order.
    pub fn record(&mut self, username: &str, score: u32) {
        self.entries.push(ScoreEntry {
            username: username.to_string(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        info!(username, score, "leaderboard entry recorded");
    }

    /// Entries paired with their 1-based rank, best first
    pub fn standings(&self) -> impl Iterator<Item = (usize, &ScoreEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Highest score recorded so far, if any game has finished
    pub fn best_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
