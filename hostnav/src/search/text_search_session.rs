use std::fmt::{Display, Formatter};

use crate::navigation::Direction;
use crate::results::ResultStore;
use crate::search::{MatchSet, SearchError};
use crate::view::ResultView;

/// Answer of the match browser prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseSignal {
    Previous,
    Next,
    Dismiss,
}

/// Currently shown match for display: `current` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPosition {
    pub current: usize,
    pub total: usize,
    pub index: usize,
}

impl Display for MatchPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Browsing {
        matches: MatchSet,
        position: usize,
    },
}

/// Position after moving one step in `direction` within `len` matches. Never wraps.
pub fn advance(position: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Backward if position > 0 => position - 1,
        Direction::Forward if position + 1 < len => position + 1,
        _ => position,
    }
}

/// Browsing through all results matching a text query.
///
/// `Idle -> Browsing` on [`begin`](Self::begin) when something matched, `Browsing -> Idle` on
/// [`dismiss`](Self::dismiss). Matches are frozen at `begin`.
#[derive(Debug, Default)]
pub struct TextSearchSession {
    state: SessionState,
    last_query: String,
}

impl TextSearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.state, SessionState::Browsing { .. })
    }

    /// Matches of the active session.
    pub fn matches(&self) -> Option<&MatchSet> {
        match &self.state {
            SessionState::Browsing { matches, .. } => Some(matches),
            SessionState::Idle => None,
        }
    }

    /// Query of the most recent `begin`, empty if there was none.
    pub fn last_query(&self) -> &str {
        self.last_query.as_str()
    }

    pub fn remember_query(&mut self, query: &str) {
        self.last_query = query.to_string();
    }

    pub fn begin<S, V>(&mut self, store: &S, view: &mut V, query: &str) -> Result<MatchPosition, SearchError>
    where
        S: ResultStore + ?Sized,
        V: ResultView + ?Sized,
    {
        log::info!("Find: {:?}", query);
        self.remember_query(query);
        self.state = SessionState::Idle;
        let matches = MatchSet::collect(store, query);
        if matches.is_empty() {
            return Err(SearchError::NoMatchesFound(query.to_string()));
        }
        self.state = SessionState::Browsing { matches, position: 0 };
        self.show(view)
    }

    pub fn advance<V>(&mut self, view: &mut V, direction: Direction) -> Result<MatchPosition, SearchError>
    where
        V: ResultView + ?Sized,
    {
        match &mut self.state {
            SessionState::Browsing { matches, position } => {
                *position = advance(*position, matches.len(), direction);
            }
            SessionState::Idle => return Err(SearchError::NotBrowsing),
        }
        self.show(view)
    }

    pub fn dismiss(&mut self) {
        if self.is_browsing() {
            log::debug!("Find session dismissed");
        }
        self.state = SessionState::Idle;
    }

    /// Applies a browser answer. Returns the new position, or `None` if the session was dismissed.
    pub fn handle<V>(&mut self, view: &mut V, signal: BrowseSignal) -> Result<Option<MatchPosition>, SearchError>
    where
        V: ResultView + ?Sized,
    {
        match signal {
            BrowseSignal::Previous => self.advance(view, Direction::Backward).map(Some),
            BrowseSignal::Next => self.advance(view, Direction::Forward).map(Some),
            BrowseSignal::Dismiss => {
                self.dismiss();
                Ok(None)
            }
        }
    }

    pub fn position(&self) -> Option<MatchPosition> {
        match &self.state {
            SessionState::Browsing { matches, position } => Some(MatchPosition {
                current: position + 1,
                total: matches.len(),
                index: matches[*position],
            }),
            SessionState::Idle => None,
        }
    }

    fn show<V: ResultView + ?Sized>(&self, view: &mut V) -> Result<MatchPosition, SearchError> {
        let position = self.position().ok_or(SearchError::NotBrowsing)?;
        view.select(position.index);
        Ok(position)
    }
}

// Tests are included according to http://xion.io/post/code/rust-unit-test-placement.html
#[cfg(test)]
#[path = "./text_search_session_tests.rs"]
mod text_search_session_tests;
