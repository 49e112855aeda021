use thiserror::Error;

pub use find_next::{find_next, FindOutcome};
pub use match_set::MatchSet;
pub use text_search_session::{advance, BrowseSignal, MatchPosition, SessionState, TextSearchSession};

mod find_next;
mod match_set;
mod text_search_session;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("No results match {0:?}")]
    NoMatchesFound(String),
    #[error("Search session is not active")]
    NotBrowsing,
}
