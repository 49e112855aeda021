use crate::results::ScanResult;
use crate::search::{BrowseSignal, MatchPosition};

/// Dialogs the host shows on behalf of the find actions.
pub trait Prompter {
    /// Asks for text to find, suggesting `last_query`. `None` means no search is requested.
    fn ask_query(&mut self, last_query: &str) -> Option<String>;

    /// Shows the current match and asks where to go next.
    fn browse(&mut self, position: MatchPosition, result: Option<&ScanResult>) -> BrowseSignal;

    fn notify_no_matches(&mut self, query: &str);

    /// Called once before browsing starts.
    fn notify_found(&mut self, query: &str, total: usize);

    /// Asks whether to search again from the first result.
    fn confirm_restart(&mut self, query: &str) -> bool;
}
