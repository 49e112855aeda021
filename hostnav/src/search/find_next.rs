use crate::results::ResultStore;
use crate::view::ResultView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found(usize),
    NotFound,
}

/// Selects the first result after the current selection that contains `query`.
///
/// If nothing is found and the search did not start from the first result, `confirm_restart`
/// decides whether to clear the selection and search once more from the beginning.
pub fn find_next<S, V, F>(store: &S, view: &mut V, query: &str, mut confirm_restart: F) -> FindOutcome
where
    S: ResultStore + ?Sized,
    V: ResultView + ?Sized,
    F: FnMut() -> bool,
{
    let start = view.selection().map_or(0, |i| i + 1);
    if let Some(i) = store.find_text(query, start) {
        view.select(i);
        return FindOutcome::Found(i);
    }
    if start > 0 && confirm_restart() {
        view.deselect_all();
        if let Some(i) = store.find_text(query, 0) {
            view.select(i);
            return FindOutcome::Found(i);
        }
    }
    log::debug!("{:?} not found starting from {}", query, start);
    FindOutcome::NotFound
}
