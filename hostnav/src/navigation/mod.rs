use thiserror::Error;

use crate::results::{ResultStore, ResultType};
use crate::view::ResultView;

pub use goto::{GotoAction, HostFilter};

mod goto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward, Backward
}

impl Direction {
    /// Index next to `index` in this direction, `None` if it would be negative.
    pub fn step(&self, index: usize) -> Option<usize> {
        match self {
            Direction::Forward => index.checked_add(1),
            Direction::Backward => index.checked_sub(1),
        }
    }

    /// First index to inspect when nothing is selected in a list of `size` elements.
    fn first_index(&self, size: usize) -> Option<usize> {
        match self {
            Direction::Forward => Some(0),
            Direction::Backward => size.checked_sub(1),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No matching result found")]
    NoMatchFound,
}

/// Moves the selection of `view` to the next result (in `direction`) whose type satisfies
/// `predicate`.
///
/// Scanning starts next to the current selection. If the end of the list is reached, selection
/// is cleared and the list is scanned once more from the opposite end; no further wraps are made.
/// A selection outside of the store is treated as absent.
///
/// On failure the selection is left cleared.
#[profiling::function]
pub fn navigate<S, V, P>(store: &S, view: &mut V, direction: Direction, predicate: P) -> Result<usize, NavigationError>
where
    S: ResultStore + ?Sized,
    V: ResultView + ?Sized,
    P: Fn(ResultType) -> bool,
{
    let size = store.count();
    let mut cursor = view.selection().filter(|i| *i < size);
    let mut rewound = false;
    loop {
        let mut next = match cursor {
            Some(c) => direction.step(c),
            None => direction.first_index(size),
        };
        while let Some(i) = next.filter(|i| *i < size) {
            let matches = store.get(i)
                .map(|r| predicate(r.result_type()))
                .unwrap_or(false);
            if matches {
                log::debug!("Navigated {:?} from {:?} to {}", direction, view.selection(), i);
                view.select(i);
                return Ok(i);
            }
            next = direction.step(i);
        }

        // rewind only if the pass did not already start from the end
        if cursor.is_none() || rewound {
            break;
        }
        rewound = true;
        cursor = None;
        view.deselect_all();
    }
    log::debug!("No match {:?} among {} results", direction, size);
    view.deselect_all();
    Err(NavigationError::NoMatchFound)
}
