use std::fmt::{Display, Formatter};

use crate::navigation::{navigate, Direction, NavigationError};
use crate::results::{ResultStore, ResultType};
use crate::view::ResultView;

/// Kind of hosts a go-to action jumps between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFilter {
    Alive,
    Dead,
    WithInfo,
}

impl HostFilter {
    pub fn result_type(&self) -> ResultType {
        match self {
            HostFilter::Alive => ResultType::Alive,
            HostFilter::Dead => ResultType::Dead,
            HostFilter::WithInfo => ResultType::WithPorts,
        }
    }

    pub fn matches(&self, result_type: ResultType) -> bool {
        self.result_type().matches(result_type)
    }
}

/// One of the "go to next/previous host" menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoAction {
    pub direction: Direction,
    pub filter: HostFilter,
}

impl GotoAction {
    pub const ALL: [GotoAction; 6] = [
        GotoAction::new(Direction::Forward, HostFilter::Alive),
        GotoAction::new(Direction::Backward, HostFilter::Alive),
        GotoAction::new(Direction::Forward, HostFilter::Dead),
        GotoAction::new(Direction::Backward, HostFilter::Dead),
        GotoAction::new(Direction::Forward, HostFilter::WithInfo),
        GotoAction::new(Direction::Backward, HostFilter::WithInfo),
    ];

    pub const fn new(direction: Direction, filter: HostFilter) -> Self {
        GotoAction { direction, filter }
    }

    /// Identifier used in profiles, e.g. `next_alive_host` or `prev_host_with_info`.
    pub fn id(&self) -> &'static str {
        match (self.direction, self.filter) {
            (Direction::Forward, HostFilter::Alive) => "next_alive_host",
            (Direction::Backward, HostFilter::Alive) => "prev_alive_host",
            (Direction::Forward, HostFilter::Dead) => "next_dead_host",
            (Direction::Backward, HostFilter::Dead) => "prev_dead_host",
            (Direction::Forward, HostFilter::WithInfo) => "next_host_with_info",
            (Direction::Backward, HostFilter::WithInfo) => "prev_host_with_info",
        }
    }

    pub fn perform<S, V>(&self, store: &S, view: &mut V) -> Result<usize, NavigationError>
    where
        S: ResultStore + ?Sized,
        V: ResultView + ?Sized,
    {
        let filter = self.filter;
        navigate(store, view, self.direction, |t| filter.matches(t))
    }
}

impl Display for GotoAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use spectral::prelude::*;

    use crate::navigation::{Direction, GotoAction, HostFilter};
    use crate::test_extensions::results_of;
    use crate::results::ResultType::*;
    use crate::view::{Cursor, ResultView};

    #[test]
    fn test_ids_are_unique() {
        let ids = GotoAction::ALL.iter().map(GotoAction::id).unique().collect_vec();
        assert_that!(ids).has_length(6);
    }

    #[test]
    fn test_with_info_goes_to_hosts_with_ports() {
        let store = results_of(&[Alive, WithPorts, Dead, WithPorts]);
        let mut cursor = Cursor::unset();
        let action = GotoAction::new(Direction::Backward, HostFilter::WithInfo);
        assert_that!(action.perform(&store, &mut cursor)).is_ok_containing(3);
        assert_that!(action.perform(&store, &mut cursor)).is_ok_containing(1);
        assert_that!(cursor.selection()).is_some().is_equal_to(1);
    }

    #[test]
    fn test_dead_skips_unknown() {
        let store = results_of(&[Unknown, Alive, Dead]);
        let mut cursor = Cursor::unset();
        let action = GotoAction::new(Direction::Forward, HostFilter::Dead);
        assert_that!(action.perform(&store, &mut cursor)).is_ok_containing(2);
    }
}
