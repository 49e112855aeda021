use std::ops::Index;

use stopwatch::Stopwatch;

use crate::results::ResultStore;

/// Ascending, duplicate-free indices of results matching a query.
/// Computed once and never updated, results added later are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    indices: Vec<usize>,
}

impl MatchSet {
    #[profiling::function]
    pub fn collect<S: ResultStore + ?Sized>(store: &S, query: &str) -> Self {
        let sw = Stopwatch::start_new();
        let mut indices = vec![];
        let mut from = 0;
        while let Some(i) = store.find_text(query, from) {
            indices.push(i);
            from = i + 1;
        }
        log::debug!("{} matches of {:?} collected in {}ms", indices.len(), query, sw.elapsed_ms());
        MatchSet { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..]
    }
}

impl Index<usize> for MatchSet {
    type Output = usize;

    fn index(&self, position: usize) -> &Self::Output {
        &self.indices[position]
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::search::MatchSet;
    use crate::test_extensions::results_with_texts;

    #[test]
    fn test_collect_all_matches() {
        let store = results_with_texts(&["a", "b", "foo", "c", "d", "xfoo", "e", "foox"]);
        let matches = MatchSet::collect(&store, "foo");
        assert_that!(matches.as_slice()).is_equal_to(&[2_usize, 5, 7][..]);
    }

    #[test]
    fn test_collect_nothing() {
        let store = results_with_texts(&["a", "b"]);
        assert_that!(MatchSet::collect(&store, "foo").is_empty()).is_true();
    }

    #[test]
    fn test_empty_query_matches_every_result() {
        let store = results_with_texts(&["a", "b", "c"]);
        assert_that!(MatchSet::collect(&store, "").as_slice()).is_equal_to(&[0_usize, 1, 2][..]);
    }

    #[test]
    fn test_address_is_searched_too() {
        let store = results_with_texts(&["a", "b", "c"]);
        assert_that!(MatchSet::collect(&store, "host-1").as_slice()).is_equal_to(&[1_usize][..]);
    }
}
