use crate::results::{ResultStore, ScanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl MatchPolicy {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            MatchPolicy::CaseSensitive
        } else {
            MatchPolicy::CaseInsensitive
        }
    }

    fn contains(&self, text: &str, query: &str) -> bool {
        match self {
            MatchPolicy::CaseSensitive => text.contains(query),
            MatchPolicy::CaseInsensitive => text.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// Append-only in-memory store of scanning results.
#[derive(Debug, Default)]
pub struct ScanResultList {
    results: Vec<ScanResult>,
    policy: MatchPolicy,
}

impl ScanResultList {
    pub fn new(policy: MatchPolicy) -> Self {
        ScanResultList {
            results: vec![],
            policy,
        }
    }

    /// Appends `result` and returns its index.
    pub fn add(&mut self, result: ScanResult) -> usize {
        self.results.push(result);
        self.results.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanResult> {
        self.results.iter()
    }
}

impl Extend<ScanResult> for ScanResultList {
    fn extend<T: IntoIterator<Item = ScanResult>>(&mut self, iter: T) {
        self.results.extend(iter)
    }
}

impl ResultStore for ScanResultList {
    fn count(&self) -> usize {
        self.results.len()
    }

    fn get(&self, index: usize) -> Option<&ScanResult> {
        self.results.get(index)
    }

    fn find_text(&self, query: &str, from_index: usize) -> Option<usize> {
        self.results.iter()
            .enumerate()
            .skip(from_index)
            .find(|(_, result)| result.texts().any(|text| self.policy.contains(text, query)))
            .map(|(i, _)| i)
    }
}
