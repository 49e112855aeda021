use std::collections::VecDeque;

use crate::actions::Prompter;
use crate::results::{MatchPolicy, ResultType, ScanResult, ScanResultList};
use crate::search::{BrowseSignal, MatchPosition};

/// Builds a store with one result per type; result `i` has address `10.0.0.{i}`.
pub fn results_of(types: &[ResultType]) -> ScanResultList {
    let mut list = ScanResultList::new(MatchPolicy::CaseSensitive);
    list.extend(types.iter().enumerate().map(|(i, t)| host(&format!("10.0.0.{}", i), *t, &[])));
    list
}

/// Builds a store of alive hosts whose only value is the corresponding text.
pub fn results_with_texts(texts: &[&str]) -> ScanResultList {
    let mut list = ScanResultList::new(MatchPolicy::CaseSensitive);
    list.extend(texts.iter().enumerate().map(|(i, text)| host(&format!("host-{}", i), ResultType::Alive, &[*text])));
    list
}

pub fn host(address: &str, result_type: ResultType, values: &[&str]) -> ScanResult {
    values.iter()
        .fold(ScanResult::builder().address(address).result_type(result_type), |b, v| b.value(*v))
        .build()
        .unwrap()
}

/// Prompter that replays prepared answers and records what it was shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub queries: VecDeque<Option<String>>,
    pub signals: VecDeque<BrowseSignal>,
    pub restarts: VecDeque<bool>,
    pub shown_positions: Vec<MatchPosition>,
    pub shown_addresses: Vec<Option<String>>,
    pub prefills: Vec<String>,
    pub not_found: Vec<String>,
    pub found: Vec<(String, usize)>,
}

impl ScriptedPrompter {
    pub fn with_query(query: &str) -> Self {
        let mut prompter = Self::default();
        prompter.queries.push_back(Some(query.to_string()));
        prompter
    }

    pub fn then(mut self, signals: &[BrowseSignal]) -> Self {
        self.signals.extend(signals.iter().copied());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_query(&mut self, last_query: &str) -> Option<String> {
        self.prefills.push(last_query.to_string());
        self.queries.pop_front().flatten()
    }

    fn browse(&mut self, position: MatchPosition, result: Option<&ScanResult>) -> BrowseSignal {
        self.shown_positions.push(position);
        self.shown_addresses.push(result.map(|r| r.address().to_string()));
        self.signals.pop_front().unwrap_or(BrowseSignal::Dismiss)
    }

    fn notify_no_matches(&mut self, query: &str) {
        self.not_found.push(query.to_string());
    }

    fn notify_found(&mut self, query: &str, total: usize) {
        self.found.push((query.to_string(), total));
    }

    fn confirm_restart(&mut self, _query: &str) -> bool {
        self.restarts.pop_front().unwrap_or(false)
    }
}
