use derive_builder::Builder;

pub use result_type::{ParseResultTypeError, ResultType};
pub use scan_result_list::{MatchPolicy, ScanResultList};

pub mod loader;
mod result_type;
mod scan_result_list;

/// Represents ordered list of scanning results as seen by navigation and search.
///
/// Indices are stable: once assigned, an index always refers to the same result.
/// The list may grow between calls but never shrinks.
pub trait ResultStore {
    fn count(&self) -> usize;

    /// Returns result at `index` or `None` if `index` is not less than `count()`.
    fn get(&self, index: usize) -> Option<&ScanResult>;

    /// Returns the lowest index that is not less than `from_index` and whose textual
    /// representation contains `query`.
    fn find_text(&self, query: &str, from_index: usize) -> Option<usize>;
}

/// Single scanned host.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(pattern = "owned")]
pub struct ScanResult {
    #[builder(setter(into))]
    address: String,
    result_type: ResultType,
    #[builder(default, setter(each(name = "value", into)))]
    values: Vec<String>,
}

impl ScanResult {
    pub fn builder() -> ScanResultBuilder {
        ScanResultBuilder::default()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    pub fn values(&self) -> &[String] {
        &self.values[..]
    }

    /// Textual fragments used for substring matching: the address followed by all values.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.address.as_str())
            .chain(self.values.iter().map(String::as_str))
    }
}
