//! Navigation over scanning results: jumping to the next or previous host of a kind, and
//! browsing through all hosts containing a text.

pub mod actions;
pub mod console;
pub mod model;
pub mod navigation;
pub mod profiles;
pub mod results;
pub mod search;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_extensions;
