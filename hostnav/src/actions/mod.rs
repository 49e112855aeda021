pub use action::Action;
pub use action_registry::ActionRegistry;
pub use prompter::Prompter;

mod action;
mod action_impl;
mod action_registry;
mod find;
mod goto;
mod prompter;
