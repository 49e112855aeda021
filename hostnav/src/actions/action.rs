use anyhow::anyhow;

use crate::actions::action_impl::{self, ActionImpl};
use crate::actions::Prompter;
use crate::model::ScanModel;
use crate::profiles::ActionDescription;

/// Console action: implementation joined with its profile description.
#[derive(Clone)]
pub struct Action {
    id: String,
    description: String,
    commands: Vec<String>,
    action_impl: &'static ActionImpl,
}

impl Action {
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// User-friendly description of the action
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Commands that trigger the action
    pub fn commands(&self) -> &[String] {
        &self.commands[..]
    }

    /// Mutates model and asks the user through `prompter` if needed. Everything the host should
    /// show afterwards is emitted as model events.
    pub fn perform_action(&self, model: &mut ScanModel, prompter: &mut dyn Prompter) -> anyhow::Result<()> {
        profiling::scope!("action", self.id.as_str());
        (self.action_impl.action_impl)(model, prompter)
    }

    pub fn print_commands(&self) -> String {
        self.commands.join("/")
    }
}

impl TryFrom<&ActionDescription> for Action {
    type Error = anyhow::Error;

    fn try_from(value: &ActionDescription) -> Result<Self, Self::Error> {
        let action_impl = action_impl::lookup(value.id())
            .ok_or_else(|| anyhow!("Implementation for id {} not found", value.id()))?;
        Ok(Self {
            id: value.id().to_string(),
            description: value.description().unwrap_or(value.id()).to_string(),
            commands: value.commands().to_vec(),
            action_impl,
        })
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::actions::Action;
    use crate::profiles::ActionDescription;

    #[test]
    fn test_from_description() {
        let description = ActionDescription::new("find_next", Option::<String>::None, vec!["g", "again"]);
        let action = Action::try_from(&description).unwrap();
        assert_that!(action.id()).is_equal_to("find_next");
        assert_that!(action.description()).is_equal_to("find_next");
        assert_that!(action.print_commands()).is_equal_to("g/again".to_string());
    }

    #[test]
    fn test_unknown_implementation() {
        let description = ActionDescription::new("self_destruct", Some("Boom"), vec!["x"]);
        assert_that!(Action::try_from(&description).is_err()).is_true();
    }
}
