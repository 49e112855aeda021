use std::collections::HashMap;
use std::rc::Rc;

use anyhow::bail;

use crate::actions::Action;
use crate::profiles::Profile;

/// Actions of a profile, addressable by any of their commands.
pub struct ActionRegistry {
    actions: Vec<Rc<Action>>,
    registry: HashMap<String, Rc<Action>>,
}

impl ActionRegistry {
    pub fn new(profile: &Profile) -> anyhow::Result<Self> {
        let mut actions = Vec::with_capacity(profile.actions().len());
        let mut registry = HashMap::new();
        for action_description in profile.actions() {
            let action = Rc::new(Action::try_from(action_description)?);
            for command in action.commands() {
                let command = command.to_lowercase();
                if let Some(previous) = registry.insert(command.clone(), Rc::clone(&action)) {
                    bail!("Command {:?} is bound to both {} and {}", command, previous.id(), action.id());
                }
            }
            actions.push(action);
        }
        log::debug!("{} actions registered from profile {:?}", actions.len(), profile.name());
        Ok(Self {
            actions,
            registry
        })
    }

    pub fn lookup(&self, command: &str) -> Option<&Rc<Action>> {
        self.registry.get(command.trim().to_lowercase().as_str())
    }

    /// Actions in profile order.
    pub fn actions(&self) -> &[Rc<Action>] {
        &self.actions[..]
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use trim_margin::MarginTrimmable;
    use yaml_rust2::YamlLoader;

    use crate::actions::ActionRegistry;
    use crate::profiles::{profile_for, Profile, DEFAULT_PROFILE_NAME};

    fn profile(s: &str) -> Profile {
        let docs = YamlLoader::load_from_str(s.trim_margin().unwrap().as_str()).unwrap();
        Profile::from(&docs[0])
    }

    #[test]
    fn test_default_profile() {
        let registry = ActionRegistry::new(&profile_for(DEFAULT_PROFILE_NAME)).unwrap();
        assert_that!(registry.lookup("n").map(|a| a.id())).is_some().is_equal_to("next_alive_host");
        assert_that!(registry.lookup(" PREV-INFO ").map(|a| a.id())).is_some().is_equal_to("prev_host_with_info");
        assert_that!(registry.lookup("nope").is_none()).is_true();
        assert_that!(registry.actions().first().map(|a| a.id())).is_some().is_equal_to("next_alive_host");
    }

    #[test]
    fn test_duplicate_command() {
        let p = profile("
            |profile:
            |  name: broken
            |  actions:
            |    - id: find
            |      commands: [f]
            |    - id: find_next
            |      commands: [F]
            ");
        assert_that!(ActionRegistry::new(&p).is_err()).is_true();
    }

    #[test]
    fn test_unknown_action() {
        let p = profile("
            |profile:
            |  name: broken
            |  actions:
            |    - id: reboot
            |      commands: [r]
            ");
        assert_that!(ActionRegistry::new(&p).is_err()).is_true();
    }
}
