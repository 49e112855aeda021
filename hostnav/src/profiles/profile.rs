use std::collections::HashMap;

use itertools::Itertools;
use yaml_rust2::Yaml;

use crate::profiles::action_description::ActionDescription;

/// Named set of action descriptions with their console commands.
#[derive(Clone, Debug)]
pub struct Profile {
    name: String,
    actions: Vec<ActionDescription>
}

impl From<&Yaml> for Profile {

    /// Sample YAML fragment:
    /// ```yaml
    /// profile:
    ///   name: default
    ///   actions:
    ///     - id: next_alive_host
    ///       description: Go to next alive host
    ///       commands: [n, next-alive]
    /// ```
    fn from(value: &Yaml) -> Self {
        let profile = &value["profile"];
        let name = profile["name"].as_str().unwrap_or(super::DEFAULT_PROFILE_NAME).to_string();
        let actions: Vec<ActionDescription> = profile["actions"]
            .as_vec()
            .map(|arr| arr.iter().filter_map(ActionDescription::from_yaml).collect())
            .unwrap_or_default();
        Self {
            name,
            actions,
        }
    }
}

impl Profile {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn actions(&self) -> &[ActionDescription] {
        &self.actions[..]
    }

    pub fn lookup(&self, id: &str) -> Option<&ActionDescription> {
        self.actions.iter().find(|ad| ad.id() == id)
    }

    /// Overrides actions of `self` with same-id actions of `rhs`. Actions only present in `rhs`
    /// are ignored.
    pub fn combine(&self, rhs: &Profile) -> Profile {
        let right_actions: HashMap<&str, &ActionDescription> = rhs.actions.iter()
            .map(|ad| (ad.id(), ad))
            .collect();

        let actions = self.actions.iter()
            .map(|x| match right_actions.get(x.id()) {
                None => x.clone(),
                Some(y) => x.combine(y),
            })
            .collect_vec();
        Self {
            name: rhs.name.clone(),
            actions
        }
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use trim_margin::MarginTrimmable;
    use yaml_rust2::YamlLoader;

    use crate::profiles::ActionDescription;

    use super::Profile;

    #[test]
    fn test_parsing() {
        let s = "
            |profile:
            |  name: Test Profile
            |  actions:
            |    - id: next_alive_host
            |      description: Next alive
            |      commands: [n]
            |    - id: quit
            |      commands: [q]
            |    - description: no id, skipped
            ".trim_margin().unwrap();
        let docs = YamlLoader::load_from_str(s.as_str()).unwrap();
        let actual = Profile::from(&docs[0]);
        assert_that!(actual.name()).is_equal_to("Test Profile");
        assert_that!(actual.actions().to_vec()).has_length(2);
        assert_that!(actual.lookup("quit")).is_some();
        assert_that!(actual.lookup("find")).is_none();
    }

    #[test]
    fn test_combine() {
        let base = Profile {
            name: "base".to_string(),
            actions: vec![
                ActionDescription::new("find", Some("Find text"), vec!["f"]),
                ActionDescription::new("quit", Some("Quit"), vec!["q"]),
            ]
        };
        let specific = Profile {
            name: "specific".to_string(),
            actions: vec![
                ActionDescription::new("find", Some("Search"), vec!["/"]),
                ActionDescription::new("unknown", Some("Ignored"), vec!["u"]),
            ]
        };
        let composition = base.combine(&specific);

        let expected: [ActionDescription; 2] = [
            ActionDescription::new("find", Some("Search"), vec!["/"]),
            ActionDescription::new("quit", Some("Quit"), vec!["q"]),
        ];

        assert_that!(composition.name()).is_equal_to("specific");
        assert_that!(composition.actions()).is_equal_to(&expected[..]);
    }
}
