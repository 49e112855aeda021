use yaml_rust2::Yaml;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDescription {
    id: String,
    description: Option<String>,
    commands: Vec<String>,
}

impl ActionDescription {
    pub fn new(
        id: impl ToString,
        description: Option<impl ToString>,
        commands: Vec<impl ToString>
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.map(|t| t.to_string()),
            commands: commands.into_iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Sample YAML fragment:
    /// ```yaml
    /// id: find
    /// description: Find all hosts containing text
    /// commands: [f, find]
    /// ```
    /// Entries without `id` are skipped. Non-string commands (e.g. numbers) are taken verbatim.
    pub fn from_yaml(value: &Yaml) -> Option<Self> {
        let Some(id) = value["id"].as_str() else {
            log::warn!("Action without id is ignored: {:?}", value);
            return None;
        };
        let description = value["description"].as_str().map(String::from);
        let commands = value["commands"].as_vec()
            .map(|c| c.iter().filter_map(command_to_string).collect())
            .unwrap_or_default();
        Some(ActionDescription {
            id: id.to_string(),
            description,
            commands,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn commands(&self) -> &[String] {
        &self.commands[..]
    }

    pub fn combine(&self, rhs: &ActionDescription) -> ActionDescription {
        debug_assert_eq!(self.id(), rhs.id());
        let commands = if rhs.commands.is_empty() {
            self.commands.clone()
        } else {
            rhs.commands.clone()
        };
        ActionDescription {
            id: self.id.clone(),
            description: rhs.description().or(self.description()).map(String::from),
            commands
        }
    }
}

fn command_to_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Real(r) => Some(r.clone()),
        _ => None,
    }
}
