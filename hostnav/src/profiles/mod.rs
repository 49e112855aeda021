use lazy_static::lazy_static;
use yaml_rust2::YamlLoader;

pub use action_description::ActionDescription;
pub use profile::Profile;

mod action_description;
mod profile;

pub const DEFAULT_PROFILE_NAME: &str = "default";

lazy_static! {
    pub static ref PROFILES: Vec<Profile> = load_builtin_profiles();
    pub static ref OS_PROFILE: Profile = profile_for(std::env::consts::OS);
}

/// Default profile overridden by the profile called `name`, if there is one.
pub fn profile_for(name: &str) -> Profile {
    let default_profile = PROFILES.iter()
        .find(|p| p.name() == DEFAULT_PROFILE_NAME)
        .expect("Built-in default profile is missing");
    match PROFILES.iter().find(|p| p.name() == name) {
        Some(profile) if profile.name() != DEFAULT_PROFILE_NAME => default_profile.combine(profile),
        Some(_) => default_profile.clone(),
        None => {
            log::debug!("No profile {:?}, using {:?}", name, DEFAULT_PROFILE_NAME);
            default_profile.clone()
        }
    }
}

fn load_builtin_profiles() -> Vec<Profile> {
    let profiles_yaml = include_str!("../../assets/profiles.yaml");
    YamlLoader::load_from_str(profiles_yaml)
        .expect("Failed to parse built-in profiles")
        .iter()
        .map(Profile::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::profiles::{profile_for, DEFAULT_PROFILE_NAME, PROFILES};

    #[test]
    fn test_builtin_profiles_are_named() {
        assert_that!(PROFILES.iter().any(|p| p.name() == DEFAULT_PROFILE_NAME)).is_true();
        assert_that!(PROFILES.len()).is_greater_than(1);
    }

    #[test]
    fn test_os_override() {
        let windows = profile_for("windows");
        assert_that!(windows.name()).is_equal_to("windows");
        let quit = windows.lookup("quit").unwrap();
        assert_that!(quit.commands().contains(&"exit".to_string())).is_true();
        assert_that!(quit.description()).contains("Quit");
        assert_that!(windows.actions().len()).is_equal_to(profile_for(DEFAULT_PROFILE_NAME).actions().len());
    }

    #[test]
    fn test_unknown_profile_falls_back_to_default() {
        assert_that!(profile_for("plan9").name()).is_equal_to(DEFAULT_PROFILE_NAME);
    }
}
