use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phf::phf_map;
use thiserror::Error;

/// Classification of a scanned host. Assigned once, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    Unknown,
    Dead,
    Alive,
    WithPorts,
}

impl ResultType {
    pub fn matches(&self, other: ResultType) -> bool {
        *self == other
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResultType::Unknown => "unknown",
            ResultType::Dead => "dead",
            ResultType::Alive => "alive",
            ResultType::WithPorts => "with_ports",
        }
    }
}

impl Display for ResultType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const NAMES: phf::Map<&'static str, ResultType> = phf_map! {
    "unknown" => ResultType::Unknown,
    "dead" => ResultType::Dead,
    "alive" => ResultType::Alive,
    "with_ports" => ResultType::WithPorts,
    "with-ports" => ResultType::WithPorts,
    "ports" => ResultType::WithPorts,
    "info" => ResultType::WithPorts,
};

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown result type: {0:?}")]
pub struct ParseResultTypeError(String);

impl FromStr for ResultType {
    type Err = ParseResultTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES.get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseResultTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;
    use spectral::prelude::*;

    use super::ResultType;

    macro_rules! test_parse {
        ($name: ident, $input: expr => $expected: expr) => {
            paste! {
                #[test]
                fn [< test_parse_ $name >]() {
                    let result = $input.parse::<ResultType>();
                    assert_that!(result).is_ok_containing($expected);
                }
            }
        };
    }

    test_parse!(alive, "alive" => ResultType::Alive);
    test_parse!(upper_case, "DEAD" => ResultType::Dead);
    test_parse!(padded, " unknown " => ResultType::Unknown);
    test_parse!(with_ports, "with_ports" => ResultType::WithPorts);
    test_parse!(info_alias, "Info" => ResultType::WithPorts);

    #[test]
    fn test_parse_garbage() {
        assert_that!("responsive".parse::<ResultType>()).is_err();
    }

    #[test]
    fn test_matches_is_exact() {
        assert_that!(ResultType::Alive.matches(ResultType::Alive)).is_true();
        assert_that!(ResultType::Alive.matches(ResultType::WithPorts)).is_false();
        assert_that!(ResultType::Dead.matches(ResultType::Unknown)).is_false();
    }

    #[test]
    fn test_display_round_trips_through_name() {
        let parsed = ResultType::WithPorts.to_string().parse::<ResultType>();
        assert_that!(parsed).is_ok_containing(ResultType::WithPorts);
    }
}
