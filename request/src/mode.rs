use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Routing hint telling the remote service which latency/cost strategy to use.
///
/// Unknown values are kept verbatim in [`Mode::Other`] and sent as-is.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    #[default]
    Adaptive,
    Turbo,
    Saver,
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Adaptive => "adaptive",
            Mode::Turbo => "turbo",
            Mode::Saver => "saver",
            Mode::Other(mode) => mode.as_str(),
        }
    }
}

impl From<&str> for Mode {
    fn from(mode: &str) -> Self {
        match mode {
            "adaptive" => Mode::Adaptive,
            "turbo" => Mode::Turbo,
            "saver" => Mode::Saver,
            other => Mode::Other(other.to_string()),
        }
    }
}

impl From<String> for Mode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "adaptive" | "turbo" | "saver" => Mode::from(mode.as_str()),
            _ => Mode::Other(mode),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Other(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_adaptive() {
        assert_eq!(Mode::default(), Mode::Adaptive);
        assert_eq!(Mode::default().as_str(), "adaptive");
    }

    #[test]
    fn known_modes_parse() {
        assert_eq!(Mode::from("turbo"), Mode::Turbo);
        assert_eq!(Mode::from("saver".to_string()), Mode::Saver);
    }

    #[test]
    fn unknown_mode_is_kept_verbatim() {
        let mode = Mode::from("Experimental-X");
        assert_eq!(mode, Mode::Other("Experimental-X".to_string()));
        assert_eq!(serde_json::to_value(&mode).unwrap(), "Experimental-X");
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Mode::Turbo).unwrap(), r#""turbo""#);
        let mode: Mode = serde_json::from_str(r#""saver""#).unwrap();
        assert_eq!(mode, Mode::Saver);
    }
}
