//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `3000` |
//! | `TASKS_DATA_PATH` | `tasks.json` |
//! | `TASKS_LOG_JSON` | `false` |
//!
//! Values that cannot be parsed fall back to their defaults and are
//! reported through [`ServerConfig::issues`] so that the binary can log them
//! once tracing is installed.

use camino::Utf8PathBuf;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable holding the listening port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the JSON store path.
pub const DATA_PATH_VAR: &str = "TASKS_DATA_PATH";
/// Environment variable toggling JSON log output.
pub const LOG_JSON_VAR: &str = "TASKS_LOG_JSON";

/// Runtime settings for the task server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP listener binds on all interfaces.
    pub port: u16,
    /// Location of the JSON task file.
    pub data_path: Utf8PathBuf,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    issues: Vec<ConfigIssue>,
}

/// An environment value that was ignored because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Variable name.
    pub variable: &'static str,
    /// Rejected raw value.
    pub value: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignoring invalid {}={:?}, using default",
            self.variable, self.value
        )
    }
}

impl ServerConfig {
    /// Default listening port.
    pub const DEFAULT_PORT: u16 = 3000;
    /// Default JSON store path.
    pub const DEFAULT_DATA_PATH: &'static str = "tasks.json";

    /// Loads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut issues = Vec::new();

        let port = parse_or_default(&lookup, PORT_VAR, Self::DEFAULT_PORT, &mut issues, |raw| {
            raw.parse::<u16>().ok()
        });
        let log_json = parse_or_default(&lookup, LOG_JSON_VAR, false, &mut issues, parse_flag);
        let data_path = lookup(DATA_PATH_VAR)
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| Utf8PathBuf::from(Self::DEFAULT_DATA_PATH), Utf8PathBuf::from);

        Self {
            port,
            data_path,
            log_json,
            issues,
        }
    }

    /// Returns the socket address the server binds.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }

    /// Returns the environment values that were ignored during loading.
    #[must_use]
    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: T,
    issues: &mut Vec<ConfigIssue>,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(variable) else {
        return default;
    };
    if let Some(value) = parse(raw.trim()) {
        return value;
    }
    issues.push(ConfigIssue {
        variable,
        value: raw,
    });
    default
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigIssue, ServerConfig};
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path.as_str(), "tasks.json");
        assert!(!config.log_json);
        assert!(config.issues().is_empty());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:3000");
    }

    #[rstest]
    fn explicit_values_are_used() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("TASKS_DATA_PATH", "/var/lib/tasks/data.json"),
            ("TASKS_LOG_JSON", "true"),
        ]));

        assert_eq!(config.port, 8081);
        assert_eq!(config.data_path.as_str(), "/var/lib/tasks/data.json");
        assert!(config.log_json);
    }

    #[rstest]
    #[case("not-a-port")]
    #[case("70000")]
    #[case("-1")]
    fn invalid_port_falls_back_and_is_reported(#[case] raw: &str) {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)]));

        assert_eq!(config.port, ServerConfig::DEFAULT_PORT);
        assert_eq!(
            config.issues(),
            [ConfigIssue {
                variable: "PORT",
                value: raw.to_owned(),
            }]
        );
    }

    #[rstest]
    #[case("YES", true)]
    #[case("off", false)]
    #[case("1", true)]
    fn log_flag_accepts_common_spellings(#[case] raw: &str, #[case] expected: bool) {
        let config = ServerConfig::from_lookup(lookup_from(&[("TASKS_LOG_JSON", raw)]));
        assert_eq!(config.log_json, expected);
    }

    #[rstest]
    fn blank_data_path_uses_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("TASKS_DATA_PATH", "   ")]));
        assert_eq!(config.data_path.as_str(), ServerConfig::DEFAULT_DATA_PATH);
    }
}
