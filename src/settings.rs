// Connection settings: the single record every remote endpoint is built from.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_SSH_PORT: &str = "22";

/// Remote host, user and SSH port as persisted in the JSON config file.
///
/// The port is kept as a string and handed to the transfer tool untouched;
/// it is never parsed or range-checked here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub remote_ip: String,
    pub remote_user: String,
    pub ssh_port: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            remote_ip: String::new(),
            remote_user: String::new(),
            ssh_port: DEFAULT_SSH_PORT.to_string(),
        }
    }
}

impl Settings {
    /// Succeeds iff both the remote IP and the remote user are set.
    pub fn validate(&self) -> Result<()> {
        if self.remote_ip.is_empty() || self.remote_user.is_empty() {
            return Err(Error::MissingSettings);
        }
        Ok(())
    }

    /// `user@ip:path`. Paths containing `:` or `@` are passed through as-is.
    pub fn remote_endpoint(&self, path: &str) -> String {
        format!("{}@{}:{}", self.remote_user, self.remote_ip, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Settings {
        Settings {
            remote_ip: "10.0.0.5".into(),
            remote_user: "alice".into(),
            ssh_port: "2222".into(),
        }
    }

    #[test]
    fn default_has_ssh_port_22() {
        let s = Settings::default();
        assert_eq!(s.remote_ip, "");
        assert_eq!(s.remote_user, "");
        assert_eq!(s.ssh_port, "22");
    }

    #[test]
    fn validate_requires_ip_and_user() {
        assert!(configured().validate().is_ok());

        let mut s = configured();
        s.remote_ip.clear();
        assert!(matches!(s.validate(), Err(Error::MissingSettings)));

        let mut s = configured();
        s.remote_user.clear();
        assert!(matches!(s.validate(), Err(Error::MissingSettings)));

        assert!(Settings::default().validate().is_err());
    }

    #[test]
    fn validate_ignores_port_content() {
        let mut s = configured();
        s.ssh_port = String::new();
        assert!(s.validate().is_ok());
        s.ssh_port = "not-a-port".into();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn remote_endpoint_joins_user_ip_and_path() {
        assert_eq!(configured().remote_endpoint("/srv/data"), "alice@10.0.0.5:/srv/data");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let s: Settings = serde_json::from_str(r#"{"remote_ip": "h"}"#).unwrap();
        assert_eq!(s.remote_ip, "h");
        assert_eq!(s.remote_user, "");
        assert_eq!(s.ssh_port, "22");
    }
}
