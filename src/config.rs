use std::ffi::OsString;
use std::fmt;

pub const CONNECTION_URI_KEY: &str = "CONNECTION_URI";
pub const DATABASE_NAME_KEY: &str = "DATABASE_NAME";
pub const DEFAULT_DATABASE_NAME: &str = "real_estate_db";

/// Values the probe runs with, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    raw_connection_uri: Option<String>,
    pub database_name: String,
}

impl ProbeConfig {
    pub fn new(connection_uri: Option<String>, database_name: Option<String>) -> Self {
        Self {
            raw_connection_uri: connection_uri,
            database_name: database_name.unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|raw| env_value(key, raw)))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(CONNECTION_URI_KEY), lookup(DATABASE_NAME_KEY))
    }

    /// Connection string, or `None` when unset or empty.
    pub fn connection_uri(&self) -> Option<&str> {
        self.raw_connection_uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
    }
}

impl fmt::Display for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_connection_uri {
            Some(uri) => writeln!(f, "{} = {:?}", CONNECTION_URI_KEY, uri)?,
            None => writeln!(f, "{} = <unset>", CONNECTION_URI_KEY)?,
        }
        write!(f, "{} = {:?}", DATABASE_NAME_KEY, self.database_name)
    }
}

// A set but non-UTF-8 value still counts as present.
fn env_value(key: &str, raw: OsString) -> String {
    match raw.into_string() {
        Ok(value) => value,
        Err(raw) => {
            tracing::warn!("{} is not valid UTF-8, using a lossy conversion", key);
            raw.to_string_lossy().into_owned()
        }
    }
}

/// Load `.env` from the working directory into the process environment.
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => tracing::debug!("No .env file found, using process environment"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_database_name() {
        let config = ProbeConfig::from_lookup(lookup_from(&[
            ("CONNECTION_URI", "mongodb://localhost:27017"),
        ]));
        assert_eq!(config.database_name, "real_estate_db");
        assert_eq!(config.connection_uri(), Some("mongodb://localhost:27017"));
    }

    #[test]
    fn test_explicit_database_name() {
        let config = ProbeConfig::from_lookup(lookup_from(&[
            ("CONNECTION_URI", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "listings"),
        ]));
        assert_eq!(config.database_name, "listings");
    }

    #[test]
    fn test_missing_and_empty_uri() {
        let unset = ProbeConfig::from_lookup(lookup_from(&[]));
        assert_eq!(unset.connection_uri(), None);

        let empty = ProbeConfig::from_lookup(lookup_from(&[("CONNECTION_URI", "")]));
        assert_eq!(empty.connection_uri(), None);
    }

    #[test]
    fn test_whitespace_uri_is_kept() {
        let config = ProbeConfig::new(Some("  ".to_string()), None);
        assert_eq!(config.connection_uri(), Some("  "));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_still_present() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"mongodb://db\xff:27017".to_vec());
        let value = env_value(CONNECTION_URI_KEY, raw);
        assert_eq!(value, "mongodb://db\u{FFFD}:27017");

        let config = ProbeConfig::from_lookup(|key| {
            (key == CONNECTION_URI_KEY).then(|| value.clone())
        });
        assert!(config.connection_uri().is_some());
        assert!(!config.to_string().contains("<unset>"));
    }

    #[test]
    fn test_utf8_value_passes_through() {
        let value = env_value(DATABASE_NAME_KEY, OsString::from("listings"));
        assert_eq!(value, "listings");
    }

    #[test]
    fn test_display_echoes_values() {
        let config = ProbeConfig::new(Some("mongodb://db:27017".to_string()), None);
        assert_eq!(
            config.to_string(),
            "CONNECTION_URI = \"mongodb://db:27017\"\nDATABASE_NAME = \"real_estate_db\""
        );

        let unset = ProbeConfig::new(None, Some("x".to_string()));
        assert_eq!(unset.to_string(), "CONNECTION_URI = <unset>\nDATABASE_NAME = \"x\"");
    }
}
