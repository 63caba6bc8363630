//! Settings read from the configuration file
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// The name of the configuration file within the application directory
pub const CONFIG_FILE: &str = "config.yaml";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Engine configuration.
///
/// Every field is optional in the file; missing fields keep their defaults.
///
/// ```
/// use caffeine::config::Config;
///
/// let config = Config::from_yaml("depth: 8\nlog_level: debug\n").unwrap();
/// assert_eq!(config.depth, 8);
/// assert_eq!(config.log_level, "debug");
/// assert_eq!(config.log_file, Config::default().log_file);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Depth for the `search` command, in plies
    pub depth: usize,
    /// File written when logging is turned on
    pub log_file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: 6,
            log_file: PathBuf::from("caffeine.log"),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Returns the directory holding the configuration file, `~/.caffeine`.
    pub fn app_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| { home.join(".caffeine") })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml(s: &str) -> Result<Config, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Formats the configuration as YAML text.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reads the configuration at `path`.
    pub fn read(path: &Path) -> Result<Config, Error> {
        let s = read_to_string(path).map_err(|err| Error::Io(path.to_owned(), err))?;
        Config::from_yaml(&s)
    }

    /// Reads the configuration at `path` if one is given, otherwise the one in the application
    /// directory. Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Config, Error> {
        match path {
            Some(path) => Config::read(path),
            None => {
                let path = Config::app_dir().join(CONFIG_FILE);
                if path.is_file() {
                    Config::read(&path)
                } else {
                    Ok(Config::default())
                }
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error reading the configuration
#[derive(Debug)]
pub enum Error {
    /// The file could not be read
    Io(PathBuf, io::Error),
    /// The contents are not a valid configuration
    Yaml(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(path, err) => write!(f, "{}: {}", path.display(), err),
            Error::Yaml(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for Error { }

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_yaml("{}").expect("valid yaml"), Config::default());
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config {
            depth: 3,
            log_file: PathBuf::from("/tmp/search.log"),
            log_level: "trace".to_owned(),
        };
        let text = config.to_yaml().expect("serializable");
        assert_eq!(Config::from_yaml(&text).expect("valid yaml"), config);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Config::from_yaml("depth: deep").is_err());
        assert!(Config::from_yaml("colour: blue").is_err());
    }

    #[test]
    fn missing_file_is_an_error_only_when_named() {
        let path = Path::new("/nonexistent/caffeine/config.yaml");
        match Config::load(Some(path)) {
            Err(Error::Io(p, _)) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
