use serde_derive::Deserialize;
use std::io::Read;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::*;
use url::Url;

pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_url")]
    pub url: Url,
    /// Only this many tasks are kept from the initial listing.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_url() -> Url {
    Url::parse(DEFAULT_REMOTE_URL).expect("default remote url is valid")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    pub log: Option<crate::log::Log>,
}

impl Config {
    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }
}
