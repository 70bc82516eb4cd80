//! Common-password blacklist and the validator that applies it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::StrengthValidator;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Set of common passwords, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads the blacklist from [`get_blacklist_path`].
    pub fn load() -> Result<Self, BlacklistError> {
        Self::from_path(get_blacklist_path())
    }

    /// Loads one password per line. Blank lines are skipped.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist not found: {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist: Blacklist = content.lines().collect();

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist is empty: {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}

impl<'a> FromIterator<&'a str> for Blacklist {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}

/// Scores blacklisted passwords 0, everything else with the inner validator.
#[derive(Debug, Clone)]
pub struct BlacklistValidator<V> {
    blacklist: Blacklist,
    inner: V,
}

impl<V: StrengthValidator> BlacklistValidator<V> {
    pub fn new(blacklist: Blacklist, inner: V) -> Self {
        Self { blacklist, inner }
    }
}

impl<V: StrengthValidator> StrengthValidator for BlacklistValidator<V> {
    fn score(&self, password: &SecretString) -> usize {
        if self.blacklist.contains(password.expose_secret()) {
            return 0;
        }
        self.inner.score(password)
    }
}
