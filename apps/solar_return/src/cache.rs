//! Interpretation cache contract and a directory-backed store.
//!
//! Entries are keyed by user, chart type and year. Nothing is evicted;
//! a regenerated report simply overwrites the previous one.

use crate::source::is_valid_user_id;
use apollo::SrComparison;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub user: String,
    pub chart_type: String,
    pub year: i32,
}

impl CacheKey {
    pub fn solar_return(user: impl Into<String>, year: i32) -> Self {
        Self {
            user: user.into(),
            chart_type: "solar_return".to_string(),
            year,
        }
    }
}

/// What gets cached for one Solar Return: the comparison and its fact lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedReport {
    pub user: String,
    pub year: i32,
    pub generated_at: DateTime<Utc>,
    pub comparison: SrComparison,
    pub facts: Vec<String>,
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Invalid cache key for user {user:?}")]
    InvalidKey { user: String },
    #[error("Cache I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cache entry {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait InterpretationCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedReport>, CacheError>;
    async fn put(&self, key: &CacheKey, report: &CachedReport) -> Result<(), CacheError>;
}

/// One JSON document per key: `<root>/<user>/<chart_type>_<year>.json`.
pub struct DirCache {
    root: PathBuf,
}

impl DirCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &CacheKey) -> Result<PathBuf, CacheError> {
        if !is_valid_user_id(&key.user) {
            return Err(CacheError::InvalidKey {
                user: key.user.clone(),
            });
        }
        Ok(self
            .root
            .join(&key.user)
            .join(format!("{}_{}.json", key.chart_type, key.year)))
    }
}

#[async_trait]
impl InterpretationCache for DirCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedReport>, CacheError> {
        let path = self.path_for(key)?;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| CacheError::Corrupt {
                path: path.display().to_string(),
                source,
            })
    }

    async fn put(&self, key: &CacheKey, report: &CachedReport) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        let io_err = |source| CacheError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(report).map_err(|source| CacheError::Corrupt {
            path: path.display().to_string(),
            source,
        })?;
        // Readers only ever see a complete document
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io_err)?;
        log::debug!("cached {} report at {}", key.chart_type, path.display());
        Ok(())
    }
}
