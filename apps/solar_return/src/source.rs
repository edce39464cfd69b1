//! Where charts come from.
//!
//! A fetch either yields a validated [`Chart`] or a [`FetchError`]. There is
//! no placeholder chart: substituting data is the caller's decision.

use apollo::{Chart, ChartError};
use async_trait::async_trait;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Natal,
    SolarReturn { year: i32 },
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Natal => f.write_str("natal"),
            ChartKind::SolarReturn { year } => write!(f, "solar return {}", year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub user: String,
    pub kind: ChartKind,
}

impl ChartRequest {
    pub fn natal(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            kind: ChartKind::Natal,
        }
    }

    pub fn solar_return(user: impl Into<String>, year: i32) -> Self {
        Self {
            user: user.into(),
            kind: ChartKind::SolarReturn { year },
        }
    }
}

/// A user id is used as one directory name under a storage root, so it
/// must be a single plain path component.
pub fn is_valid_user_id(user: &str) -> bool {
    if user.is_empty() || user.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(user).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid user id {user:?}")]
    InvalidUser { user: String },
    #[error("No {kind} chart for user {user}")]
    NotFound { user: String, kind: ChartKind },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Chart payload for user {user} is unusable: {source}")]
    Invalid {
        user: String,
        #[source]
        source: ChartError,
    },
}

#[async_trait]
pub trait ChartSource: Send + Sync {
    async fn fetch(&self, request: &ChartRequest) -> Result<Chart, FetchError>;
}

/// Charts stored as ephemeris payloads on disk:
/// `<root>/<user>/natal.json` and `<root>/<user>/solar_return_<year>.json`.
pub struct FileChartSource {
    root: PathBuf,
}

impl FileChartSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, request: &ChartRequest) -> Result<PathBuf, FetchError> {
        if !is_valid_user_id(&request.user) {
            return Err(FetchError::InvalidUser {
                user: request.user.clone(),
            });
        }
        let file = match request.kind {
            ChartKind::Natal => "natal.json".to_string(),
            ChartKind::SolarReturn { year } => format!("solar_return_{}.json", year),
        };
        Ok(self.root.join(&request.user).join(file))
    }
}

#[async_trait]
impl ChartSource for FileChartSource {
    async fn fetch(&self, request: &ChartRequest) -> Result<Chart, FetchError> {
        let path = self.path_for(request)?;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound {
                    user: request.user.clone(),
                    kind: request.kind,
                })
            }
            Err(e) => {
                return Err(FetchError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        log::debug!("read {} chart from {}", request.kind, path.display());
        Chart::from_json(&text).map_err(|source| FetchError::Invalid {
            user: request.user.clone(),
            source,
        })
    }
}
