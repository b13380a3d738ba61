// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading client configs or writing the site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid client config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("cannot serialize structured data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate client id '{0}'")]
    DuplicateClient(String),

    #[error("client config has an empty id")]
    EmptyClientId,

    /// Ids name output directories, so only `[a-z0-9-]` is allowed.
    #[error("invalid client id '{0}': use lowercase letters, digits and '-'")]
    InvalidClientId(String),

    /// Weekday value that is neither a closed marker nor `<H>h<MM> - <H>h<MM>`.
    #[error("client '{client}': malformed opening hours for {day}: '{value}'")]
    MalformedHours {
        client: String,
        day: &'static str,
        value: String,
    },
}

impl Error {
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse<P: AsRef<Path>>(path: P, source: serde_yaml_ng::Error) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
