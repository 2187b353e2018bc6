use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown theme {0:?}; expected \"dark\" or \"light\"")]
    UnknownTheme(String),

    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("read preferences {}", path.display())]
    ReadStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write preferences {}", path.display())]
    WriteStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse preferences {}", path.display())]
    ParseStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse theme config")]
    ParseConfig(#[source] serde_json::Error),

    #[error("document has no <body>")]
    MissingBody,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
