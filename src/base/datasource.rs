use crate::base;

/// The input files a dashboard reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Source {
    Operations,
    Users,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: '{}'", path.display())]
    FileNotFound { path: std::path::PathBuf },
    #[error("failed to read '{}'", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("malformed csv in '{}'", path.display())]
    Csv {
        path: std::path::PathBuf,
        source: csv::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::FileNotFound { path } => path,
            LoadError::Io { path, .. } => path,
            LoadError::Csv { path, .. } => path,
        }
    }
}

/// Reads the CSV file at `path`. The first line is the header.
pub fn load(path: &std::path::Path) -> Result<base::Table, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    base::Table::from_csv(std::io::BufReader::new(file)).map_err(|e| LoadError::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Degrades a failed load to an empty table, handing the error back so
/// callers can keep going and show it to the user.
pub fn or_empty(res: Result<base::Table, LoadError>) -> (base::Table, Option<LoadError>) {
    match res {
        Ok(table) => (table, None),
        Err(e) => {
            tracing::info!(path = %e.path().display(), error = %e, "using an empty table");
            (base::Table::default(), Some(e))
        }
    }
}
