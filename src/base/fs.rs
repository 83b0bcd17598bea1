use crate::base;

/// Working directory of a dashboard.
#[derive(Debug)]
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".opsdash.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// True if the directory holds a config file.
    pub fn is_initialized(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Resolves a data file named in the config. Absolute paths are kept.
    pub fn resolve(&self, file: &str) -> std::path::PathBuf {
        self.dir.join(file)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}
