use crate::base;

/// The expected or actual contents of a dashboard directory. Unset fields
/// correspond to nonexistent files. Data files are kept as raw text since
/// commands never rewrite them.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    operations: Option<String>,
    users: Option<String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dashboard's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    pub fn with_operations(mut self, s: &str) -> Self {
        self.operations = Some(s.to_string());
        self
    }

    pub fn with_users(mut self, s: &str) -> Self {
        self.users = Some(s.to_string());
        self
    }

    /// Reads the config and the default data files from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let read = |p: std::path::PathBuf| match p.exists() {
            true => Some(std::fs::read_to_string(p).unwrap()),
            false => None,
        };
        let config = match fs.path::<base::Config>().exists() {
            true => Some(fs.read::<base::Config>().unwrap()),
            false => None,
        };
        let defaults = base::Config::default();
        Self {
            config,
            operations: read(fs.resolve(&defaults.operations_file)),
            users: read(fs.resolve(&defaults.users_file)),
        }
    }
}

/// Representation of a dashboard directory's file contents. Unset fields
/// correspond to nonexistent files. Data files use the default names.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    operations: Option<&'a str>,
    users: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dashboard's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the operations file contents. Written verbatim, so malformed
    /// files can be set up too.
    pub fn with_operations(mut self, s: &'a str) -> Self {
        self.operations = Some(s);
        self
    }

    /// Sets the users file contents. Written verbatim.
    pub fn with_users(mut self, s: &'a str) -> Self {
        self.users = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        let defaults = base::Config::default();
        if let Some(s) = self.operations {
            std::fs::write(fs.resolve(&defaults.operations_file), s).unwrap()
        }
        if let Some(s) = self.users {
            std::fs::write(fs.resolve(&defaults.users_file), s).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.operations {
            os = os.with_operations(s);
        }
        if let Some(s) = self.users {
            os = os.with_users(s);
        }
        os
    }
}
