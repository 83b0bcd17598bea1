use anyhow::Context;

use crate::base;
use crate::cli;

/// Everything a page needs besides its own filter selection: where the files
/// are, how to draw, and tables loaded by earlier pages of the same session.
pub struct Session<'a> {
    fs: &'a base::Fs,
    config: base::Config,
    cache: base::LoadCache,
    term_width: usize,
}

/// The joined operations and users tables, plus messages about sources that
/// could not be read.
pub struct Loaded {
    pub table: base::Table,
    pub notices: Vec<String>,
}

impl<'a> Session<'a> {
    pub fn open(fs: &'a base::Fs) -> anyhow::Result<Self> {
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        Ok(Self {
            fs,
            config,
            cache: base::LoadCache::new(),
            term_width: cli::util::term_width(),
        })
    }

    pub fn charset(&self) -> base::Charset {
        cli::util::charset_from_config(&self.config)
    }

    pub fn term_width(&self) -> usize {
        self.term_width
    }

    #[cfg(test)]
    pub fn cache(&self) -> &base::LoadCache {
        &self.cache
    }

    /// Loads both sources and joins users onto operations. Unreadable sources
    /// become empty tables and a notice; a failing join is an error.
    pub fn load(&mut self) -> anyhow::Result<Loaded> {
        let mut notices = Vec::new();
        let mut load = |source: base::Source, file: &str| {
            let path = self.fs.resolve(file);
            let (table, err) = self.cache.load_or_empty(source, &path);
            notices.extend(err.map(cli::util::notice));
            table
        };
        let operations = load(base::Source::Operations, &self.config.operations_file);
        let users = load(base::Source::Users, &self.config.users_file);

        let table = base::pipeline::prepare(
            operations,
            &users,
            &self.config.left_key,
            &self.config.right_key,
        )
        .map_err(|e| {
            cli::util::log_notices(&notices);
            e
        })
        .context("failed to join users onto operations")?;
        Ok(Loaded { table, notices })
    }
}

impl Loaded {
    /// Builds a page's sections from the joined table and wraps them together
    /// with the load notices. On error the notices are logged instead, since
    /// the page will not be shown.
    pub fn render<F>(self, what: &str, build: F) -> anyhow::Result<cli::Output>
    where
        F: FnOnce(base::Table) -> Result<Vec<cli::Output>, base::TableError>,
    {
        match build(self.table) {
            Ok(sections) => Ok(cli::Output::Page {
                notices: self.notices,
                sections,
            }),
            Err(e) => {
                cli::util::log_notices(&self.notices);
                Err(anyhow::Error::new(e).context(format!("failed to build {}", what)))
            }
        }
    }
}
