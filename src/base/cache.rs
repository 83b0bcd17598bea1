use crate::base;

/// Tables loaded earlier in a session, keyed by source and path. An entry is
/// served only while the file's modification time is the one recorded when it
/// was read. Failed loads are never cached.
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: std::collections::HashMap<(base::Source, std::path::PathBuf), Entry>,
    hits: usize,
}

#[derive(Debug)]
struct Entry {
    modified: std::time::SystemTime,
    table: base::Table,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loads answered without reading the file.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn load(
        &mut self,
        source: base::Source,
        path: &std::path::Path,
    ) -> Result<base::Table, base::LoadError> {
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();
        let key = (source, path.to_path_buf());
        if let (Some(modified), Some(entry)) = (modified, self.entries.get(&key)) {
            if entry.modified == modified {
                tracing::debug!(%source, path = %path.display(), "cache hit");
                self.hits += 1;
                return Ok(entry.table.clone());
            }
        }

        tracing::debug!(%source, path = %path.display(), "cache miss");
        let res = base::datasource::load(path);
        match (&res, modified) {
            (Ok(table), Some(modified)) => {
                let entry = Entry {
                    modified,
                    table: table.clone(),
                };
                self.entries.insert(key, entry);
            }
            _ => {
                self.entries.remove(&key);
            }
        }
        res
    }

    /// Like [`LoadCache::load`], but a failure yields an empty table together
    /// with the error. See [`base::datasource::or_empty`].
    pub fn load_or_empty(
        &mut self,
        source: base::Source,
        path: &std::path::Path,
    ) -> (base::Table, Option<base::LoadError>) {
        base::datasource::or_empty(self.load(source, path))
    }
}
