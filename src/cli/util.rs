use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Width available to charts, or 0 if stdout is not a terminal.
#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Width available to charts. Fixed for tests, which may run in a terminal.
#[cfg(test)]
pub fn term_width() -> usize {
    0
}

/// User-facing text for a source that could not be loaded, including causes.
pub fn notice(e: base::LoadError) -> String {
    format!("{:#}", anyhow::Error::new(e))
}

pub fn log_notices(notices: &[String]) {
    for n in notices {
        tracing::warn!("{}", n);
    }
}

/// Formats an error and its causes as `error: outer: inner`.
pub fn error_chain(e: &anyhow::Error) -> String {
    let mut s = String::from("error");
    e.chain().for_each(|cause| {
        s.push_str(": ");
        s.push_str(&cause.to_string());
    });
    s
}

/// Converts command line values into a filter allow-set.
pub fn selection_set(values: &[String]) -> std::collections::BTreeSet<base::Value> {
    values
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| base::Value::from(s.as_str()))
        .collect()
}

/// Distinct values of `column` matching any of the wildcard `patterns`,
/// sorted. Empty cells are skipped.
pub fn distinct_values<T>(
    table: &base::Table,
    column: &str,
    patterns: &[T],
) -> Result<Vec<String>, base::TableError>
where
    T: AsRef<str>,
{
    let patterns = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let mut values = table
        .column(column)?
        .filter(|v| !v.is_null())
        .map(ToString::to_string)
        .filter(|v| patterns.iter().any(|p| p.matches(v)))
        .collect::<Vec<_>>();
    values.sort();
    values.dedup();
    Ok(values)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("nothing to escape at end of line")]
    TrailingEscape,
}

/// Splits an interactive input line into arguments. Whitespace separates
/// arguments unless it is inside double quotes. A backslash takes the next
/// character literally, quotes and backslashes included.
pub fn split_args(line: &str) -> Result<Vec<String>, ArgsError> {
    let mut args = Vec::new();
    let mut cur = String::new();
    let mut quoted = false;
    let mut pending = false;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                cur.push(chars.next().ok_or(ArgsError::TrailingEscape)?);
                pending = true;
            }
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut cur));
                    pending = false;
                }
            }
            c => {
                cur.push(c);
                pending = true;
            }
        }
    }
    if quoted {
        return Err(ArgsError::UnterminatedQuote);
    }
    if pending {
        args.push(cur);
    }
    Ok(args)
}
