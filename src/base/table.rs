use crate::base;

/// A single cell. Values loaded from CSV are either `Null` (empty field) or
/// `Text`; the aggregation stages produce `Int` counts, `Decimal` sums and
/// `Date`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Value {
    #[display("")]
    Null,
    #[display("{_0}")]
    Text(String),
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Decimal(base::Decimal),
    #[display("{_0}")]
    Date(time::Date),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Interprets the value as an integer. `Null` yields `None`; text is
    /// trimmed and parsed. `column` is only used for the error message.
    pub fn as_i64(&self, column: &str) -> Result<Option<i64>, TableError> {
        match self {
            Value::Null => Ok(None),
            Value::Int(n) => Ok(Some(*n)),
            Value::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| TableError::NotNumeric {
                    column: column.to_string(),
                    value: s.clone(),
                }),
            Value::Decimal(_) | Value::Date(_) => Err(TableError::NotNumeric {
                column: column.to_string(),
                value: self.to_string(),
            }),
        }
    }

    /// Interprets the value as a decimal number. `Null` yields `None`; text is
    /// trimmed and parsed. `column` is only used for the error message.
    pub fn as_decimal(&self, column: &str) -> Result<Option<base::Decimal>, TableError> {
        let not_numeric = || TableError::NotNumeric {
            column: column.to_string(),
            value: self.to_string(),
        };
        match self {
            Value::Null => Ok(None),
            Value::Int(n) => Ok(Some(base::Decimal::from_int(*n))),
            Value::Decimal(d) => Ok(Some(*d)),
            Value::Text(s) => s.parse().map(Some).map_err(|_| not_numeric()),
            Value::Date(_) => Err(not_numeric()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<time::Date> for Value {
    fn from(d: time::Date) -> Self {
        Value::Date(d)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("non-numeric value '{value}' in column '{column}'")]
    NotNumeric { column: String, value: String },
    #[error("total of column '{column}' is out of range")]
    Overflow { column: String },
}

/// Rows sharing an ordered column schema. A table produced from a missing file
/// has no columns at all; every other table keeps its schema even with zero
/// rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if the table has no columns, which only happens for tables that
    /// stand in for an unreadable source.
    pub fn is_schemaless(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index_of(&self, column: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::MissingColumn(column.to_string()))
    }

    /// Appends a row. Panics if the row width does not match the schema.
    pub fn push(&mut self, row: Vec<Value>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width should match the number of columns"
        );
        self.rows.push(row);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value>, TableError> {
        let i = self.index_of(name)?;
        Ok(self.rows.iter().map(move |row| &row[i]))
    }

    /// Reads a chart-shaped table as `(label, value)` pairs: the first column
    /// as text and the last as an integer, `Null` counting as zero.
    pub fn pairs(&self) -> Result<Vec<(String, i64)>, TableError> {
        let Some(last) = self.columns.last() else {
            return Ok(Vec::new());
        };
        self.rows
            .iter()
            .map(|row| {
                let value = row[row.len() - 1].as_i64(last)?.unwrap_or_default();
                Ok((row[0].to_string(), value))
            })
            .collect()
    }

    /// Like [`Table::pairs`], but reads the last column as a decimal.
    pub fn decimal_pairs(&self) -> Result<Vec<(String, base::Decimal)>, TableError> {
        let Some(last) = self.columns.last() else {
            return Ok(Vec::new());
        };
        self.rows
            .iter()
            .map(|row| {
                let value = row[row.len() - 1].as_decimal(last)?.unwrap_or_default();
                Ok((row[0].to_string(), value))
            })
            .collect()
    }

    /// Reads a CSV document with a header row. Empty fields become
    /// [`Value::Null`], everything else [`Value::Text`].
    pub fn from_csv<R>(rdr: R) -> Result<Self, csv::Error>
    where
        R: std::io::Read,
    {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
        let mut table = Table::new(rdr.headers()?.iter());
        for record in rdr.records() {
            let record = record?;
            let row = record
                .iter()
                .map(|field| match field {
                    "" => Value::Null,
                    s => Value::from(s),
                })
                .collect();
            table.rows.push(row);
        }
        Ok(table)
    }
}

impl std::str::FromStr for Table {
    type Err = csv::Error;

    /// Lines are trimmed and blank lines skipped, so indented literals work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s
            .lines()
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_csv(text.as_bytes())
    }
}

impl TryFrom<&str> for Table {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
