use crate::base;
use crate::base::columns;

/// A running total that reports overflow instead of wrapping.
pub trait Total: Copy + Default {
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

impl Total for i64 {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }
}

impl Total for base::Decimal {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        base::Decimal::checked_add(self, rhs)
    }
}

/// Running per-key totals that remember the order in which keys first showed
/// up.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    index: std::collections::HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Adds `value` to the total for `key`. Returns `None` and leaves the
    /// aggregate untouched if the total would overflow.
    pub fn add(&mut self, key: K, value: V) -> Option<()>
    where
        K: Clone + Eq + std::hash::Hash,
        V: Total,
    {
        match self.index.get(&key) {
            Some(&i) => {
                let total = &mut self.entries[i].1;
                *total = total.checked_add(value)?;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        Some(())
    }

    /// Consumes the aggregate, returning entries sorted by key.
    pub fn into_sorted(self) -> Vec<(K, V)>
    where
        K: Ord,
    {
        let mut v = self.entries;
        v.sort_by(|(a, _), (b, _)| a.cmp(b));
        v
    }
}

impl<K, V> IntoIterator for Aggregate<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    /// Yields entries in order of first appearance.
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn overflow(column: &str) -> base::TableError {
    base::TableError::Overflow {
        column: column.to_string(),
    }
}

/// Sets the `Date` column (appending it if absent) to the calendar date of
/// `source`. Values that do not parse become `Null`, which the grouping
/// functions below skip.
pub fn derive_date(table: &base::Table, source: &str) -> Result<base::Table, base::TableError> {
    let si = table.index_of(source)?;
    let existing = table.index_of(columns::DATE).ok();
    let mut out = match existing {
        Some(_) => base::Table::new(table.columns().iter().cloned()),
        None => base::Table::new(
            table
                .columns()
                .iter()
                .map(String::as_str)
                .chain([columns::DATE]),
        ),
    };

    let mut unparsed = 0;
    for row in table.rows() {
        let date = match &row[si] {
            base::Value::Text(s) => match base::date::parse_date(s) {
                Ok(d) => base::Value::Date(d),
                Err(_) => base::Value::Null,
            },
            base::Value::Date(d) => base::Value::Date(*d),
            _ => base::Value::Null,
        };
        if date.is_null() {
            unparsed += 1;
        }
        let mut row = row.to_vec();
        match existing {
            Some(di) => row[di] = date,
            None => row.push(date),
        }
        out.push(row);
    }
    if unparsed > 0 {
        tracing::debug!(column = source, rows = unparsed, "unparseable dates");
    }
    Ok(out)
}

/// Counts rows per distinct tuple of `keys`. Emits the key columns plus
/// `Count of Operations`, one row per tuple in order of first appearance. Rows
/// with a `Null` in any key column are left out.
pub fn group_count(table: &base::Table, keys: &[&str]) -> Result<base::Table, base::TableError> {
    let idx = keys
        .iter()
        .map(|k| table.index_of(k))
        .collect::<Result<Vec<_>, _>>()?;

    let mut agg = Aggregate::<Vec<base::Value>, i64>::default();
    let mut dropped = 0;
    for row in table.rows() {
        if idx.iter().any(|&i| row[i].is_null()) {
            dropped += 1;
            continue;
        }
        agg.add(idx.iter().map(|&i| row[i].clone()).collect(), 1)
            .ok_or_else(|| overflow(columns::COUNT_OF_OPERATIONS))?;
    }
    if dropped > 0 {
        tracing::debug!(rows = dropped, "rows with empty group keys left out");
    }

    let mut out = base::Table::new(keys.iter().copied().chain([columns::COUNT_OF_OPERATIONS]));
    for (mut key, count) in agg {
        key.push(base::Value::Int(count));
        out.push(key);
    }
    Ok(out)
}

/// Collapses the output of [`group_count`] to one row per `entity`. For every
/// other column the first value seen for that entity is kept, and the
/// `Count of Operations` values are summed. Only the count is a true total;
/// the other columns show one example row per entity.
pub fn collapse_by_entity(
    grouped: &base::Table,
    entity: &str,
) -> Result<base::Table, base::TableError> {
    let ei = grouped.index_of(entity)?;
    let ci = grouped.index_of(columns::COUNT_OF_OPERATIONS)?;
    let others = (0..grouped.columns().len())
        .filter(|&j| j != ei && j != ci)
        .collect::<Vec<_>>();

    let mut counts = Aggregate::<base::Value, i64>::default();
    let mut firsts = std::collections::HashMap::<base::Value, Vec<base::Value>>::new();
    for row in grouped.rows() {
        if row[ei].is_null() {
            continue;
        }
        let count = row[ci]
            .as_i64(columns::COUNT_OF_OPERATIONS)?
            .unwrap_or_default();
        counts
            .add(row[ei].clone(), count)
            .ok_or_else(|| overflow(columns::COUNT_OF_OPERATIONS))?;
        firsts
            .entry(row[ei].clone())
            .or_insert_with(|| others.iter().map(|&j| row[j].clone()).collect());
    }

    let names = std::iter::once(entity)
        .chain(others.iter().map(|&j| grouped.columns()[j].as_str()))
        .chain([columns::COUNT_OF_OPERATIONS]);
    tracing::debug!(entities = counts.len(), "collapsed groups");
    let mut out = base::Table::new(names);
    for (key, count) in counts {
        let mut row = vec![key.clone()];
        row.extend(firsts.remove(&key).unwrap_or_default());
        row.push(base::Value::Int(count));
        out.push(row);
    }
    Ok(out)
}

/// Rows per distinct value of `column` as `(column, Count)` pairs sorted by
/// value. `Null` values are not counted.
pub fn count_by_column(table: &base::Table, column: &str) -> Result<base::Table, base::TableError> {
    let mut agg = Aggregate::<base::Value, i64>::default();
    for value in table.column(column)?.filter(|v| !v.is_null()) {
        agg.add(value.clone(), 1)
            .ok_or_else(|| overflow(columns::COUNT))?;
    }
    let mut out = base::Table::new([column, columns::COUNT]);
    for (value, count) in agg.into_sorted() {
        out.push(vec![value, base::Value::Int(count)]);
    }
    Ok(out)
}

/// Sums `sum_column` per distinct value of `group_column`, sorted by group.
/// Empty summands count as zero; any other non-number fails, as does a total
/// that leaves the representable range.
pub fn sum_by_group(
    table: &base::Table,
    group_column: &str,
    sum_column: &str,
) -> Result<base::Table, base::TableError> {
    let gi = table.index_of(group_column)?;
    let si = table.index_of(sum_column)?;
    let mut agg = Aggregate::<base::Value, base::Decimal>::default();
    for row in table.rows() {
        if row[gi].is_null() {
            continue;
        }
        let value = row[si].as_decimal(sum_column)?.unwrap_or_default();
        agg.add(row[gi].clone(), value)
            .ok_or_else(|| overflow(sum_column))?;
    }
    let mut out = base::Table::new([group_column, sum_column]);
    for (group, sum) in agg.into_sorted() {
        out.push(vec![group, base::Value::Decimal(sum)]);
    }
    Ok(out)
}
