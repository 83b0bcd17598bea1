use crate::base;

/// Returns the rows whose `column` value is in `allowed`, in their original
/// order. An empty `allowed` set means nothing was selected, which applies no
/// filter at all: the table comes back unchanged and `column` is not checked.
pub fn restrict(
    table: base::Table,
    column: &str,
    allowed: &std::collections::BTreeSet<base::Value>,
) -> Result<base::Table, base::TableError> {
    if allowed.is_empty() {
        return Ok(table);
    }
    let i = table.index_of(column)?;
    let mut out = base::Table::new(table.columns().iter().cloned());
    for row in table.rows().filter(|row| allowed.contains(&row[i])) {
        out.push(row.to_vec());
    }
    Ok(out)
}
