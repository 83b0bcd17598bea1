//! Dashboard pages as plain functions of their input tables and the current
//! filter selection. Nothing is kept between calls; a UI re-runs the page
//! function whenever the selection changes.

use crate::base;
use crate::base::aggregate;
use crate::base::columns;
use crate::base::filter;

/// Values picked in the dashboard's multi-select filters. An empty set means
/// nothing was picked and the corresponding filter is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub operations: std::collections::BTreeSet<base::Value>,
    pub dates: std::collections::BTreeSet<base::Value>,
    pub fullnames: std::collections::BTreeSet<base::Value>,
}

/// Joins user details onto the operations. Without an operations schema there
/// is nothing to join onto, so the operations table is returned as is.
pub fn prepare(
    operations: base::Table,
    users: &base::Table,
    left_key: &str,
    right_key: &str,
) -> Result<base::Table, base::TableError> {
    if operations.is_schemaless() {
        return Ok(operations);
    }
    base::merge::merge(operations, users, left_key, right_key)
}

/// Restricts `merged` to the selected operations and creation dates. The
/// views below each take this selection and need only their own columns, so
/// one bad column never takes down a view that does not use it.
///
/// A table without columns stands in for an operations file that could not be
/// read; it passes through, and each view renders it empty.
pub fn select_operations(
    merged: base::Table,
    selection: &Selection,
) -> Result<base::Table, base::TableError> {
    if merged.is_schemaless() {
        return Ok(merged);
    }
    let filtered = filter::restrict(merged, columns::OPERATION, &selection.operations)?;
    filter::restrict(filtered, columns::CREATION_DATE, &selection.dates)
}

/// One row per person: `Fullname, UserId, Date, Operation, Count of Operations`.
pub fn summary(selected: &base::Table) -> Result<base::Table, base::TableError> {
    if selected.is_schemaless() {
        return Ok(base::Table::new(
            columns::SUMMARY_KEY
                .iter()
                .copied()
                .chain([columns::COUNT_OF_OPERATIONS]),
        ));
    }
    let dated = aggregate::derive_date(selected, columns::CREATION_DATE)?;
    let grouped = aggregate::group_count(&dated, &columns::SUMMARY_KEY)?;
    aggregate::collapse_by_entity(&grouped, columns::FULLNAME)
}

/// `Date, Count`
pub fn by_date(selected: &base::Table) -> Result<base::Table, base::TableError> {
    if selected.is_schemaless() {
        return Ok(base::Table::new([columns::DATE, columns::COUNT]));
    }
    let dated = aggregate::derive_date(selected, columns::CREATION_DATE)?;
    aggregate::count_by_column(&dated, columns::DATE)
}

/// `Operation, RecordType` with record types summed.
pub fn by_operation(selected: &base::Table) -> Result<base::Table, base::TableError> {
    if selected.is_schemaless() {
        return Ok(base::Table::new([columns::OPERATION, columns::RECORD_TYPE]));
    }
    aggregate::sum_by_group(selected, columns::OPERATION, columns::RECORD_TYPE)
}

/// Rows per person, restricted to the selected full names.
pub fn people_page(
    merged: base::Table,
    selection: &Selection,
) -> Result<base::Table, base::TableError> {
    if merged.is_schemaless() {
        return Ok(base::Table::new([columns::FULLNAME, columns::COUNT]));
    }
    let filtered = filter::restrict(merged, columns::FULLNAME, &selection.fullnames)?;
    aggregate::count_by_column(&filtered, columns::FULLNAME)
}
