//! Literal column names of the operations and users files, plus the columns
//! the aggregation stages derive. Case matters: the users file spells its key
//! `Userid`.

pub const USER_ID: &str = "UserId";
pub const USERS_KEY: &str = "Userid";
pub const FULLNAME: &str = "Fullname";
pub const CREATION_DATE: &str = "CreationDate";
pub const OPERATION: &str = "Operation";
pub const RECORD_TYPE: &str = "RecordType";

pub const DATE: &str = "Date";
pub const COUNT_OF_OPERATIONS: &str = "Count of Operations";
pub const COUNT: &str = "Count";

/// Key tuple for the first grouping stage of the operations summary.
pub const SUMMARY_KEY: [&str; 4] = [FULLNAME, USER_ID, DATE, OPERATION];
