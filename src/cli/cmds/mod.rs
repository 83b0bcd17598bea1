pub mod dash;
pub mod dates;
pub mod init;
pub mod interactive;
pub mod page;
pub mod people;
pub mod root;
pub mod summary;
pub mod types;
pub mod values;
