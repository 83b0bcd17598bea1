pub mod aggregate;
pub mod barchart;
pub mod cache;
pub mod charset;
pub mod columns;
pub mod config;
pub mod datasource;
pub mod decimal;
pub mod date;
pub mod filter;
pub mod fs;
pub mod merge;
pub mod piechart;
pub mod pipeline;
pub mod table;
pub mod tableview;
pub mod util;

pub use cache::LoadCache;
pub use charset::Charset;
pub use config::Config;
pub use datasource::LoadError;
pub use datasource::Source;
pub use decimal::Decimal;
pub use fs::Fs;
pub use pipeline::Selection;
pub use table::Table;
pub use table::TableError;
pub use table::Value;
