use crate::base;
use crate::cli;

#[derive(clap::Args)]
pub struct OperationsFilter {
    /// Operations of interest
    ///
    /// Use commas to separate multiple operations. Values must match exactly.
    /// All operations are included if omitted.
    #[arg(short, long, value_name = "OPERATIONS", value_delimiter = ',')]
    pub operations: Vec<String>,

    /// Creation dates of interest
    ///
    /// Use commas to separate multiple values. Values must match the
    /// 'CreationDate' column exactly. All dates are included if omitted.
    #[arg(short, long, value_name = "DATES", value_delimiter = ',')]
    pub dates: Vec<String>,
}

impl OperationsFilter {
    pub fn to_selection(&self) -> base::Selection {
        base::Selection {
            operations: cli::util::selection_set(&self.operations),
            dates: cli::util::selection_set(&self.dates),
            ..base::Selection::default()
        }
    }
}
