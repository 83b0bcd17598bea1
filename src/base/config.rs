use crate::base::columns;

/// Dashboard config, stored as JSON. Missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Operations CSV, relative to the working directory.
    pub operations_file: String,
    /// Users CSV joined onto the operations. May be absent.
    pub users_file: String,
    /// Join column of the operations file.
    pub left_key: String,
    /// Join column of the users file.
    pub right_key: String,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operations_file: "operations.csv".to_string(),
            users_file: "users.csv".to_string(),
            left_key: columns::USER_ID.to_string(),
            right_key: columns::USERS_KEY.to_string(),
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
