mod case;
mod resultmatcher;
mod state;

pub use case::Case;
pub use case::Invocation;
pub use case::MutCase;
pub(crate) use case::generate_testcases;
pub use resultmatcher::ResultMatcher;
pub use state::State;
pub use state::StrState;

use crate::base;

pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// Operations of three users over two days.
pub const OPERATIONS: &str = "\
UserId,CreationDate,Operation,RecordType
u1,2024-01-01 09:00:00,Login,1
u2,2024-01-01 10:00:00,Login,1
u1,2024-01-01 11:00:00,Login,1
u1,2024-01-02 12:00:00,Export,4
u3,2024-01-02 13:00:00,Logout,2
";

pub const USERS: &str = "\
Userid,Fullname
u1,Ann
u2,Bob
u3,Cid
";
