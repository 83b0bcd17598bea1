mod cmds;
mod output;
mod session;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
use session::Session;
pub use util::error_chain;
