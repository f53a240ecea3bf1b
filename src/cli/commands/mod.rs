pub mod check;
mod command_result;
pub mod init;
pub mod patch;

pub use command_result::*;
