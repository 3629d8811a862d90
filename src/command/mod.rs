mod commands;
mod history;

pub use commands::Command;
pub use history::{HistoryLog, MAX_HISTORY};
