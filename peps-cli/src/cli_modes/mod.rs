mod cli_mode;
mod editor_utils;
mod peps_cli;

pub use cli_mode::CliModeResult;
pub use peps_cli::PepsCli;
