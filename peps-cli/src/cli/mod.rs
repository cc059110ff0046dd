mod cli;
mod style;

pub use cli::{Cli, ModeArg};
pub use style::Style;
