/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{FillCli, OutputFormat, QnaCli};
pub use output::{OutputCtx, write_error};
