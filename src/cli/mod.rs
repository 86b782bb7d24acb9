mod args;
mod input;

pub use args::{Cli, Commands, InputArgs, StageArgs};
pub use input::{read_stdin, read_text_file};
