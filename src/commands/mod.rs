//! Front-end operations

pub mod copy;
pub mod list;

use crate::config::{Config, Mode};
use crate::types::ListCopyError;

/// Run the operation selected in `config`
pub fn run(config: Config) -> Result<(), ListCopyError> {
    match &config.mode {
        Mode::List => list::run(&config.source).map(|_| ()),
        Mode::Copy { destination } => copy::run(&config.source, destination).map(|_| ()),
    }
}
