use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::InvalidViewMode;

/// Which period of the current document the view renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Actual,
    Previous,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Actual => f.write_str("Actual"),
            ViewMode::Previous => f.write_str("Previous"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "actual" => Ok(ViewMode::Actual),
            "previous" => Ok(ViewMode::Previous),
            _ => Err(InvalidViewMode::new(s)),
        }
    }
}
