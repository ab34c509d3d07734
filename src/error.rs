//! Parse-time failures. Geometry and interpretation never fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoverError {
    #[error("no cardinal point (direction) exists for code {0:?}")]
    InvalidDirectionCode(String),

    #[error("no rover control exists for code {0:?}")]
    InvalidCommandCode(char),

    #[error("could not parse a rover position from {0:?}: {1}")]
    MalformedPositionLine(String, String),

    #[error("could not parse plateau coordinates from {0:?}: {1}")]
    MalformedPlateauLine(String, String),

    #[error("mission input is empty, expected a plateau line")]
    MissingPlateauLine,

    #[error("rover {0} has a position line but no command line")]
    MissingCommandLine(String),

    /// Any of the above, tagged with the 1-based input line that caused it.
    #[error("line {line} ({text:?}): {source}")]
    Line {
        line: usize,
        text: String,
        #[source]
        source: Box<RoverError>,
    },
}

impl RoverError {
    pub fn at_line(self, line: usize, text: &str) -> Self {
        RoverError::Line {
            line,
            text: text.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any line context stripped.
    pub fn root(&self) -> &RoverError {
        match self {
            RoverError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}
