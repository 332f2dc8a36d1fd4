//! Source locations reported by `bazel query`

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use super::position::{Position, SourceRange};

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<path>.*?)(?::(?P<line>\d+))?(?::(?P<column>\d+))?$")
        .expect("location regex is valid")
});

/// Location of a rule declaration, as `<path>:<line>:<column>` with 1-based line and column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryLocation {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl QueryLocation {
    pub fn new(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line: line.max(1),
            column: column.max(1),
        }
    }

    /// Zero-based editor range pointing at the declaration
    pub fn range(&self) -> SourceRange {
        SourceRange::at(Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1)))
    }
}

impl FromStr for QueryLocation {
    type Err = std::convert::Infallible;

    /// Missing line or column components default to 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(caps) = LOCATION_RE.captures(s) else {
            return Ok(Self::new(s, 1, 1));
        };

        let number = |name: &str| {
            caps.name(name)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(1)
        };

        let path = caps.name("path").map_or(s, |m| m.as_str());
        Ok(Self::new(path, number("line"), number("column")))
    }
}

impl fmt::Display for QueryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}
