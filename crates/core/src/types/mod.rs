pub mod command;
pub mod location;
pub mod position;
pub mod rule;

// Re-export commonly used types
pub use command::{ActionKind, CommandArguments, CommandDescriptor};
pub use location::QueryLocation;
pub use position::{Position, SourceRange};
pub use rule::{QueryResult, RuleRecord};
