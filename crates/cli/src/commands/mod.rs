pub mod label;
pub mod lens;
pub mod root;

pub use label::label_command;
pub use lens::{compose_or_warn, lens_command};
pub use root::root_command;
