//! BUILD file actions: resolve, query, map

mod composer;

pub use composer::{ActionComposer, NOT_IN_WORKSPACE_WARNING};
