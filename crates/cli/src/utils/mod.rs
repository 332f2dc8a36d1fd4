pub mod file;

pub use file::absolute_path;
