pub mod fs;
pub mod paths;

pub use fs::{read_source, write_source};
pub use paths::expand_tilde;
