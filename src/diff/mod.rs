pub mod edit;
pub mod preview;

pub use edit::{apply_edit, PLACEHOLDER};
pub use preview::{change_counts, render_diff};
