pub mod apply;

pub use apply::{apply_record, ApplySummary, PatchApplier};
