use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::config::PatchConfig;
use crate::diff::{apply_edit, change_counts, render_diff};
use crate::error::PatchResult;
use crate::record::{parse_line, read_log, EditRecord};
use crate::utils::fs::{read_source, write_source};

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub records_applied: usize,
    pub files_touched: usize,
    /// Unified diffs, one per record, in processing order. Only filled in dry-run mode.
    pub previews: Vec<String>,
}

/// Applies every record of a type log to the files it names.
///
/// Records are processed from the last log line to the first so that, for
/// a log written in ascending offset order, patching a later position never
/// shifts an earlier one that is still pending. That ordering is assumed,
/// not checked. The first error stops the run; records already applied stay
/// applied.
pub struct PatchApplier {
    config: PatchConfig,
}

impl PatchApplier {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> PatchResult<ApplySummary> {
        self.config.validate()?;

        let lines = read_log(&self.config.log_file)?;
        info!(
            "Applying {} records from {}{}",
            lines.len(),
            self.config.log_file.display(),
            if self.config.dry_run { " (dry run)" } else { "" }
        );

        let mut summary = ApplySummary::default();
        let mut touched = BTreeSet::new();
        // Pending contents per file, dry-run only
        let mut overlay: HashMap<PathBuf, String> = HashMap::new();

        for line in lines.iter().rev() {
            let result = parse_line(line.number, &line.text, &self.config.path_prefix)
                .and_then(|record| {
                    if self.config.dry_run {
                        let preview = preview_record(&record, &mut overlay)?;
                        summary.previews.push(preview);
                    } else {
                        apply_record(&record)?;
                    }
                    Ok(record)
                });

            match result {
                Ok(record) => {
                    summary.records_applied += 1;
                    touched.insert(record.file_path);
                }
                Err(e) => {
                    error!(
                        "Aborting at log line {} after {} applied records: {}",
                        line.number, summary.records_applied, e
                    );
                    return Err(e);
                }
            }
        }

        summary.files_touched = touched.len();
        info!(
            "Applied {} records across {} files",
            summary.records_applied, summary.files_touched
        );
        Ok(summary)
    }
}

/// Read, validate, substitute and overwrite the file named by `record`.
///
/// Nothing is written when the placeholder check fails.
pub fn apply_record(record: &EditRecord) -> PatchResult<()> {
    debug!(
        "Line {}: {} at offset {} in {}",
        record.line,
        record.type_name,
        record.offset,
        record.file_path.display()
    );

    let content = read_source(&record.file_path)?;
    let patched = apply_edit(&content, record.offset, &record.type_name)
        .map_err(|e| e.at_path(&record.file_path))?;
    write_source(&record.file_path, &patched)
}

fn preview_record(
    record: &EditRecord,
    overlay: &mut HashMap<PathBuf, String>,
) -> PatchResult<String> {
    let current = match overlay.get(&record.file_path) {
        Some(content) => content.clone(),
        None => read_source(&record.file_path)?,
    };
    let patched = apply_edit(&current, record.offset, &record.type_name)
        .map_err(|e| e.at_path(&record.file_path))?;

    let (removed, added) = change_counts(&current, &patched);
    debug!(
        "Line {}: would write {} into {} (-{} +{})",
        record.line,
        record.type_name,
        record.file_path.display(),
        removed,
        added
    );

    let diff = render_diff(&record.file_path, &current, &patched);
    overlay.insert(record.file_path.clone(), patched);
    Ok(diff)
}
