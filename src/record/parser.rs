use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, PatchError, PatchResult};

/// Difference between the offsets written to the log and character positions in the file
pub const OFFSET_CORRECTION: i64 = 4;

/// One line of the log, numbered from 1 in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub number: usize,
    pub text: String,
}

/// A single offset-based substitution described by one log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Log line this record came from
    pub line: usize,
    /// Offset as written in the log
    pub raw_offset: i64,
    /// Character position of the placeholder in the target file
    pub offset: usize,
    pub type_name: String,
    pub file_path: PathBuf,
}

/// Read the whole log and split it into numbered lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped. An empty log yields no lines.
pub fn read_log(path: &Path) -> PatchResult<Vec<LogLine>> {
    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    let lines: Vec<LogLine> = content
        .lines()
        .enumerate()
        .map(|(i, text)| LogLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Parse `<offset> <type><delim><path_prefix><rest of path>`.
///
/// The single delimiter character between the type name and the path
/// prefix is dropped. Any line that does not fit this shape is fatal.
pub fn parse_line(line_no: usize, line: &str, path_prefix: &str) -> PatchResult<EditRecord> {
    let line = line.trim_end_matches(['\n', '\r']);

    if path_prefix.is_empty() {
        return Err(PatchError::invalid_argument("path prefix must not be empty"));
    }

    let space = line
        .find(' ')
        .ok_or_else(|| PatchError::malformed_line(line_no, "missing space after offset"))?;
    let marker = line.find(path_prefix).ok_or_else(|| {
        PatchError::malformed_line(line_no, format!("missing path prefix {path_prefix:?}"))
    })?;

    // type name spans [space + 1, marker - 1)
    let type_start = space + 1;
    if marker < type_start + 2 {
        return Err(PatchError::malformed_line(
            line_no,
            "no type name between offset and path",
        ));
    }
    let type_name = line.get(type_start..marker - 1).ok_or_else(|| {
        PatchError::malformed_line(line_no, "delimiter before path is not a single character")
    })?;

    let offset_field = &line[..space];
    let raw_offset: i64 = offset_field.trim().parse().map_err(|_| {
        PatchError::malformed_line(line_no, format!("offset {offset_field:?} is not an integer"))
    })?;
    let offset = raw_offset
        .checked_sub(OFFSET_CORRECTION)
        .filter(|adjusted| *adjusted >= 0)
        .and_then(|adjusted| usize::try_from(adjusted).ok())
        .ok_or_else(|| {
            PatchError::malformed_line(
                line_no,
                format!("offset {raw_offset} is smaller than {OFFSET_CORRECTION}"),
            )
        })?;

    Ok(EditRecord {
        line: line_no,
        raw_offset,
        offset,
        type_name: type_name.to_string(),
        file_path: PathBuf::from(&line[marker..]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PREFIX: &str = "/Users/nima/Developer/logisim-evolution/src/main/java/";

    #[test]
    fn test_parse_well_formed_line() {
        let line = format!("104 int {PREFIX}com/cburch/hex/Caret.java\n");
        let record = parse_line(3, &line, PREFIX).unwrap();

        assert_eq!(record.line, 3);
        assert_eq!(record.raw_offset, 104);
        assert_eq!(record.offset, 100);
        assert_eq!(record.type_name, "int");
        assert_eq!(
            record.file_path,
            PathBuf::from(format!("{PREFIX}com/cburch/hex/Caret.java"))
        );
    }

    #[test]
    fn test_parse_line_without_delimiter_drops_last_type_char() {
        // The slash opening the prefix sits right after the type, so the
        // character dropped as delimiter is the type's own last letter.
        let line = format!("104 int{PREFIX}Foo.java\n");
        let record = parse_line(1, &line, PREFIX).unwrap();
        assert_eq!(record.type_name, "in");
        assert_eq!(record.offset, 100);
        assert_eq!(record.file_path, PathBuf::from(format!("{PREFIX}Foo.java")));
    }

    #[test]
    fn test_parse_generic_type_with_spaces() {
        let line = format!("2048 Map<String, List<Integer>>:{PREFIX}Foo.java");
        let record = parse_line(1, &line, PREFIX).unwrap();
        assert_eq!(record.type_name, "Map<String, List<Integer>>");
        assert_eq!(record.offset, 2044);
    }

    #[test]
    fn test_parse_strips_crlf() {
        let line = format!("8 long {PREFIX}Foo.java\r\n");
        let record = parse_line(1, &line, PREFIX).unwrap();
        assert_eq!(record.file_path, PathBuf::from(format!("{PREFIX}Foo.java")));
    }

    #[test]
    fn test_parse_offset_at_correction_boundary() {
        let line = format!("4 int {PREFIX}Foo.java");
        assert_eq!(parse_line(1, &line, PREFIX).unwrap().offset, 0);

        let line = format!("3 int {PREFIX}Foo.java");
        let err = parse_line(1, &line, PREFIX).unwrap_err();
        assert!(matches!(err, PatchError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let cases = [
            format!("104int{PREFIX}Foo.java"),
            "104 int /tmp/Foo.java".to_string(),
            format!("abc int {PREFIX}Foo.java"),
            format!("104 {PREFIX}Foo.java"),
            format!("104  {PREFIX}Foo.java"),
            String::new(),
        ];
        for case in &cases {
            let err = parse_line(7, case, PREFIX).unwrap_err();
            assert!(
                matches!(err, PatchError::MalformedLine { line: 7, .. }),
                "expected malformed line for {case:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_prefix() {
        let err = parse_line(1, "104 int /Foo.java", "").unwrap_err();
        assert!(matches!(err, PatchError::InvalidArgument { .. }));
    }

    #[test]
    fn test_read_log_numbers_lines() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("out.txt");
        fs::write(&log, "first\nsecond\r\nthird\n").unwrap();

        let lines = read_log(&log).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], LogLine { number: 1, text: "first".into() });
        assert_eq!(lines[1].text, "second");
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_read_log_empty_and_missing() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("out.txt");
        fs::write(&log, "").unwrap();
        assert!(read_log(&log).unwrap().is_empty());

        let err = read_log(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PatchError::Io { path: Some(_), .. }));
    }
}
