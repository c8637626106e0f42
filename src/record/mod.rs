// Edit records parsed from the positional type log

pub mod parser;

pub use parser::{parse_line, read_log, EditRecord, LogLine, OFFSET_CORRECTION};
