//! Loading schedule files into memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::domain::{ParseError, Train};
use crate::error::AppError;

/// Read schedule records from `reader` in order.
///
/// Reading stops at the first empty line or at end of input. Any malformed
/// line, including one that is not UTF-8, aborts the whole read with its
/// 1-based line number.
pub fn read_schedule<R: BufRead>(mut reader: R) -> Result<Vec<Train>, AppError> {
    let mut trains = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let bytes = strip_line_ending(&buf);
        if bytes.is_empty() {
            trace!(line = line_no, "blank line ends schedule");
            break;
        }
        let malformed = |source| AppError::MalformedLine {
            line: line_no,
            source,
        };
        let line =
            std::str::from_utf8(bytes).map_err(|_| malformed(ParseError::InvalidUtf8))?;
        trains.push(Train::parse(line).map_err(malformed)?);
    }

    debug!(records = trains.len(), "schedule read");
    Ok(trains)
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Open `path` and read its schedule records.
pub fn load_schedule(path: &Path) -> Result<Vec<Train>, AppError> {
    let file = File::open(path).map_err(|source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_schedule(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn reads_in_file_order() {
        let input = "1 01.01.2024 A 10:00:00 01:00:00\n\
                     2 02.01.2024 B 11:00:00 02:00:00\n\
                     3 03.01.2024 C 12:00:00 03:00:00\n";
        let trains = read_schedule(Cursor::new(input)).unwrap();
        let numbers: Vec<_> = trains.iter().map(|t| t.number()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn stops_at_first_blank_line() {
        let input = "1 01.01.2024 A 10:00:00 01:00:00\n\
                     \n\
                     not a schedule line at all\n";
        let trains = read_schedule(Cursor::new(input)).unwrap();
        assert_eq!(trains.len(), 1);
    }

    #[test]
    fn handles_missing_trailing_newline_and_crlf() {
        let input = "1 01.01.2024 A 10:00:00 01:00:00\r\n2 02.01.2024 B 11:00:00 02:00:00";
        let trains = read_schedule(Cursor::new(input)).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[0].on_road(), "01:00:00");
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let kind = "K".repeat(500);
        let input = format!("1 01.01.2024 {kind} 10:00:00 01:00:00\n");
        let trains = read_schedule(Cursor::new(input)).unwrap();
        assert_eq!(trains[0].kind().len(), 500);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let input = "1 01.01.2024 A 10:00:00 01:00:00\n\
                     2 02.01.2024 B 11:00:00\n";
        let err = read_schedule(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedLine {
                line: 2,
                source: ParseError::FieldCount(4)
            }
        ));
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let mut input = b"1 01.01.2024 A 10:00:00 01:00:00\n".to_vec();
        input.extend_from_slice(b"2 02.01.2024 \xff\xfe 11:00:00 02:00:00\n");
        let err = read_schedule(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedLine {
                line: 2,
                source: ParseError::InvalidUtf8
            }
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(read_schedule(Cursor::new("")).unwrap().is_empty());
        assert!(read_schedule(Cursor::new("\n1 01.01.2024 A 10:00:00 01:00:00\n"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "101 15.03.2024 Express 08:30:00 02:15:00").unwrap();
        writeln!(file, "102 15.03.2024 Local 09:30:00 00:45:00").unwrap();

        let trains = load_schedule(file.path()).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[1].kind(), "Local");
    }

    #[test]
    fn missing_file_is_an_open_failure() {
        let err = load_schedule(Path::new("/nonexistent/path/schedule.txt")).unwrap_err();
        assert!(matches!(err, AppError::FileOpen { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
