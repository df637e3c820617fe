use std::io::{BufRead, BufReader};
use std::path::Path;

use super::schema::RecordHeader;

/// Decoded headers of every non-blank line
///
/// Lines are split as bytes, so a line that is not UTF-8 or not a JSON
/// object is skipped on its own. Reading stops at the first I/O error.
fn record_headers(path: &Path) -> std::io::Result<impl Iterator<Item = RecordHeader>> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    Ok(reader
        .split(b'\n')
        .map_while(|line| line.ok())
        .filter_map(|line| {
            let line = line.trim_ascii();
            if line.is_empty() {
                return None;
            }
            serde_json::from_slice::<RecordHeader>(line).ok()
        }))
}

/// Read the first non-snapshot record of a log (for teammate probing)
///
/// Returns None for unreadable files and for files without such a record.
pub fn first_metadata_record(path: &Path) -> Option<RecordHeader> {
    record_headers(path).ok()?.find(|header| !header.is_snapshot())
}

/// Find the team name declared anywhere in a log
///
/// Only opening the file can fail; `Ok(None)` means a solo session.
pub fn find_team_name(path: &Path) -> std::io::Result<Option<String>> {
    Ok(record_headers(path)?
        .filter(|header| !header.is_snapshot())
        .find_map(|header| header.team().map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_bytes(lines: &[&[u8]]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            file.write_all(line).unwrap();
            file.write_all(b"\n").unwrap();
        }
        file
    }

    fn write_log(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_first_metadata_record_skips_snapshot_and_blank() {
        let file = write_log(&[
            r#"{"type":"file-history-snapshot","teamName":"ignored"}"#,
            "",
            "{not json",
            r#"{"type":"user","teamName":"alpha","agentName":"researcher","sessionId":"s-2"}"#,
        ]);

        let header = first_metadata_record(file.path()).unwrap();
        assert_eq!(header.team(), Some("alpha"));
        assert_eq!(header.agent_name.as_deref(), Some("researcher"));
        assert_eq!(header.session_id.as_deref(), Some("s-2"));
    }

    #[test]
    fn test_first_metadata_record_missing_file() {
        assert!(first_metadata_record(Path::new("/nonexistent/log.jsonl")).is_none());
    }

    #[test]
    fn test_find_team_name_scans_past_first_record() {
        let file = write_log(&[
            r#"{"type":"user","sessionId":"s-1"}"#,
            r#"{"type":"assistant","teamName":""}"#,
            r#"{"type":"assistant","teamName":"alpha"}"#,
        ]);

        assert_eq!(find_team_name(file.path()).unwrap().as_deref(), Some("alpha"));
    }

    #[test]
    fn test_find_team_name_solo() {
        let file = write_log(&[r#"{"type":"user","sessionId":"s-1"}"#]);
        assert_eq!(find_team_name(file.path()).unwrap(), None);
    }

    #[test]
    fn test_find_team_name_missing_file_is_error() {
        assert!(find_team_name(Path::new("/nonexistent/log.jsonl")).is_err());
    }

    #[test]
    fn test_invalid_utf8_line_does_not_hide_later_records() {
        let file = write_bytes(&[
            br#"{"type":"user","sessionId":"s-1"}"#,
            b"\xff\xfe not text",
            br#"{"type":"assistant","teamName":"alpha","agentName":"tester"}"#,
        ]);

        assert_eq!(find_team_name(file.path()).unwrap().as_deref(), Some("alpha"));

        let file = write_bytes(&[
            b"\xff\xfe",
            br#"{"type":"user","teamName":"alpha","agentName":"tester"}"#,
        ]);
        let header = first_metadata_record(file.path()).unwrap();
        assert_eq!(header.agent_name.as_deref(), Some("tester"));
    }
}
