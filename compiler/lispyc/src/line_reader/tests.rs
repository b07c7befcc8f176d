#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn scripted_reader_replays_then_ends() {
    let mut reader = ScriptedReader::new(["+ 1 2", "- 3"]);
    assert_eq!(reader.read_line("> ").unwrap(), Some("+ 1 2".to_string()));
    assert_eq!(reader.read_line("> ").unwrap(), Some("- 3".to_string()));
    assert_eq!(reader.read_line("> ").unwrap(), None);
    assert_eq!(reader.read_line("> ").unwrap(), None);
    assert_eq!(reader.prompts().len(), 4);
}

#[test]
fn scripted_reader_records_history() {
    let mut reader = ScriptedReader::default();
    reader.record_history("+ 1 2").unwrap();
    reader.record_history("").unwrap();
    assert_eq!(reader.history(), ["+ 1 2".to_string(), String::new()]);
}
