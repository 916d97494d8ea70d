//! Integration tests for documents and their cursors.

use settingsquill::document::node::Node;
use settingsquill::document::tree::Document;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_value_returns_default() {
    let doc = Document::new();
    assert_eq!(doc.get_int("Missing", 99), 99);
    assert!(doc.get_bool("Missing", true));
    assert_eq!(doc.get_uint("Missing", 3), 3);
    assert_eq!(doc.get_int64("Missing", -3), -3);
    assert_eq!(doc.get_uint64("Missing", 8), 8);
    assert_eq!(doc.get_double("Missing", 0.5), 0.5);
    assert_eq!(doc.get_string("Missing", "dflt"), "dflt");
    assert_eq!(doc.get_int(0, 99), 99);
    assert_eq!(doc.get_int(-1, 99), 99);
}

#[test]
fn test_mismatched_end_fails() {
    let mut doc = Document::parse(r#"{"Group1": {"a": 1}}"#);
    assert!(doc.start_load_object("Group1"));
    assert!(!doc.end_load_array());
    assert_eq!(doc.scopes().1, "/Group1");
}

#[test]
fn test_extra_end_calls_fail_without_moving() {
    let mut doc = Document::new();
    assert!(doc.start_save_object("a"));
    assert!(doc.start_save_object("b"));
    assert!(doc.end_save_object());
    assert!(doc.end_save_object());
    assert!(!doc.end_save_object());
    assert!(!doc.end_save_array());
    assert_eq!(doc.scopes().0, "");

    assert!(!doc.end_load_object());
    assert!(!doc.end_load_array());
    assert_eq!(doc.scopes().1, "");
}

#[test]
fn test_array_append_by_index() {
    let mut doc = Document::new();
    assert!(doc.start_save_array("list", true));
    for i in 0..5 {
        assert!(doc.save_int(i, i));
        assert_eq!(doc.node_at("/list").map(Node::len), Some(i as usize + 1));
    }
    assert!(doc.save_int(2, 200));
    assert_eq!(doc.node_at("/list").map(Node::len), Some(5));
    assert_eq!(doc.node_at("/list/2"), Some(&Node::Int(200)));
}

#[test]
fn test_overwrite_asymmetry() {
    let mut doc = Document::parse(r#"{"obj": {"keep": 1}, "arr": [1, 2]}"#);

    assert!(doc.start_save_object("obj"));
    assert!(doc.end_save_object());
    assert_eq!(doc.node_at("/obj/keep"), Some(&Node::Int(1)));

    assert!(doc.start_save_array("arr", true));
    assert!(doc.end_save_array());
    assert_eq!(doc.node_at("/arr"), Some(&Node::empty_array()));
}

#[test]
fn test_reader_and_writer_scopes_are_independent() {
    let mut doc = Document::new();
    assert!(doc.start_save_object("w"));
    assert!(doc.save_int("v", 1));

    assert_eq!(doc.get_int("v", 0), 0);
    assert!(doc.start_load_object("w"));
    assert_eq!(doc.get_int("v", 0), 1);
    assert_eq!(doc.scopes(), ("/w", "/w"));
}

#[test]
fn test_writes_at_root_of_array_document() {
    let mut doc = Document::parse("[]");
    assert!(!doc.start_save_object("name"));
    assert!(doc.start_save_object(0));
    assert!(doc.save_string("k", "v"));
    assert!(doc.end_save_object());
    assert_eq!(doc.to_json_string(false).unwrap(), r#"[{"k":"v"}]"#);
}

#[test]
fn test_load_and_save_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"Group1": {{"Prop1": 11}}}}"#).unwrap();

    let mut doc = Document::new();
    doc.load(file.path()).unwrap();
    assert_eq!(doc.path(), Some(file.path()));
    assert!(doc.start_load_object("Group1"));
    assert_eq!(doc.get_int("Prop1", 0), 11);

    assert!(doc.start_save_object("Group1"));
    assert!(doc.save_int("Prop2", 12));
    doc.save_in_place(false).unwrap();

    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        r#"{"Group1":{"Prop1":11,"Prop2":12}}"#
    );
}

#[test]
fn test_load_malformed_sets_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ \"a\": ").unwrap();

    let mut doc = Document::parse(r#"{"a": 1}"#);
    assert!(doc.load(file.path()).is_err());
    assert!(doc.has_error());
    assert_eq!(doc.root(), &Node::empty_object());
    assert_eq!(doc.get_int("a", -1), -1);
}

#[test]
fn test_load_missing_file_keeps_document() {
    let dir = TempDir::new().unwrap();
    let mut doc = Document::parse(r#"{"a": 1}"#);

    assert!(doc.load(dir.path().join("missing.json")).is_err());
    assert!(!doc.has_error());
    assert_eq!(doc.get_int("a", 0), 1);
}

#[test]
fn test_open_missing_file_then_save_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.json");

    let mut doc = Document::open(&path);
    assert!(!doc.has_error());
    assert!(doc.save_bool("first", true));
    doc.save_in_place(true).unwrap();

    let reopened = Document::open(&path);
    assert!(reopened.get_bool("first", false));
}

#[test]
fn test_open_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "]").unwrap();

    let doc = Document::open(file.path());
    assert!(doc.has_error());
    assert_eq!(doc.get_string("x", "d"), "d");
}

#[test]
fn test_open_unreadable_file_is_not_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xc3, 0x28, 0xa0, 0xa1]).unwrap();

    let mut doc = Document::open(file.path());
    assert!(!doc.has_error());
    assert!(doc.error_message().is_none());
    assert_eq!(doc.root(), &Node::empty_object());
    assert_eq!(doc.path(), Some(file.path()));
    assert!(doc.save_int("ok", 1));
    assert_eq!(doc.get_int("ok", 0), 1);
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let doc = Document::new();
    assert!(doc.save(blocker.join("settings.json"), true).is_err());
    assert_eq!(
        fs::read_to_string(&blocker).unwrap(),
        "a file, not a directory"
    );
}

#[test]
fn test_children_round_trip_through_aggregate() {
    let source = Document::parse(r#"{"A": {"x": [1, 2]}, "B": {"y": true}}"#);

    let mut aggregate = Document::new();
    for (name, child) in source.get_children(true) {
        assert!(aggregate.add_child_document(&name, &child, true));
    }
    assert_eq!(aggregate.root(), source.root());
}

#[test]
fn test_pretty_output_is_indented() {
    let doc = Document::parse(r#"{"a": [1]}"#);
    assert_eq!(
        doc.to_json_string(true).unwrap(),
        "{\n    \"a\": [\n        1\n    ]\n}"
    );
}
