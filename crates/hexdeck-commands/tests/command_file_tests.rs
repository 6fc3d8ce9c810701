use std::io::Write;

use hexdeck_commands::{load_from_path, parse, CommandModel, SectionView};
use hexdeck_core::error::ConfigError;

const SAMPLE: &str = "\
[GENERAL]
MyButton = poke the device | 01 02 03
RESET = FF 00

[SHORTCUT]
GRP-ONE-press = AA 01
GRP-ONE-release = AA 00
GRP-TWO-toggle = AB 01

[BATCHSEND]
warmup | HOMING CYCLE | 10 11 12
A | B | LABEL | AA BB
";

#[test]
fn test_sample_file_parses_in_order() {
    let set = parse(SAMPLE).unwrap();

    let names: Vec<&str> = set.sections().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["GENERAL", "SHORTCUT", "BATCHSEND"]);
    assert_eq!(set.command_count(), 7);

    let general = set.section("GENERAL").unwrap();
    assert_eq!(general.get("MyButton").unwrap().as_bytes(), &[1, 2, 3]);
    assert_eq!(general.get("RESET").unwrap().as_bytes(), &[0xFF, 0x00]);

    let batch = set.section("BATCHSEND").unwrap();
    assert_eq!(batch.get("LABEL").unwrap().as_bytes(), &[170, 187]);
    assert_eq!(
        batch.get("HOMING CYCLE").unwrap().as_bytes(),
        &[0x10, 0x11, 0x12]
    );
}

#[test]
fn test_model_groups_shortcuts_and_numbers_buttons() {
    let set = parse(SAMPLE).unwrap();
    let model = CommandModel::build(&set);

    assert_eq!(model.section_count(), 3);
    assert_eq!(model.command_count(), 7);

    // GENERAL renders flat with the first ids.
    let SectionView::Flat(general) = &model.sections()[0] else {
        panic!("GENERAL should render flat");
    };
    assert_eq!(general.title, "GENERAL");
    assert_eq!(general.entries[0].id, 1);
    assert_eq!(general.entries[0].label, "MyButton");
    assert_eq!(general.entries[1].id, 2);

    // SHORTCUT clusters by the first two label tokens.
    let SectionView::Grouped(shortcut) = &model.sections()[1] else {
        panic!("SHORTCUT should render grouped");
    };
    assert_eq!(shortcut.groups.len(), 2);
    assert_eq!(shortcut.groups[0].key, "GRP-ONE");
    let captions: Vec<&str> = shortcut.groups[0]
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(captions, vec!["press", "release"]);
    assert_eq!(shortcut.groups[1].key, "GRP-TWO");
    assert_eq!(shortcut.groups[1].entries[0].label, "toggle");

    // BATCHSEND renders flat, ids continuing from the shortcut entries.
    let SectionView::Flat(batch) = &model.sections()[2] else {
        panic!("BATCHSEND should render flat");
    };
    assert_eq!(batch.entries[0].id, 6);
    assert_eq!(batch.entries[0].label, "HOMING CYCLE");
    assert_eq!(batch.entries[1].id, 7);
    assert_eq!(batch.entries[1].label, "LABEL");

    assert_eq!(model.lookup(5).unwrap().label, "toggle");
    assert_eq!(model.lookup_label("reset").unwrap().id, 2);
}

#[test]
fn test_two_token_shortcut_gets_empty_caption() {
    let model = CommandModel::build(&parse("[SHORTCUT]\nLED-ON = 01\n").unwrap());

    let SectionView::Grouped(shortcut) = &model.sections()[0] else {
        panic!("SHORTCUT should render grouped");
    };
    assert_eq!(shortcut.groups[0].key, "LED-ON");
    assert_eq!(shortcut.groups[0].entries[0].label, "");
    assert_eq!(model.lookup(1).unwrap().command.as_bytes(), &[0x01]);
}

#[test]
fn test_loading_new_file_replaces_model_completely() {
    let first = CommandModel::build(&parse(SAMPLE).unwrap());
    assert!(first.lookup_label("MyButton").is_some());

    let second = CommandModel::build(&parse("[OTHER]\nPING = 0F\n").unwrap());

    assert_eq!(second.command_count(), 1);
    assert!(second.lookup_label("MyButton").is_none());
    assert!(second.lookup(2).is_none());
    assert_eq!(second.lookup(1).unwrap().label, "PING");
    assert_eq!(second.sections()[0].title(), "OTHER");
}

#[test]
fn test_model_dump_is_stable_json() {
    let model = CommandModel::build(&parse(SAMPLE).unwrap());
    let value = serde_json::to_value(&model).unwrap();

    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["layout"], "flat");
    assert_eq!(sections[1]["layout"], "grouped");
    assert_eq!(sections[1]["groups"][0]["key"], "GRP-ONE");
    assert_eq!(sections[0]["entries"][0]["command"], serde_json::json!([1, 2, 3]));
}

#[test]
fn test_load_from_path_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let set = load_from_path(file.path()).unwrap();
    assert_eq!(set.section_count(), 3);
    assert_eq!(set.command_count(), 7);
}

#[test]
fn test_load_from_missing_path_reports_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.cfg");

    let err = load_from_path(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}

#[test]
fn test_malformed_file_reports_offending_line() {
    let input = "[GENERAL]\nOK = 01\n[SHORTCUT]\nGRP-ONE-press = 0G\n";
    let err = parse(input).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidHex {
            line: 4,
            token: "0G".to_string(),
        }
    );
}
