//! Batch annotation tests — add and remove diagrams across notes.

use pitchlib::annotate::{add_pitch, remove_pitch, AddReport, NoteFields, RemoveReport};
use pitchlib::{render, AccentDictionary};
use pretty_assertions::assert_eq;

fn note(id: i64, expression: &str, reading: &str, output: &str) -> NoteFields {
    NoteFields {
        id,
        expression: expression.to_string(),
        reading: reading.to_string(),
        output: output.to_string(),
    }
}

fn dictionary() -> AccentDictionary {
    AccentDictionary::parse_user("橋\tはし\tLHL\n箸\tはし\tHLL\n").unwrap()
}

#[test]
fn add_then_remove() {
    let mut notes = vec![
        note(1, "橋", "はし", ""),
        note(2, " 箸 ", "はし", "chopsticks"),
        note(3, "端", "はし", ""),
    ];
    let dicts = [dictionary()];

    let report = add_pitch(&mut notes, &dicts);
    assert_eq!(
        report,
        AddReport {
            not_found: vec![(3, "端".to_string())],
            updated: 2,
            already_done: 0,
        }
    );
    assert_eq!(
        notes[0].output,
        format!(
            "<!-- accent_start -->{}<!-- accent_end -->",
            render("はし", "LHL", false)
        )
    );
    assert!(notes[1].output.starts_with("chopsticks<!-- accent_start --><br><hr><br><svg"));
    assert_eq!(notes[2].output, "");

    // a second pass leaves annotated notes alone
    let report = add_pitch(&mut notes, &dicts);
    assert_eq!(report.updated, 0);
    assert_eq!(report.already_done, 2);

    let report = remove_pitch(&mut notes, false);
    assert_eq!(report, RemoveReport { already_done: 1, updated: 2 });
    assert_eq!(notes[0].output, "");
    assert_eq!(notes[1].output, "chopsticks");
}

#[test]
fn user_diagrams_count_as_done() {
    let user_svg = "<!-- user_accent_start --><svg></svg><!-- user_accent_end -->";
    let mut notes = vec![note(7, "橋", "はし", user_svg)];

    let report = add_pitch(&mut notes, &[dictionary()]);
    assert_eq!(report.already_done, 1);
    assert_eq!(notes[0].output, user_svg);

    // generated-diagram removal does not touch user diagrams
    assert_eq!(remove_pitch(&mut notes, false).already_done, 1);
    assert_eq!(remove_pitch(&mut notes, true).updated, 1);
    assert_eq!(notes[0].output, "");
}

#[test]
fn report_serializes() {
    let report = AddReport {
        not_found: vec![(3, "端".to_string())],
        updated: 1,
        already_done: 0,
    };
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"not_found":[[3,"端"]],"updated":1,"already_done":0}"#);
}
