//! Command line tests — run the `draw-pitch` binary and check its stdout.

use std::process::Command;

use pitchlib::render;
use pretty_assertions::assert_eq;

const USAGE: &str = "usage: draw-pitch <word> <pattern>\n";

fn draw_pitch(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_draw-pitch"))
        .args(args)
        .output()
        .expect("Failed to run draw-pitch");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn two_arguments_print_svg() {
    let stdout = draw_pitch(&["はし", "HLL"]);
    assert_eq!(stdout, format!("{}\n", render("はし", "HLL", true)));
}

#[test]
fn other_argument_counts_print_usage() {
    assert_eq!(draw_pitch(&[]), USAGE);
    assert_eq!(draw_pitch(&["はし"]), USAGE);
    assert_eq!(draw_pitch(&["はし", "HLL", "extra"]), USAGE);
    assert_eq!(draw_pitch(&["--help"]), USAGE);
    assert_eq!(draw_pitch(&["--version"]), USAGE);
}

#[test]
fn hyphen_led_arguments_render() {
    assert_eq!(draw_pitch(&["-x", "HL"]), format!("{}\n", render("-x", "HL", true)));
    assert_eq!(draw_pitch(&["-1", "HL"]), format!("{}\n", render("-1", "HL", true)));
}
