use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use bin2header::run;

fn args(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

fn run_capture(argv: Vec<OsString>) -> (i32, String) {
    let mut console = Vec::new();
    let code = run(argv, &mut console);
    (code, String::from_utf8(console).unwrap())
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn converts_seventeen_byte_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seq.bin");
    let output = dir.path().join("seq.h");
    std::fs::write(&input, (0x00u8..=0x10).collect::<Vec<_>>()).unwrap();

    let (code, console) = run_capture(args(&["bin2header", path_str(&input), path_str(&output)]));
    assert_eq!(code, 0);
    assert!(console.contains("Input file size: 0x11\n"));
    assert!(console.contains("Generating file, please wait...\n"));
    assert!(console.ends_with("Success!\n"));

    let header = std::fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("// seq.bin ("));
    assert!(header.contains("EndOffset: 0x00000011, Length: 17 bytes"));
    assert!(header.contains(
        "{\n    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, \n    0x10\n};\n"
    ));
}

#[test]
fn wrong_argument_count_prints_usage() {
    for argv in [args(&["bin2header"]), args(&["bin2header", "a"]), args(&["bin2header", "a", "b", "c"]), args(&[])] {
        let (code, console) = run_capture(argv);
        assert_eq!(code, 1);
        assert!(console.starts_with("Incorrect usage!\n"), "{console}");
        assert!(!console.contains("Input file:"));
    }
}

#[test]
fn usage_happens_before_any_file_io() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.h");
    std::fs::write(&input, [1u8, 2, 3]).unwrap();

    let (code, _) = run_capture(args(&["bin2header", path_str(&input), path_str(&output), "extra"]));
    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[test]
fn empty_input_is_a_read_failure_and_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    let output = dir.path().join("out.h");
    std::fs::write(&input, b"").unwrap();
    std::fs::write(&output, "previo").unwrap();

    let (code, console) = run_capture(args(&["bin2header", path_str(&input), path_str(&output)]));
    assert_eq!(code, 1);
    assert!(console.ends_with("Couldn't read input file\n"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previo");
}

#[test]
fn missing_input_is_a_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.bin");
    let output = dir.path().join("out.h");

    let (code, console) = run_capture(args(&["bin2header", path_str(&input), path_str(&output)]));
    assert_eq!(code, 1);
    assert!(console.ends_with("Couldn't read input file\n"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails_after_successful_read() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("no-such-dir").join("out.h");
    std::fs::write(&input, [0xAAu8]).unwrap();

    let (code, console) = run_capture(args(&["bin2header", path_str(&input), path_str(&output)]));
    assert_eq!(code, 1);
    assert!(console.contains("Input file size: 0x1\n"));
    assert!(console.ends_with("Couldn't write output file\n"));
    assert!(!console.contains("Success!"));
}

#[test]
fn binary_exit_codes() {
    let exe = env!("CARGO_BIN_EXE_bin2header");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("in.h");
    std::fs::write(&input, [0x42u8; 32]).unwrap();

    let ok = Command::new(exe).arg(&input).arg(&output).output().unwrap();
    assert_eq!(ok.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&ok.stdout).contains("Success!"));
    let header = std::fs::read_to_string(&output).unwrap();
    assert!(header.contains("Length: 32 bytes"));
    assert!(header.ends_with("0x42\n\n};\n"));

    let bad = Command::new(exe).arg(&input).output().unwrap();
    assert_eq!(bad.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&bad.stdout).starts_with("Incorrect usage!"));
}

#[cfg(unix)]
#[test]
fn binary_accepts_non_utf8_input_path() {
    use std::os::unix::ffi::OsStrExt;

    let exe = env!("CARGO_BIN_EXE_bin2header");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(std::ffi::OsStr::from_bytes(b"fw\xFF.bin"));
    let output = dir.path().join("fw.h");
    std::fs::write(&input, [1u8, 2, 3]).unwrap();

    let out = Command::new(exe).arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Success!"));
    let header = std::fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("// fw\u{FFFD}.bin ("), "{header}");
    assert!(header.contains("    0x01, 0x02, 0x03\n};\n"));
}
