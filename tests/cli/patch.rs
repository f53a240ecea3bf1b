use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const TARGET: &str =
    ".pio/libdeps/esp32dev/ArduinoAudioTools/src/AudioTools/CoreAudio/AudioHttp/HttpLineReader.h";
const PATCH: &str = "helper/patches/yield_in_linereader.patch";
const SENTINEL: &str = ".pio/libdeps/esp32dev/ArduinoAudioTools/.patching-done";

const YIELD_PATCH: &str = "\
--- a/HttpLineReader.h
+++ b/HttpLineReader.h
@@ -1,3 +1,3 @@
 a
-b
+B
 c
";

#[test]
fn test_sentinel_present_is_noop() -> Result<()> {
    // Neither the target nor the patch exists.
    let test = CliTest::with_file(SENTINEL, "")?;

    assert_cmd_snapshot!(test.patch_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sentinel_present_verbose() -> Result<()> {
    let test = CliTest::with_file(SENTINEL, "")?;

    assert_cmd_snapshot!(test.patch_command().arg("--verbose"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Skipping [PROJECT]/.pio/libdeps/esp32dev/ArduinoAudioTools: already patched

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_target_aborts() -> Result<()> {
    let test = CliTest::with_file(PATCH, YIELD_PATCH)?;

    assert_cmd_snapshot!(test.patch_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Patch target not found: [PROJECT]/.pio/libdeps/esp32dev/ArduinoAudioTools/src/AudioTools/CoreAudio/AudioHttp/HttpLineReader.h
    ");
    assert!(!test.exists(SENTINEL));

    Ok(())
}

#[test]
fn test_missing_patch_file_aborts() -> Result<()> {
    let test = CliTest::with_file(TARGET, "a\nb\nc\n")?;

    assert_cmd_snapshot!(test.patch_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Patch file not found: [PROJECT]/helper/patches/yield_in_linereader.patch
    ");
    assert!(!test.exists(SENTINEL));

    Ok(())
}

#[test]
fn test_dry_run_prints_and_changes_nothing() -> Result<()> {
    let test = CliTest::with_file(TARGET, "a\nb\nc\n")?;
    test.write_file(PATCH, YIELD_PATCH)?;

    assert_cmd_snapshot!(test.patch_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    would run: patch [PROJECT]/.pio/libdeps/esp32dev/ArduinoAudioTools/src/AudioTools/CoreAudio/AudioHttp/HttpLineReader.h [PROJECT]/helper/patches/yield_in_linereader.patch
    would create: [PROJECT]/.pio/libdeps/esp32dev/ArduinoAudioTools/.patching-done

    ----- stderr -----
    ");
    assert!(!test.exists(SENTINEL));
    assert_eq!(test.read_file(TARGET)?, "a\nb\nc\n");

    Ok(())
}

#[test]
fn test_configured_patches() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".esperrc.json",
        r#"{
             "patches": [
               { "dependencyDir": "lib/first", "target": "a.h", "patch": "p/a.patch", "sentinel": ".done" },
               { "dependencyDir": "lib/second", "target": "b.h", "patch": "p/b.patch" }
             ]
         }"#,
    )?;
    test.write_file("lib/first/.done", "")?;
    test.write_file("lib/second/b.h", "int b;\n")?;
    test.write_file("p/b.patch", "--- a\n+++ b\n")?;

    assert_cmd_snapshot!(test.patch_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    would run: patch [PROJECT]/lib/second/b.h [PROJECT]/p/b.patch
    would create: [PROJECT]/lib/second/.patching-done

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_applies_once_with_system_patch() -> Result<()> {
    let test = CliTest::with_file(TARGET, "a\nb\nc\n")?;
    test.write_file(PATCH, YIELD_PATCH)?;

    // `patch` prints its own progress, which differs between versions.
    let output = test.system_patch_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file(TARGET)?, "a\nB\nc\n");
    assert!(test.exists(SENTINEL));

    assert_cmd_snapshot!(test.system_patch_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");
    assert_eq!(test.read_file(TARGET)?, "a\nB\nc\n");

    Ok(())
}

#[test]
fn test_failed_patch_leaves_no_sentinel() -> Result<()> {
    let test = CliTest::with_file(TARGET, "x\ny\nz\n")?;
    test.write_file(PATCH, YIELD_PATCH)?;

    let output = test.system_patch_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(
        stderr.lines().last().unwrap_or_default(),
        @"Error: `patch [PROJECT]/.pio/libdeps/esp32dev/ArduinoAudioTools/src/AudioTools/CoreAudio/AudioHttp/HttpLineReader.h [PROJECT]/helper/patches/yield_in_linereader.patch` failed (exit status: 1)"
    );
    assert!(!test.exists(SENTINEL));

    Ok(())
}
