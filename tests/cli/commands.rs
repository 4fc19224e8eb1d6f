use crate::common::{TempWorkspace, textfile};
use predicates::prelude::*;
use std::fs;

#[test]
fn create_todo_template() {
    let ws = TempWorkspace::new("create_todo");
    let file = ws.join("todo.md");

    textfile()
        .arg("create")
        .arg(&file)
        .args(["-t", "todo"])
        .assert()
        .success()
        .stdout(format!("File created: {}\n", file.display()));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "# To-Do List\n\n- [ ] Task 1\n- [ ] Task 2\n- [ ] Task 3\n"
    );
}

#[test]
fn create_note_and_memo_headers() {
    let ws = TempWorkspace::new("create_dated");
    let note = ws.join("note.md");
    let memo = ws.join("memo.txt");

    textfile().arg("create").arg(&note).args(["--template", "note"]).assert().success();
    textfile().arg("create").arg(&memo).args(["--template", "memo"]).assert().success();

    let note = fs::read_to_string(&note).unwrap();
    assert!(note.starts_with("# Note created on "));
    assert!(note.ends_with("\n\n"));

    let memo = fs::read_to_string(&memo).unwrap();
    assert!(memo.starts_with("MEMO\nDate: "));
    assert!(memo.ends_with("\nSubject: \n\n"));
}

#[test]
fn create_makes_parent_directories() {
    let ws = TempWorkspace::new("create_nested");
    let file = ws.join("deep/er/blank.txt");

    textfile().arg("create").arg(&file).assert().success();

    assert!(ws.path().join("deep/er").is_dir());
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn declined_overwrite_keeps_file() {
    let ws = TempWorkspace::new("overwrite_no");
    let file = ws.create_file("keep.txt", "precious\n");

    textfile()
        .arg("create")
        .arg(&file)
        .args(["-t", "todo"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists. Overwrite? (y/n): "))
        .stdout(predicate::str::contains("Operation cancelled."));

    assert_eq!(fs::read_to_string(&file).unwrap(), "precious\n");
}

#[test]
fn accepted_overwrite_replaces_file() {
    let ws = TempWorkspace::new("overwrite_yes");
    let file = ws.create_file("replace.txt", "old\n");

    textfile()
        .arg("create")
        .arg(&file)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File created:"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn view_with_line_numbers() {
    let ws = TempWorkspace::new("view_numbers");
    let file = ws.create_file("poem.txt", "roses\nviolets\n");

    textfile()
        .arg("view")
        .arg(&file)
        .arg("-n")
        .assert()
        .success()
        .stdout(format!(
            "\n--- {} ---\n\n   1 | roses\n   2 | violets\n\n\n--- End of file (2 lines) ---\n\n",
            file.display()
        ));
}

#[test]
fn view_missing_file_fails() {
    let ws = TempWorkspace::new("view_missing");
    let file = ws.join("ghost.txt");

    textfile()
        .arg("view")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(format!("Error: File '{}' does not exist.\n", file.display()));
}

#[test]
fn info_counts_without_trailing_newline() {
    let ws = TempWorkspace::new("info_plain");
    let file = ws.create_file("abc.txt", "a b c");

    textfile()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 5 bytes"))
        .stdout(predicate::str::contains("Lines: 1\nWords: 3\nCharacters: 5\n"))
        .stdout(predicate::str::is_match(r"Created: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\n").unwrap())
        .stdout(predicate::str::is_match(r"Modified: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\n").unwrap());
}

#[test]
fn info_counts_with_trailing_newline() {
    let ws = TempWorkspace::new("info_newline");
    let file = ws.create_file("abc.txt", "a b c\n");

    textfile()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines: 1\nWords: 3\nCharacters: 6\n"));
}

#[test]
fn visual_takes_priority_over_editor() {
    let ws = TempWorkspace::new("edit_priority");
    let file = ws.create_file("a.txt", "");

    textfile()
        .env("VISUAL", "textfile-missing-visual")
        .env("EDITOR", "textfile-missing-editor")
        .arg("edit")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Failed to launch editor 'textfile-missing-visual'",
        ));
}

#[test]
fn edit_declined_creation() {
    let ws = TempWorkspace::new("edit_declined");
    let file = ws.join("nothing.txt");

    textfile()
        .env("VISUAL", "textfile-missing-visual")
        .arg("edit")
        .arg(&file)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Error: File '{}' does not exist.\nWould you like to create it? (y/n): ",
            file.display()
        )))
        .stdout(predicate::str::contains("Operation cancelled."));

    assert!(!file.exists());
}

#[cfg(unix)]
#[test]
fn edit_creates_file_before_launching() {
    let ws = TempWorkspace::new("edit_create");
    let file = ws.join("sub/new.txt");

    textfile()
        .env("EDITOR", "true")
        .arg("edit")
        .arg(&file)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("File created: {}", file.display())))
        .stdout(predicate::str::contains(format!("File edited: {}", file.display())));

    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}
