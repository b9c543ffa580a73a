//! End-to-end interpreter scenarios: one session, one store, raw input
//! lines in, transcript lines out.

use deskshell::{TerminalSession, VirtualFileStore};

fn fixtures() -> (VirtualFileStore, TerminalSession) {
    (VirtualFileStore::seeded(), TerminalSession::new())
}

#[test]
fn mkdir_then_ls_shows_the_new_directory() {
    let (mut store, mut session) = fixtures();

    let result = session.execute(&mut store, "mkdir projects");
    assert!(!result.is_error);

    let result = session.execute(&mut store, "ls");
    assert!(result.output.contains(&"\u{1F4C1} projects/".to_string()));
}

#[test]
fn echo_does_not_write_files() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "touch note.txt");
    session.execute(&mut store, "echo hi");

    let result = session.execute(&mut store, "cat note.txt");
    assert!(!result.is_error);
    assert_eq!(result.output, vec![""]);
}

#[test]
fn cd_dotdot_stops_at_the_root() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "cd ..");
    assert_eq!(session.cwd(), "/Users");
    session.execute(&mut store, "cd ..");
    assert_eq!(session.cwd(), "/");
    session.execute(&mut store, "cd ..");
    assert_eq!(session.cwd(), "/");
}

#[test]
fn rm_missing_file_reports_and_leaves_store_unchanged() {
    let (mut store, mut session) = fixtures();
    let before = store.snapshot();

    let result = session.execute(&mut store, "rm missingfile");
    assert!(result.is_error);
    assert_eq!(
        result.output,
        vec!["rm: cannot remove 'missingfile': No such file or directory"]
    );
    assert_eq!(*store.snapshot(), *before);
}

#[test]
fn mkdir_collision_keeps_a_single_child() {
    let (mut store, mut session) = fixtures();

    assert!(!session.execute(&mut store, "mkdir docs").is_error);

    let result = session.execute(&mut store, "mkdir docs");
    assert!(result.is_error);
    assert_eq!(result.output, vec!["mkdir: cannot create directory 'docs'"]);

    let count = store
        .list("/Users/guest")
        .unwrap()
        .iter()
        .filter(|c| c.name == "docs")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn a_full_working_session() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "cd Documents");
    assert_eq!(session.prompt(), "guest@desktop:~/Documents$");

    let result = session.execute(&mut store, "cat README.txt");
    assert_eq!(result.output[0], "Welcome to the Desktop OS!");

    session.execute(&mut store, "cd Projects");
    let result = session.execute(&mut store, "ls");
    assert_eq!(result.output, vec!["(empty directory)"]);

    session.execute(&mut store, "touch main.rs");
    let result = session.execute(&mut store, "ls");
    assert_eq!(result.output, vec!["\u{1F4C4} main.rs"]);

    let result = session.execute(&mut store, "pwd");
    assert_eq!(result.output, vec!["/Users/guest/Documents/Projects"]);

    session.execute(&mut store, "rm main.rs");
    let result = session.execute(&mut store, "ls");
    assert_eq!(result.output, vec!["(empty directory)"]);
}

#[test]
fn tilde_paths_work_from_anywhere() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "cd /System/Library");

    let result = session.execute(&mut store, "ls ~/Documents");
    assert!(result.output.contains(&"\u{1F4C4} README.txt".to_string()));

    session.execute(&mut store, "cd ~");
    assert_eq!(session.cwd(), "/Users/guest");
}

#[test]
fn deleted_cwd_fails_relative_operations_until_cd() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "cd Pictures/Vacation");
    // Delete the cwd (and its parent) out from under the session.
    let result = session.execute(&mut store, "rm /Users/guest/Pictures");
    assert!(!result.is_error);

    // Relative resolution keeps failing with ordinary errors.
    let result = session.execute(&mut store, "ls");
    assert!(result.is_error);
    let result = session.execute(&mut store, "touch stranded.txt");
    assert!(result.is_error);
    assert_eq!(session.cwd(), "/Users/guest/Pictures/Vacation");

    // A cd to a live directory recovers the session.
    let result = session.execute(&mut store, "cd ~");
    assert!(!result.is_error);
    assert!(!session.execute(&mut store, "ls").is_error);
}

#[test]
fn unknown_and_blank_input_behave_differently() {
    let (mut store, mut session) = fixtures();

    let result = session.execute(&mut store, "LS");
    assert!(result.is_error);
    assert_eq!(result.output, vec!["LS: command not found"]);

    let blank = session.execute(&mut store, "");
    assert!(!blank.is_error);
    assert!(blank.output.is_empty());

    // Only the failed command entered recall.
    assert_eq!(session.recall(), ["LS"]);
}

#[test]
fn transcript_mirrors_the_displayed_conversation() {
    let (mut store, mut session) = fixtures();

    session.execute(&mut store, "pwd");
    session.execute(&mut store, "nope");

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3); // banner + two commands
    assert_eq!(transcript[1].command, "pwd");
    assert_eq!(transcript[1].output, vec!["/Users/guest"]);
    assert!(!transcript[1].is_error);
    assert_eq!(transcript[2].command, "nope");
    assert!(transcript[2].is_error);

    session.execute(&mut store, "clear");
    assert!(session.transcript().is_empty());
}
