//! Integration tests for the terminal editing session.
//!
//! Feeds command text through [`Session`] exactly as the binary does and
//! checks the resulting snapshot and rendered output.

use std::io::Cursor;

use scriptboard_cli::config::{CliConfig, SeedKind};
use scriptboard_cli::session::{Outcome, Session};
use scriptboard_core::SegmentId;

fn ids(session: &Session) -> Vec<SegmentId> {
    session.board().segments().iter().map(|s| s.id).collect()
}

fn batch(session: &mut Session, commands: &str) -> (Outcome, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = session
        .run_batch(commands, &mut out, &mut err)
        .expect("batch should not hit an I/O error");
    (
        outcome,
        String::from_utf8(out).expect("utf-8 output"),
        String::from_utf8(err).expect("utf-8 errors"),
    )
}

// ---------------------------------------------------------------------------
// Test: batch mode
// ---------------------------------------------------------------------------

/// The create / delete / move walkthrough expressed as commands.
#[test]
fn batch_create_delete_move() {
    let mut session = Session::new(&CliConfig::default());
    let (outcome, _, err) = batch(&mut session, "new; delete 3; down");

    assert_eq!(outcome, Outcome::Continue);
    assert!(err.is_empty(), "unexpected errors: {err}");
    assert_eq!(ids(&session), vec![1, 0, 2]);
    assert_eq!(session.board().active_id(), 0);
}

/// Field edits land on the active scene and show up in the next render.
#[test]
fn batch_edits_render() {
    let mut session = Session::new(&CliConfig::default());
    let (_, out, err) = batch(
        &mut session,
        "new; set title Cold Open; set cinematography.lighting Silhouette; tag Epic; show",
    );
    assert!(err.is_empty());

    let seg = session.board().active_segment();
    assert_eq!(seg.title, "Cold Open");
    assert_eq!(seg.cinematography.lighting, "Silhouette");
    assert_eq!(seg.tags, vec!["Epic"]);
    assert!(out.contains("> 04 #3 Cold Open"));
    assert!(out.contains("[Medium Shot (MS)] [Epic]"));
}

/// A bad command in the middle of a batch is reported and skipped.
#[test]
fn batch_continues_after_bad_command() {
    let mut session = Session::new(&CliConfig::default());
    let (_, _, err) = batch(&mut session, "select x; frobnicate; select 2");

    assert_eq!(err.lines().count(), 2);
    assert!(err.contains("Invalid argument for 'select'"));
    assert!(err.contains("Unknown command 'frobnicate'"));
    assert_eq!(session.board().active_id(), 2);
}

/// Blank seed: the only scene cannot be deleted.
#[test]
fn blank_seed_refuses_last_delete() {
    let config = CliConfig {
        seed: SeedKind::Blank,
        ..CliConfig::default()
    };
    let mut session = Session::new(&config);
    let (_, out, _) = batch(&mut session, "delete; delete 0");

    assert_eq!(ids(&session), vec![0]);
    assert!(!out.contains("[delete"));
}

#[test]
fn project_title_command_updates_header() {
    let mut session = Session::new(&CliConfig::default());
    let (_, out, _) = batch(&mut session, "project PROJECT: ORBIT");
    assert_eq!(session.board().project_title(), "PROJECT: ORBIT");
    assert!(out.starts_with("PROJECT: ORBIT\n"));
}

// ---------------------------------------------------------------------------
// Test: interactive mode
// ---------------------------------------------------------------------------

/// Lines after `quit` are never executed.
#[test]
fn interactive_stops_at_quit() {
    let mut session = Session::new(&CliConfig::default());
    let input = Cursor::new("new\nselect 1\nquit\nnew\n");
    let mut out = Vec::new();
    let mut err = Vec::new();

    session
        .run_interactive(input, &mut out, &mut err)
        .expect("interactive run should succeed");

    assert_eq!(session.board().len(), 4);
    assert_eq!(session.board().active_id(), 1);
}

/// End of input ends the session without error.
#[test]
fn interactive_ends_at_eof() {
    let mut session = Session::new(&CliConfig::default());
    let input = Cursor::new("up\n# comment\n\ndown\n");
    let mut out = Vec::new();
    let mut err = Vec::new();

    session
        .run_interactive(input, &mut out, &mut err)
        .expect("interactive run should succeed");

    assert!(err.is_empty());
    assert_eq!(ids(&session), vec![1, 0, 2]);
}
