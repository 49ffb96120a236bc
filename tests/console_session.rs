use pit_log::report::{parse_report, ReportRow};
use pit_log::{App, Pace, VehicleClass, MAX_SESSIONS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;
use std::path::Path;

type TestApp = App<Cursor<Vec<u8>>, Vec<u8>, StdRng>;

fn app(script: &str, report: &Path) -> TestApp {
    App::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        StdRng::seed_from_u64(2024),
    )
    .with_report_path(report)
}

fn run(mut app: TestApp) -> (TestApp, String) {
    app.run().unwrap();
    let out = String::from_utf8(app.output().clone()).unwrap();
    (app, out)
}

#[test]
fn add_view_save_quit() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.txt");
    let script = "1\nAna\nMonza\n2\n1\nBen\nSpa\n1\n2\n3\n4\n";

    let (app, out) = run(app(script, &report));

    assert!(out.starts_with("========================================\n"));
    assert_eq!(out.matches("Session added!").count(), 2);
    assert!(out.contains("Driver:        Ana\n"));
    assert!(out.contains("Vehicle:       Formula\n"));
    assert!(out.contains("Vehicle:       GT3\n"));
    assert!(out.contains(&format!("Report saved to {}\n", report.display())));
    assert!(out.ends_with("Goodbye!\n"));

    let sessions = app.store().sessions();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].vehicle(), VehicleClass::Formula);
    assert_eq!(sessions[1].vehicle(), VehicleClass::GT3);

    let rows = parse_report(&std::fs::read_to_string(&report).unwrap()).unwrap();
    let expected: Vec<ReportRow> = sessions.iter().map(ReportRow::from).collect();
    assert_eq!(rows.len(), expected.len());
    for (row, want) in rows.iter().zip(&expected) {
        assert_eq!(row.driver_name, want.driver_name);
        assert_eq!(row.track_name, want.track_name);
        assert_eq!(row.vehicle, want.vehicle);
        assert_eq!(format!("{:.2}", row.average_lap), format!("{:.2}", want.average_lap));
    }
}

#[test]
fn pace_message_follows_each_added_session() {
    let dir = tempfile::tempdir().unwrap();
    let script = "1\nKalle\nArctic\n3\n4\n";

    let (app, out) = run(app(script, &dir.path().join("report.txt")));

    let session = &app.store().sessions()[0];
    for lap in session.lap_times() {
        assert!((120.0..130.0).contains(lap));
    }
    assert_eq!(session.pace(), Pace::NeedsImprovement);
    assert!(out.contains("Average: "));
    assert!(out.contains("Room for improvement. Keep practicing!\n"));
}

#[test]
fn view_with_no_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = run(app("2\n4\n", &dir.path().join("report.txt")));
    assert!(out.contains("No sessions recorded.\n"));
}

#[test]
fn bad_menu_input_is_reprompted() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = run(app("zero\n7\n\n4\n", &dir.path().join("report.txt")));
    assert_eq!(out.matches("Invalid input.").count(), 3);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn undecodable_menu_line_is_reprompted() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(
        Cursor::new(b"\xff\xfe\n4\n".to_vec()),
        Vec::new(),
        StdRng::seed_from_u64(2024),
    )
    .with_report_path(dir.path().join("report.txt"));

    app.run().unwrap();

    let out = String::from_utf8(app.into_output()).unwrap();
    assert_eq!(out.matches("Invalid input.").count(), 1);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn store_refuses_sixth_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut script = String::new();
    for i in 0..MAX_SESSIONS {
        script.push_str(&format!("1\nDriver {i}\nTrack {i}\n1\n"));
    }
    script.push_str("1\n4\n");

    let (app, out) = run(app(&script, &dir.path().join("report.txt")));

    assert_eq!(app.store().len(), MAX_SESSIONS);
    assert_eq!(out.matches("Session added!").count(), MAX_SESSIONS);
    assert_eq!(out.matches("Session limit reached.").count(), 1);
}

#[test]
fn empty_store_saves_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.txt");
    run(app("3\n4\n", &report));

    let text = std::fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(parse_report(&text).unwrap().is_empty());
}

#[test]
fn save_failure_is_reported_and_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("no-such-dir").join("report.txt");

    let (_, out) = run(app("3\n4\n", &report));

    assert!(out.contains("Failed to save report: "));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn closed_input_ends_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let (app, out) = run(app("1\nAna\n", &dir.path().join("report.txt")));
    assert!(app.store().is_empty());
    assert!(!out.contains("Goodbye!"));
}
