//! E2E tests for the table, html, export and schema commands

use std::path::PathBuf;
use std::process::{Command, Output};

fn repview(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("repview-{}-{}", std::process::id(), name))
}

/// Test that the terminal table shows the newest entry first
#[test]
fn table_sorted_by_first_column() {
    let output = repview(&["table", "-r", "tests/data/report.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Dauer (min)"));

    let newest = stdout.find("2024-03-05").expect("newest date shown");
    let oldest = stdout.find("2023-12-31").expect("oldest date shown");
    assert!(newest < oldest);

    // Columns come from the first record only
    assert!(!stdout.contains("Bemerkung"));
    assert!(!stdout.contains("T08:30:00Z"));
}

/// Test table CSV output keeps the first record's field order
#[test]
fn table_csv_columns_from_first_record() {
    let output = repview(&["table", "-r", "tests/data/report.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Datum,Leistung,Dauer (min),Betrag");
    assert_eq!(lines[1], "2024-03-05,Kontrolle,20,35");
    assert_eq!(lines[3], "2023-12-31,Nachsorge,,40");
}

/// Test the legacy wrapper object is unwrapped
#[test]
fn table_legacy_wrapper() {
    let output = repview(&["table", "-r", "tests/data/legacy.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.starts_with("Datum,Leistung\n2024-02-08,Therapie\n"));
}

/// Test unusable inputs print the fallback messages
#[test]
fn table_fallback_messages() {
    let output = repview(&["table", "-r", "tests/data/broken.json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fehler beim Parsen der Report-Daten."));

    let output = repview(&["table", "-r", "tests/data/empty.json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keine Daten verfügbar oder Fehler beim Laden."));

    let output = repview(&["table", "-r", "tests/data/blank.json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Report-Inhalt ist leer."));
}

/// Test a list without records reports the missing columns
#[test]
fn table_without_columns() {
    let output = repview(&["table", "-r", "tests/data/scalars.json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fehler beim Erstellen der Tabelle"));
    assert!(stdout.contains("the report has no columns to display"));
}

/// Test the HTML page embeds the widget configuration
#[test]
fn html_page_with_metadata() {
    let path = temp_path("report.html");
    let output = repview(&[
        "html",
        "-r",
        "tests/data/report.json",
        "-m",
        "tests/data/meta.json",
        "-o",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(html.contains(r#"<div id="reportTable""#));
    assert!(html.contains("$('#reportTable-table').DataTable(config);"));
    assert!(html.contains(r#""filename":"Report_Jane Doe_2024-01-02""#));
    assert!(html.contains(r#""title":"Report für Jane Doe vom 2024-01-02""#));
    assert!(html.contains(r#""display":"2024-03-05""#));
    assert!(html.contains(r#""sort":"2024-03-05T00:00:00Z""#));
    assert!(html.contains(r#""order":[[0,"desc"]]"#));
    let language = r#""url":"https://cdn.datatables.net/plug-ins/1.10.24/i18n/German.json""#;
    assert!(html.contains(language));
}

/// Test a report serialized as a JSON string is parsed before rendering
#[test]
fn html_page_from_string_report() {
    let path = temp_path("string.html");
    let output = repview(&[
        "html",
        "-r",
        "tests/data/string_report.json",
        "-o",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(html.contains(r#""display":"2024-03-05""#));
    assert!(html.contains(r#""filename":"Report_Unbekannt_"#));
}

/// Test a broken report renders the parse error instead of a table
#[test]
fn html_page_parse_error() {
    let path = temp_path("broken.html");
    let output = repview(&[
        "html",
        "-r",
        "tests/data/broken.json",
        "-o",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let panel = r#"<p class="text-lg text-red-600">Fehler beim Parsen der Report-Daten.</p>"#;
    assert!(html.contains(panel));
    assert!(!html.contains("DataTable(config)"));
}

/// Test the CSV export is named after the metadata
#[test]
fn export_named_after_metadata() {
    let dir = temp_path("export");
    std::fs::create_dir_all(&dir).unwrap();
    let output = repview(&[
        "export",
        "-r",
        "tests/data/report.json",
        "-m",
        "tests/data/meta.json",
        "-d",
        dir.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let csv = std::fs::read_to_string(dir.join("Report_Jane Doe_2024-01-02.csv")).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    assert!(csv.starts_with("Datum,Leistung,Dauer (min),Betrag\n2024-03-05,"));
}

/// Test exporting without data fails with the fallback message
#[test]
fn export_without_data_fails() {
    let output = repview(&["export", "-r", "tests/data/empty.json", "-d", "."]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Keine Daten verfügbar"));
}

/// Test the metadata schema lists its fields
#[test]
fn schema_for_metadata() {
    let output = repview(&["schema", "meta"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("patientName"));
    assert!(stdout.contains("createdAt"));
}
