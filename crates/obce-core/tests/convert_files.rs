use obce_core::{convert, read_listing, ObceError};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE: &str = r#"{"municipalities":[{"hezkyNazev":"Praha","souradnice":[50.08,14.43]},{"hezkyNazev":"NoCoords","souradnice":[]},{"hezkyNazev":"Brno","souradnice":[49.2,16.6]}]}"#;
const EXPECTED: &str = "\"Praha\" 50.08 14.43\n\"Brno\" 49.2 16.6\n";

fn write_input(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn converts_file_to_listing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let output = dir.path().join("output.txt");

    let summary = convert(&input, &output).unwrap();

    assert_eq!(read(&output), EXPECTED);
    assert_eq!(summary.municipalities, 3);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let output = dir.path().join("output.txt");
    fs::write(&output, "stale content that is much longer than the new listing\n".repeat(10)).unwrap();

    convert(&input, &output).unwrap();

    assert_eq!(read(&output), EXPECTED);
}

#[test]
fn conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    convert(&input, &first).unwrap();
    convert(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn empty_municipalities_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", r#"{"municipalities":[]}"#);
    let output = dir.path().join("output.txt");

    convert(&input, &output).unwrap();

    assert!(output.exists());
    assert_eq!(fs::metadata(&output).unwrap().len(), 0);
}

#[test]
fn missing_municipalities_fails_before_output_is_created() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", r#"{"cities":[]}"#);
    let output = dir.path().join("output.txt");

    let err = convert(&input, &output).unwrap_err();

    assert!(err.is_schema(), "{err}");
    assert!(!output.exists());
}

#[test]
fn missing_input_is_reported_as_not_found() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.txt");

    let err = convert(dir.path().join("nope.json"), &output).unwrap_err();

    assert!(matches!(err, ObceError::NotFound(_)), "{err}");
    assert!(err.is_io());
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let output = dir.path().join("missing-dir").join("output.txt");

    let err = convert(&input, &output).unwrap_err();

    assert!(matches!(err, ObceError::Io(_)), "{err}");
}

#[test]
fn preserves_unicode_and_quotes_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "obce.json",
        r#"{"municipalities":[{"hezkyNazev":"Černošice \"u Prahy\"","souradnice":[49.96,14.32]}]}"#,
    );
    let output = dir.path().join("output.txt");

    convert(&input, &output).unwrap();

    assert_eq!(read(&output), "\"Černošice \"u Prahy\"\" 49.96 14.32\n");
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_input() {
    let dir = TempDir::new().unwrap();
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let input = dir.path().join("obce.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();
    let output = dir.path().join("output.txt");

    convert(&input, &output).unwrap();

    assert_eq!(read(&output), EXPECTED);
}

#[test]
fn listing_reads_back_in_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let output = dir.path().join("output.txt");
    convert(&input, &output).unwrap();

    let entries = read_listing(BufReader::new(fs::File::open(&output).unwrap())).unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Praha", "Brno"]);
    assert_eq!(entries[1].coordinates.as_f64(), Some((49.2, 16.6)));
}

#[test]
fn listing_with_count_header_reads_back() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "obce.json", SAMPLE);
    let output = dir.path().join("output.txt");
    let summary = convert(&input, &output).unwrap();

    let with_header = format!("{}\n{}", summary.written, read(&output));
    let entries = read_listing(with_header.as_bytes()).unwrap();
    assert_eq!(entries.len(), 2);

    let wrong_count = format!("3\n{}", read(&output));
    let err = read_listing(wrong_count.as_bytes()).unwrap_err();
    assert!(matches!(err, ObceError::Listing { line: 1, .. }), "{err}");
}
