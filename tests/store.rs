// tests/store.rs
use tempfile::TempDir;
use vn_slang::{data::SlangDictionary, error::Error, store};

fn sample() -> SlangDictionary {
    [
        ("trẻ trâu", "Một người trẻ tuổi hành xử bồng bột."),
        ("gét gô", "Bắt đầu thôi — “let’s go”."),
        ("ascii", "plain"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn round_trip_keeps_non_ascii() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");

    let dict = sample();
    store::save(&path, &dict).unwrap();
    let back = store::load(&path).unwrap();
    assert_eq!(back, dict);
}

#[test]
fn file_is_literal_utf8_with_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    store::save(&path, &sample()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"trẻ trâu\": \"Một người trẻ tuổi hành xử bồng bột.\""));
    assert!(!text.contains("\\u"));
    assert!(text.lines().any(|l| l.starts_with("    \"") && !l.starts_with("     ")));
}

#[test]
fn missing_file_is_empty_dictionary() {
    let dir = TempDir::new().unwrap();
    let dict = store::load(&dir.path().join("nope.json")).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn save_creates_parent_dirs_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/slang_dict.json");

    store::save(&path, &sample()).unwrap();
    let smaller: SlangDictionary = [("chỉ một", "một mục")].into_iter().collect();
    store::save(&path, &smaller).unwrap();

    assert_eq!(store::load(&path).unwrap(), smaller);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_snapshot_is_a_store_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = store::load(&path).unwrap_err();
    assert!(matches!(err, Error::Store { .. }));
}

#[test]
fn non_string_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    std::fs::write(&path, r#"{"a": 1}"#).unwrap();
    assert!(store::load(&path).is_err());
}
