// tests/refresh.rs
//
// Full refresh pipeline with offline sources: snapshot → passes → snapshot.
mod common;

use common::{DownSource, FixtureSource, LEARNVN_HTML, PairsSource, TALKPAL_HTML};
use tempfile::TempDir;
use vn_slang::{
    config::options::RefreshPolicy,
    data::SlangDictionary,
    error::Error,
    progress::Progress,
    scrape,
    specs::{learnvn, talkpal, Source},
    store,
};

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<(String, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.begun = Some(total); }
    fn item_done(&mut self, source: &str, entries: usize) { self.done.push((source.to_string(), entries)); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn fixtures_merge_with_learnvn_last() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");

    let b = FixtureSource { inner: &talkpal::SOURCE, doc: TALKPAL_HTML };
    let a = FixtureSource { inner: &learnvn::SOURCE, doc: LEARNVN_HTML };
    let sources: [&dyn Source; 2] = [&b, &a];

    let mut rec = Recorder::default();
    let (dict, summary) = scrape::update(&path, &sources, Some(&mut rec)).unwrap();

    // Both sources define "trẻ trâu"; learnvn runs last and wins.
    assert_eq!(dict.get("trẻ trâu"), Some("Định nghĩa thứ hai, xuất hiện sau."));
    assert_eq!(dict.get("flex"), Some("Khoe khoang thành tích hoặc đồ đắt tiền."));
    assert!(dict.contains("gét gô"));

    assert_eq!(summary.previous, 0);
    assert_eq!(summary.total, dict.len());
    assert_eq!(summary.passes, vec![("talkpal", 5), ("learningvietnamese", 4)]);

    assert_eq!(rec.begun, Some(2));
    assert_eq!(rec.done.len(), 2);
    assert!(rec.finished);

    assert_eq!(store::load(&path).unwrap(), dict);
}

#[test]
fn snapshot_keys_survive_unless_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    let old: SlangDictionary = [("a", "1"), ("keep", "me")].into_iter().collect();
    store::save(&path, &old).unwrap();

    let b = PairsSource { name: "b", pairs: vec![("a", "2"), ("b", "3")] };
    let a = PairsSource { name: "a", pairs: vec![("a", "4")] };
    let sources: [&dyn Source; 2] = [&b, &a];

    let (dict, summary) = scrape::update(&path, &sources, None).unwrap();
    let expected: SlangDictionary = [("a", "4"), ("b", "3"), ("keep", "me")].into_iter().collect();
    assert_eq!(dict, expected);
    assert_eq!(summary.previous, 2);
}

#[test]
fn failing_source_aborts_and_keeps_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    let old: SlangDictionary = [("a", "1")].into_iter().collect();
    store::save(&path, &old).unwrap();

    let good = PairsSource { name: "good", pairs: vec![("b", "2")] };
    let sources: [&dyn Source; 2] = [&good, &DownSource];

    let mut rec = Recorder::default();
    let err = scrape::update(&path, &sources, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
    assert!(rec.finished);
    assert_eq!(store::load(&path).unwrap(), old);
}

#[test]
fn failed_save_still_finishes_progress() {
    let dir = TempDir::new().unwrap();
    // A regular file where the snapshot's directory should be.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a dir").unwrap();
    let path = blocker.join("slang_dict.json");

    let src = PairsSource { name: "p", pairs: vec![("x", "y")] };
    let sources: [&dyn Source; 1] = [&src];

    let mut rec = Recorder::default();
    let err = scrape::update(&path, &sources, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Store { .. }));
    assert_eq!(rec.done.len(), 1);
    assert!(rec.finished);
}

#[test]
fn policy_if_missing_scrapes_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    let src = PairsSource { name: "p", pairs: vec![("x", "y")] };
    let sources: [&dyn Source; 1] = [&src];

    let first = scrape::load_with_policy(&path, RefreshPolicy::IfMissing, &sources, None).unwrap();
    assert_eq!(first.get("x"), Some("y"));

    // Snapshot exists now: a dead source must not be touched.
    let dead: [&dyn Source; 1] = [&DownSource];
    let second = scrape::load_with_policy(&path, RefreshPolicy::IfMissing, &dead, None).unwrap();
    assert_eq!(second, first);
}

#[test]
fn policy_never_and_always() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slang_dict.json");
    let dead: [&dyn Source; 1] = [&DownSource];

    let empty = scrape::load_with_policy(&path, RefreshPolicy::Never, &dead, None).unwrap();
    assert!(empty.is_empty());
    assert!(!path.exists());

    let err = scrape::load_with_policy(&path, RefreshPolicy::Always, &dead, None).unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
}

#[test]
fn policy_parses_from_flags() {
    assert_eq!("never".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::Never);
    assert_eq!("if-missing".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::IfMissing);
    assert_eq!("ALWAYS".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::Always);
    assert!("sometimes".parse::<RefreshPolicy>().is_err());
    assert_eq!(RefreshPolicy::default(), RefreshPolicy::IfMissing);
}
