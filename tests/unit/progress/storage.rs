use super::*;

#[test]
fn memory_storage_round_trips() {
    let mut s = MemoryStorage::new();
    assert_eq!(s.read("k").unwrap(), None);
    s.write("k", "[true]").unwrap();
    assert_eq!(s.read("k").unwrap().as_deref(), Some("[true]"));
    assert_eq!(s.get("k"), Some("[true]"));
}

#[test]
fn unavailable_storage_always_fails() {
    let mut s = UnavailableStorage;
    assert!(matches!(s.read("k"), Err(RoadmapError::Storage(_))));
    assert!(s.write("k", "x").is_err());
}

#[test]
fn file_storage_missing_key_reads_none() {
    let dir = tempfile::tempdir().unwrap();
    let s = FileStorage::new(dir.path().join("nested"));
    assert_eq!(s.read("roadmapProgress").unwrap(), None);
}

#[test]
fn file_storage_writes_through_rename() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = FileStorage::new(dir.path().join("nested"));
    s.write("roadmapProgress", "[false,true]").unwrap();
    s.write("roadmapProgress", "[true,true]").unwrap();

    let path = s.path_for("roadmapProgress").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "[true,true]");
    assert_eq!(s.read("roadmapProgress").unwrap().as_deref(), Some("[true,true]"));

    let leftovers: Vec<_> = std::fs::read_dir(s.dir())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = FileStorage::new(dir.path());
    // A non-empty directory where the snapshot should go makes the rename fail.
    let target = s.path_for("roadmapProgress").unwrap();
    std::fs::create_dir_all(target.join("occupied")).unwrap();

    assert!(matches!(
        s.write("roadmapProgress", "[true]"),
        Err(RoadmapError::Other(_))
    ));
    assert!(!dir.path().join(".roadmapProgress.json.tmp").exists());
    assert!(target.is_dir());
}

#[test]
fn file_storage_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = FileStorage::new(dir.path());
    assert!(matches!(s.read("../x"), Err(RoadmapError::Validation(_))));
    assert!(s.write("a/b", "1").is_err());
    assert!(s.path_for("").is_err());
}

#[test]
fn boxed_storage_delegates() {
    let mut s: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
    s.write("k", "v").unwrap();
    assert_eq!(s.read("k").unwrap().as_deref(), Some("v"));
}
