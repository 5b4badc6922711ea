use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use RosterDB::{load_snapshot, write_snapshot, Registry, RegistryBuilder, Student};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("rostertest-restart-{prefix}-{pid}-{t}-{id}"))
}

fn open(path: &PathBuf) -> Registry {
    RegistryBuilder::from_default().snapshot_path(path).open()
}

#[test]
fn restart_restores_same_sequence() -> Result<()> {
    let root = unique_root("roundtrip");
    fs::create_dir_all(&root)?;
    let path = root.join("students.json");

    let expected = {
        let mut reg = open(&path);
        reg.add("Alice", 1, "A")?;
        reg.add("Bob", 2, "B")?;
        reg.add("Зоя", -3, "C-")?;
        reg.update(1, "Alice Liddell", "A+")?;
        reg.remove(2)?;
        reg.add("Bob", 2, "B")?;
        reg.list().to_vec()
        // drop: никакой финализации не требуется
    };

    let reg = open(&path);
    assert!(reg.load_error().is_none());
    assert_eq!(reg.list(), expected.as_slice());
    assert_eq!(
        expected.iter().map(|s| s.roll_number()).collect::<Vec<_>>(),
        vec![1, -3, 2]
    );
    Ok(())
}

#[test]
fn absent_snapshot_starts_empty() -> Result<()> {
    let root = unique_root("absent");
    let path = root.join("nested").join("students.json");

    let mut reg = open(&path);
    assert!(reg.list().is_empty());
    assert!(reg.load_error().is_none());

    // Первая запись создаёт каталоги
    reg.add("A", 1, "A")?;
    assert!(path.exists());
    assert!(!root.join("nested").join("students.json.tmp").exists());
    Ok(())
}

#[test]
fn empty_snapshot_file_starts_empty() -> Result<()> {
    let root = unique_root("emptyfile");
    fs::create_dir_all(&root)?;
    let path = root.join("students.json");
    fs::write(&path, b"")?;

    let reg = open(&path);
    assert!(reg.is_empty());
    assert!(reg.load_error().is_none());
    Ok(())
}

#[test]
fn corrupt_snapshot_falls_back_to_empty_and_is_left_on_disk() -> Result<()> {
    let root = unique_root("corrupt");
    fs::create_dir_all(&root)?;
    let path = root.join("students.json");
    let garbage = b"{\"version\":1,\"crc32\":0,\"students\":[{\"name\":";
    fs::write(&path, garbage)?;

    let reg = open(&path);
    assert!(reg.list().is_empty());
    assert!(reg.load_error().is_some());
    assert_eq!(fs::read(&path)?, garbage.to_vec(), "corrupt file must stay untouched");

    // Снапшот с неверной crc тоже считается битым
    write_snapshot(&path, &[Student::new("A", 1, "A")], false, false)?;
    let text = fs::read_to_string(&path)?.replace("\"A\"", "\"B\"");
    fs::write(&path, text)?;
    let reg = open(&path);
    assert!(reg.is_empty());
    assert!(reg.load_error().unwrap_or_default().contains("crc"));
    Ok(())
}

#[test]
fn corrupt_snapshot_is_replaced_by_next_write() -> Result<()> {
    let root = unique_root("overwrite");
    fs::create_dir_all(&root)?;
    let path = root.join("students.json");
    fs::write(&path, b"\xac\xed\x00\x05 java serialization")?;

    let mut reg = open(&path);
    assert!(reg.is_empty());
    reg.add("Fresh", 42, "A")?;

    let restored = load_snapshot(&path)?;
    assert_eq!(restored, vec![Student::new("Fresh", 42, "A")]);
    Ok(())
}

#[test]
fn compact_and_pretty_snapshots_restore_equally() -> Result<()> {
    let root = unique_root("pretty");
    fs::create_dir_all(&root)?;

    let students = vec![Student::new("Alice", 1, "A"), Student::new("Bob", 2, "B")];
    for pretty in [true, false] {
        let path = root.join(format!("students-{pretty}.json"));
        let mut reg = RegistryBuilder::from_default()
            .snapshot_path(&path)
            .pretty(pretty)
            .fsync(true)
            .open();
        for s in &students {
            reg.add(s.name(), s.roll_number(), s.grade())?;
        }
        let text = fs::read_to_string(&path)?;
        assert_eq!(text.contains('\n'), pretty);
        assert_eq!(open(&path).list(), students.as_slice());
    }
    Ok(())
}

#[test]
fn failed_write_leaves_no_tmp_file() -> Result<()> {
    let root = unique_root("tmpclean");
    fs::create_dir_all(&root)?;
    // На месте снапшота — непустой каталог: rename поверх него падает
    let path = root.join("students.json");
    fs::create_dir_all(&path)?;
    fs::write(path.join("keep"), b"x")?;

    let mut reg = open(&path);
    assert!(reg.is_empty());
    let err = reg.add("A", 1, "A").unwrap_err();
    assert!(matches!(err, RosterDB::RegistryError::Persist(_)));
    assert!(reg.is_empty());
    assert!(!root.join("students.json.tmp").exists(), "tmp file must be removed on failure");
    assert!(path.join("keep").exists());
    Ok(())
}

#[test]
fn unreadable_snapshot_is_reported_not_treated_as_absent() -> Result<()> {
    let root = unique_root("unreadable");
    fs::create_dir_all(&root)?;
    // Каталог вместо файла: чтение падает не с NotFound
    let path = root.join("students.json");
    fs::create_dir_all(&path)?;

    assert!(load_snapshot(&path).is_err());
    let reg = open(&path);
    assert!(reg.is_empty());
    assert!(reg.load_error().is_some(), "read failure must be surfaced for diagnostics");

    // Отсутствующий файл — по-прежнему без ошибки
    let reg = open(&root.join("absent.json"));
    assert!(reg.load_error().is_none());
    Ok(())
}
