//! Snapshot of the whole roster on disk.
//!
//! Формат: JSON-файл (по умолчанию ./students.json)
//! {
//!   "version": 1,
//!   "crc32": <u32>,
//!   "students": [
//!     {"name":"Alice","roll_number":1,"grade":"A"},
//!     ...
//!   ]
//! }
//!
//! Замечания:
//! - crc32 (crc32fast) считается по компактной JSON-кодировке массива students.
//! - Файл всегда переписывается целиком: tmp + rename.
//! - Отсутствующий или пустой файл = пустой реестр.
//! - Битый файл (JSON, версия, crc, дубликаты roll number) или ошибка чтения
//!   (кроме NotFound) = ошибка; решение о fallback принимает вызывающая
//!   сторона, файл не трогаем.

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::consts::{SNAPSHOT_TMP_SUFFIX, SNAPSHOT_VERSION};
use crate::student::Student;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    crc32: u32,
    students: &'a [Student],
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    crc32: u32,
    students: Vec<Student>,
}

fn students_crc(students: &[Student]) -> Result<u32> {
    let canon = serde_json::to_vec(students).context("serialize students for crc")?;
    Ok(crc32fast::hash(&canon))
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(SNAPSHOT_TMP_SUFFIX);
    PathBuf::from(name)
}

/// Прочитать снапшот целиком.
pub fn load_snapshot(path: &Path) -> Result<Vec<Student>> {
    // Только NotFound = пустой реестр; прочие ошибки чтения (права, каталог) — наверх.
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("snapshot {} absent, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    decode_snapshot(&bytes).with_context(|| format!("decode snapshot {}", path.display()))
}

pub(crate) fn decode_snapshot(bytes: &[u8]) -> Result<Vec<Student>> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    let snap: SnapshotIn = serde_json::from_slice(bytes).context("parse snapshot json")?;
    if snap.version != SNAPSHOT_VERSION {
        return Err(anyhow!(
            "unsupported snapshot version {} (expected {})",
            snap.version,
            SNAPSHOT_VERSION
        ));
    }

    let crc = students_crc(&snap.students)?;
    if crc != snap.crc32 {
        return Err(anyhow!(
            "snapshot crc mismatch: stored={:#010x}, computed={:#010x}",
            snap.crc32,
            crc
        ));
    }

    let mut seen = HashSet::with_capacity(snap.students.len());
    for s in &snap.students {
        if !seen.insert(s.roll_number()) {
            return Err(anyhow!("duplicate roll number {} in snapshot", s.roll_number()));
        }
    }

    Ok(snap.students)
}

pub(crate) fn encode_snapshot(students: &[Student], pretty: bool) -> Result<Vec<u8>> {
    let out = SnapshotOut {
        version: SNAPSHOT_VERSION,
        crc32: students_crc(students)?,
        students,
    };
    let data = if pretty {
        serde_json::to_vec_pretty(&out)
    } else {
        serde_json::to_vec(&out)
    }
    .context("serialize snapshot")?;
    Ok(data)
}

fn write_tmp(tmp: &Path, data: &[u8], fsync: bool) -> Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp)
        .with_context(|| format!("open {}", tmp.display()))?;
    f.write_all(data)
        .with_context(|| format!("write {}", tmp.display()))?;
    if fsync {
        f.sync_all()
            .with_context(|| format!("fsync {}", tmp.display()))?;
    }
    Ok(())
}

/// Записать снапшот целиком (tmp + rename). Возвращает размер в байтах.
pub fn write_snapshot(path: &Path, students: &[Student], pretty: bool, fsync: bool) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }

    let data = encode_snapshot(students, pretty)?;
    let tmp = tmp_path(path);

    if let Err(e) = write_tmp(&tmp, &data, fsync).and_then(|()| {
        fs::rename(&tmp, path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))
    }) {
        // Недописанный tmp не оставляем.
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    debug!(
        "snapshot written: {} ({} record(s), {} B)",
        path.display(),
        students.len(),
        data.len()
    );
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Alice", 1, "A"),
            Student::new("Bob \"B\" Ünïcode", -7, "B+"),
        ]
    }

    #[test]
    fn decode_accepts_own_encoding() {
        let students = sample();
        for pretty in [false, true] {
            let bytes = encode_snapshot(&students, pretty).unwrap();
            assert_eq!(decode_snapshot(&bytes).unwrap(), students);
        }
    }

    #[test]
    fn blank_input_is_empty_roster() {
        assert!(decode_snapshot(b"").unwrap().is_empty());
        assert!(decode_snapshot(b"  \n\t").unwrap().is_empty());
    }

    #[test]
    fn crc_mismatch_is_rejected() {
        let bytes = encode_snapshot(&sample(), false).unwrap();
        let text = String::from_utf8(bytes).unwrap().replace("Alice", "Alicf");
        let err = decode_snapshot(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("crc mismatch"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let students = sample();
        let crc = students_crc(&students).unwrap();
        let text = serde_json::json!({
            "version": 99,
            "crc32": crc,
            "students": students,
        })
        .to_string();
        let err = decode_snapshot(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported snapshot version"));
    }

    #[test]
    fn duplicate_roll_numbers_are_rejected() {
        let students = vec![Student::new("A", 5, "A"), Student::new("B", 5, "B")];
        let bytes = encode_snapshot(&students, false).unwrap();
        let err = decode_snapshot(&bytes).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate roll number 5"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_snapshot(b"\xac\xed\x00\x05sr\x00").is_err());
        assert!(decode_snapshot(b"[1,2,3]").is_err());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let p = tmp_path(Path::new("dir/students.json"));
        assert_eq!(p, PathBuf::from("dir/students.json.tmp"));
    }
}
