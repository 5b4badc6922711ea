//! Общие константы формата снапшота.

// -------- Snapshot --------
/// Имя файла снапшота по умолчанию (в текущем каталоге).
pub const DEFAULT_SNAPSHOT_FILE: &str = "students.json";

/// Суффикс временного файла для атомарной записи (tmp + rename).
pub const SNAPSHOT_TMP_SUFFIX: &str = ".tmp";

/// Текущая версия формата снапшота. Миграций нет: другая версия = битый файл.
pub const SNAPSHOT_VERSION: u32 = 1;

// -------- Env --------
pub const ENV_FILE: &str = "ROSTER_FILE";
pub const ENV_FSYNC: &str = "ROSTER_FSYNC";
pub const ENV_PRETTY: &str = "ROSTER_PRETTY";
