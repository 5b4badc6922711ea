//! registry — авторитетный in-memory список студентов + write-through снапшот.
//!
//! Правила:
//! - Порядок вставки сохраняется (он же порядок в снапшоте и при выводе).
//! - Не больше одной записи на roll number; поиск линейный.
//! - Каждая успешная мутация синхронно переписывает снапшот целиком.
//! - Мутация транзакционна: если запись снапшота не удалась, изменение в памяти
//!   откатывается и вызывающий получает RegistryError::Persist.
//! - Битый снапшот при открытии не ошибка: warn! в лог, пустой реестр, файл
//!   остаётся на диске как есть.

use log::{info, warn};
use std::path::Path;

use crate::config::{RegistryBuilder, RosterConfig};
use crate::error::RegistryError;
use crate::metrics;
use crate::snapshot::{load_snapshot, write_snapshot};
use crate::student::{RollNumber, Student};

#[derive(Debug)]
pub struct Registry {
    students: Vec<Student>,
    cfg: RosterConfig,
    load_error: Option<String>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Открыть реестр со снапшотом по указанному пути (остальное — из env).
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::open_with_config(RosterConfig::from_env().with_snapshot_path(path))
    }

    pub fn open_with_config(cfg: RosterConfig) -> Self {
        metrics::record_snapshot_load();
        let (students, load_error) = match load_snapshot(&cfg.snapshot_path) {
            Ok(v) => {
                info!(
                    "roster restored: {} record(s) from {}",
                    v.len(),
                    cfg.snapshot_path.display()
                );
                (v, None)
            }
            Err(e) => {
                metrics::record_snapshot_load_failure();
                warn!("error loading roster, starting empty: {:#}", e);
                (Vec::new(), Some(format!("{:#}", e)))
            }
        };
        Self {
            students,
            cfg,
            load_error,
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.cfg
    }

    pub fn path(&self) -> &Path {
        &self.cfg.snapshot_path
    }

    /// Причина, по которой снапшот не удалось прочитать при открытии (если была).
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, roll_number: RollNumber) -> bool {
        self.position(roll_number).is_some()
    }

    #[inline]
    fn position(&self, roll_number: RollNumber) -> Option<usize> {
        self.students
            .iter()
            .position(|s| s.roll_number() == roll_number)
    }

    pub fn search(&self, roll_number: RollNumber) -> Option<&Student> {
        self.position(roll_number).map(|i| &self.students[i])
    }

    pub fn add<N: Into<String>, G: Into<String>>(
        &mut self,
        name: N,
        roll_number: RollNumber,
        grade: G,
    ) -> Result<(), RegistryError> {
        if self.contains(roll_number) {
            metrics::record_rejected();
            return Err(RegistryError::DuplicateKey(roll_number));
        }
        self.students.push(Student::new(name, roll_number, grade));
        if let Err(e) = self.persist() {
            self.students.pop();
            return Err(e);
        }
        metrics::record_added();
        Ok(())
    }

    /// Удалить запись; возвращает удалённую запись.
    pub fn remove(&mut self, roll_number: RollNumber) -> Result<Student, RegistryError> {
        let idx = match self.position(roll_number) {
            Some(i) => i,
            None => {
                metrics::record_rejected();
                return Err(RegistryError::NotFound(roll_number));
            }
        };
        let removed = self.students.remove(idx);
        if let Err(e) = self.persist() {
            self.students.insert(idx, removed);
            return Err(e);
        }
        metrics::record_removed();
        Ok(removed)
    }

    /// Перезаписать name и grade на месте; roll number и позиция не меняются.
    pub fn update<N: Into<String>, G: Into<String>>(
        &mut self,
        roll_number: RollNumber,
        new_name: N,
        new_grade: G,
    ) -> Result<(), RegistryError> {
        let idx = match self.position(roll_number) {
            Some(i) => i,
            None => {
                metrics::record_rejected();
                return Err(RegistryError::NotFound(roll_number));
            }
        };
        let old = self.students[idx].clone();
        self.students[idx].set_name_and_grade(new_name.into(), new_grade.into());
        if let Err(e) = self.persist() {
            self.students[idx] = old;
            return Err(e);
        }
        metrics::record_updated();
        Ok(())
    }

    fn persist(&self) -> Result<(), RegistryError> {
        match write_snapshot(
            &self.cfg.snapshot_path,
            &self.students,
            self.cfg.pretty,
            self.cfg.fsync,
        ) {
            Ok(bytes) => {
                metrics::record_snapshot_write(bytes);
                Ok(())
            }
            Err(e) => {
                metrics::record_snapshot_write_failure();
                warn!("error saving roster: {:#}", e);
                Err(RegistryError::Persist(e))
            }
        }
    }
}
