//! Student record: name, roll number (identity key), grade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roll number — единственный ключ реестра.
pub type RollNumber = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    roll_number: RollNumber,
    grade: String,
}

impl Student {
    pub fn new<N: Into<String>, G: Into<String>>(name: N, roll_number: RollNumber, grade: G) -> Self {
        Self {
            name: name.into(),
            roll_number,
            grade: grade.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> RollNumber {
        self.roll_number
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Roll number не меняется: сеттера для него нет.
    pub(crate) fn set_name_and_grade(&mut self, name: String, grade: String) {
        self.name = name;
        self.grade = grade;
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Roll No: {} | Grade: {}",
            self.name, self.roll_number, self.grade
        )
    }
}
