use anyhow::{anyhow, Result};

use RosterDB::{RollNumber, Student};

/// Поля формы после trim; все обязательны.
#[derive(Debug)]
pub struct StudentFields {
    pub name: String,
    pub roll: RollNumber,
    pub grade: String,
}

/// Проверка add/update: все поля непустые, roll — число.
pub fn parse_student_fields(name: &str, roll: &str, grade: &str, numeric_msg: &str) -> Result<StudentFields> {
    let (name, roll, grade) = (name.trim(), roll.trim(), grade.trim());
    if name.is_empty() || roll.is_empty() || grade.is_empty() {
        return Err(anyhow!("Please fill all fields"));
    }
    let roll = roll
        .parse::<RollNumber>()
        .map_err(|_| anyhow!("{}", numeric_msg))?;
    Ok(StudentFields {
        name: name.to_string(),
        roll,
        grade: grade.to_string(),
    })
}

/// Проверка одиночного roll number (remove/search).
pub fn parse_roll(roll: &str, empty_msg: &str) -> Result<RollNumber> {
    let roll = roll.trim();
    if roll.is_empty() {
        return Err(anyhow!("{}", empty_msg));
    }
    roll.parse::<RollNumber>()
        .map_err(|_| anyhow!("Invalid roll number"))
}

/// Таблица: Roll No | Name | Grade.
pub fn render_table(students: &[Student]) -> String {
    let w_roll = students
        .iter()
        .map(|s| s.roll_number().to_string().len())
        .chain(std::iter::once("Roll No".len()))
        .max()
        .unwrap_or(0);
    let w_name = students
        .iter()
        .map(|s| s.name().chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<w_roll$}  {:<w_name$}  {}\n", "Roll No", "Name", "Grade"));
    for s in students {
        out.push_str(&format!(
            "{:<w_roll$}  {:<w_name$}  {}\n",
            s.roll_number(),
            s.name(),
            s.grade()
        ));
    }
    out
}
