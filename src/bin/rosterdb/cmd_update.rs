use anyhow::{anyhow, Result};

use RosterDB::{Registry, RegistryError};

use super::util::parse_student_fields;

pub fn exec(registry: &mut Registry, name: String, roll: String, grade: String) -> Result<()> {
    let f = parse_student_fields(&name, &roll, &grade, "Invalid roll number")?;
    match registry.update(f.roll, f.name.as_str(), f.grade.as_str()) {
        Ok(()) => {
            println!("UPDATED roll={}: name='{}' grade='{}'", f.roll, f.name, f.grade);
            Ok(())
        }
        Err(RegistryError::NotFound(_)) => Err(anyhow!("Student not found")),
        Err(e) => Err(e.into()),
    }
}
