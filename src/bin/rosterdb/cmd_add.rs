use anyhow::{anyhow, Result};

use RosterDB::{Registry, RegistryError};

use super::util::parse_student_fields;

pub fn exec(registry: &mut Registry, name: String, roll: String, grade: String) -> Result<()> {
    let f = parse_student_fields(&name, &roll, &grade, "Roll number must be numeric")?;
    match registry.add(f.name.as_str(), f.roll, f.grade.as_str()) {
        Ok(()) => {
            println!("OK add: roll={} name='{}' grade='{}'", f.roll, f.name, f.grade);
            Ok(())
        }
        Err(RegistryError::DuplicateKey(_)) => Err(anyhow!("Roll number already exists")),
        Err(e) => Err(e.into()),
    }
}
