use anyhow::{anyhow, Result};

use RosterDB::{Registry, RegistryError};

use super::util::parse_roll;

pub fn exec(registry: &mut Registry, roll: String) -> Result<()> {
    let roll = parse_roll(&roll, "Enter roll number to remove")?;
    match registry.remove(roll) {
        Ok(s) => {
            println!("REMOVED {}", s);
            Ok(())
        }
        Err(RegistryError::NotFound(_)) => Err(anyhow!("Student not found")),
        Err(e) => Err(e.into()),
    }
}
