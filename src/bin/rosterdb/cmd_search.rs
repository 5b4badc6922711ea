use anyhow::Result;

use RosterDB::Registry;

use super::util::parse_roll;

pub fn exec(registry: &Registry, roll: String) -> Result<()> {
    let roll = parse_roll(&roll, "Enter roll number to search")?;
    // Отсутствие записи — информационное сообщение, не ошибка.
    match registry.search(roll) {
        Some(s) => println!("FOUND {}", s),
        None => println!("Student not found"),
    }
    Ok(())
}
