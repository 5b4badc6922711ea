use anyhow::{Context, Result};

use RosterDB::Registry;

use super::util::render_table;

pub fn exec(registry: &Registry, json: bool) -> Result<()> {
    let students = registry.list();
    if json {
        let s = serde_json::to_string_pretty(students).context("serialize students")?;
        println!("{}", s);
        return Ok(());
    }
    if students.is_empty() {
        println!("(no students)");
        return Ok(());
    }
    print!("{}", render_table(students));
    Ok(())
}
