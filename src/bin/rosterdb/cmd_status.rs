use anyhow::Result;
use serde_json::json;

use RosterDB::{metrics, Registry};

pub fn exec(registry: &Registry, json: bool) -> Result<()> {
    let path = registry.path();
    let size = std::fs::metadata(path).map(|m| m.len()).ok();
    let ms = metrics::snapshot();

    if json {
        let v = json!({
            "snapshot": {
                "path": path.display().to_string(),
                "exists": size.is_some(),
                "size_bytes": size,
                "load_error": registry.load_error(),
            },
            "config": {
                "fsync": registry.config().fsync,
                "pretty": registry.config().pretty,
            },
            "students": registry.len(),
            "metrics": {
                "snapshot_loads": ms.snapshot_loads,
                "snapshot_load_failures": ms.snapshot_load_failures,
                "snapshot_writes": ms.snapshot_writes,
                "snapshot_write_failures": ms.snapshot_write_failures,
                "snapshot_bytes_written": ms.snapshot_bytes_written,
                "students_added": ms.students_added,
                "students_updated": ms.students_updated,
                "students_removed": ms.students_removed,
                "ops_rejected": ms.ops_rejected,
            },
        });
        println!("{}", v);
        return Ok(());
    }

    println!("RosterDB status:");
    println!("  snapshot    = {}", path.display());
    match size {
        Some(n) => println!("  size        = {} B", n),
        None => println!("  size        = (absent)"),
    }
    if let Some(err) = registry.load_error() {
        println!("  load_error  = {}", err);
    }
    println!("  config      = {}", registry.config());
    println!("  students    = {}", registry.len());
    println!(
        "  metrics     = loads={} load_failures={} writes={} write_failures={}",
        ms.snapshot_loads, ms.snapshot_load_failures, ms.snapshot_writes, ms.snapshot_write_failures
    );
    if ms.snapshot_writes > 0 {
        println!("  avg_write   = {:.1} B", ms.avg_snapshot_bytes());
    }
    Ok(())
}
