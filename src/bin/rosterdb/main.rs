use anyhow::Result;
use env_logger::{Builder, Env};

use RosterDB::{Registry, RosterConfig};

mod cli;
mod util;
mod cmd_add;
mod cmd_update;
mod cmd_remove;
mod cmd_search;
mod cmd_list;
mod cmd_status;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — warn (stdout остаётся чистым).
    // Пример: RUST_LOG=debug rosterdb list
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse_args();

    let mut cfg = RosterConfig::from_env();
    if let Some(file) = cli.file {
        cfg = cfg.with_snapshot_path(file);
    }
    // Один реестр на процесс; команды получают его явно.
    let mut registry = Registry::open_with_config(cfg);

    match cli.cmd {
        cli::Cmd::Add { name, roll, grade } =>
            cmd_add::exec(&mut registry, name, roll, grade),

        cli::Cmd::Update { name, roll, grade } =>
            cmd_update::exec(&mut registry, name, roll, grade),

        cli::Cmd::Remove { roll } =>
            cmd_remove::exec(&mut registry, roll),

        cli::Cmd::Search { roll } =>
            cmd_search::exec(&registry, roll),

        cli::Cmd::List { json } =>
            cmd_list::exec(&registry, json),

        cli::Cmd::Status { json } =>
            cmd_status::exec(&registry, json),
    }
}
