use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для реестра студентов (name, roll number, grade)
#[derive(Parser, Debug)]
#[command(
    name = "rosterdb",
    version,
    about = "Student roster: add/update/remove/search with a JSON snapshot",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Snapshot file (default: $ROSTER_FILE or ./students.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Add a student (roll number must be unique)
    Add {
        #[arg(long, default_value = "")]
        name: String,
        /// Roll number (integer)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        roll: String,
        #[arg(long, default_value = "")]
        grade: String,
    },
    /// Update name and grade of an existing student
    Update {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        roll: String,
        #[arg(long, default_value = "")]
        grade: String,
    },
    /// Remove a student by roll number
    Remove {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        roll: String,
    },
    /// Find a student by roll number
    Search {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        roll: String,
    },
    /// Print all students in insertion order
    ///
    /// Пример:
    ///   rosterdb list
    ///   rosterdb --file ./class.json list --json
    List {
        /// JSON output (array)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print snapshot path, record count and process metrics
    Status {
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
