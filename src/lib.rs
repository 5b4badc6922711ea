#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod config;
pub mod metrics;

// Данные и хранение
pub mod student;
pub mod error;
pub mod snapshot;
pub mod registry;

// Удобные реэкспорты
pub use config::{RegistryBuilder, RosterConfig};
pub use error::RegistryError;
pub use registry::Registry;
pub use snapshot::{load_snapshot, write_snapshot};
pub use student::{RollNumber, Student};
