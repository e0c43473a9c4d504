pub mod body;
pub mod config;
pub mod entry;
pub mod food;
pub mod target;

pub use entry::LoggedEntry;
pub use food::NutrientProfile;
pub use target::DailyTarget;
