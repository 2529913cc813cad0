pub mod language;
pub mod resume;
