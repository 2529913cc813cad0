pub mod skills;
pub mod store;
