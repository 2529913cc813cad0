pub mod home;
pub mod resume;
pub mod system;
