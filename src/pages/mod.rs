pub mod campus;
pub mod home;
pub mod not_found;
