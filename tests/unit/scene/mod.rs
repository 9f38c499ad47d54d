pub mod beach;
pub mod home;
