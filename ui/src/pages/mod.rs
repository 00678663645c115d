pub mod error;
pub mod home;
pub mod root;
