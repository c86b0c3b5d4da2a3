pub mod admin;
pub mod home;
pub mod interview;
pub mod login;
pub mod main;
pub mod traits;
