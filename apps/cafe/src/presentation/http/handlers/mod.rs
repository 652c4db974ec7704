pub mod auth;
pub mod cafes;
pub mod health;
pub mod home;
pub mod likes;
pub mod profile;
