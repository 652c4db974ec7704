pub mod auth;
pub mod cafes;
pub mod forms;
pub mod likes;
pub mod profile;
