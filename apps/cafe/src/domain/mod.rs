pub mod cafe;
pub mod city;
pub mod errors;
pub mod like;
pub mod user;
