#[macro_use]
mod helpers;
mod test_auth;
mod test_cafes;
