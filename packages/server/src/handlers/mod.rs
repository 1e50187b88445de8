pub mod credential;
pub mod dish;
pub mod image;
pub mod login;
pub mod vote;
