pub mod credential;
pub mod dish;
pub mod vote;
