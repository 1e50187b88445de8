//! Storage operations behind the HTTP handlers.
//!
//! Each service borrows any [`sea_orm::ConnectionTrait`], so callers can run
//! it directly on the pool or inside a transaction.

pub mod credential;
pub mod dish;
pub mod vote;

pub use credential::CredentialService;
pub use dish::DishService;
pub use vote::VoteService;
