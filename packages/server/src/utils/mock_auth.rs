//! Placeholder login.
//!
//! Hands a fixed token to anyone who supplies a non-empty account and
//! password. No route checks the token and no stored credential is
//! consulted, so this is not an authentication boundary. The endpoint is
//! mounted only while `login.mock_enabled` is set.

pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// The identity every mock login resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSession {
    pub token: &'static str,
    pub user_id: i32,
    pub account: &'static str,
}

pub fn issue_mock_session() -> MockSession {
    MockSession {
        token: MOCK_TOKEN,
        user_id: 1,
        account: "account",
    }
}
