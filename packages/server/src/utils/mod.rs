pub mod filename;
pub mod mock_auth;
