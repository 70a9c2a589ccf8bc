pub mod claims;
pub mod cookie;
pub mod guard;
pub mod jwt;

pub use claims::{Identity, IdentityPayload};
pub use cookie::{cleared_token_cookie, token_cookie, TOKEN_COOKIE};
pub use guard::authorize;
pub use jwt::{issue_token, verify_token};
