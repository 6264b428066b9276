pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::CurrentUser;
pub use token::{Claims, TokenError};
