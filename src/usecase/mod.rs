pub mod grant;
pub mod issue;
pub mod verify;
