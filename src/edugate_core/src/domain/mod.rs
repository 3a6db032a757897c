pub mod credential;
pub mod decision;
pub mod email;
pub mod password;
pub mod user;
