pub mod attempt_login;
pub mod resend_verification;
