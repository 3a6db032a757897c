pub mod session;
pub mod use_cases;

pub use session::SessionController;
pub use use_cases::{attempt_login::LoginUseCase, resend_verification::ResendVerificationUseCase};
