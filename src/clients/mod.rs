pub mod llm;
pub mod mailer;

// Mock mailer (always available for testing)
pub mod mock;

pub use llm::LlmClient;
pub use mailer::{Mailer, SmtpMailer};
pub use mock::MockMailer;
