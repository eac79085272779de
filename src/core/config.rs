use std::env;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

const DEFAULT_SMTP_PORT: u16 = 587;
const FALLBACK_FROM_ADDRESS: &str = "no-reply@example.com";

/// Which chat-completion backend the process talks to.
///
/// The two providers are interchangeable (both speak the OpenAI chat
/// completions wire format) and differ only in credentials, default model
/// and endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Groq,
}

impl Provider {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Groq => "groq",
        }
    }
}

/// SMTP connection parameters, read independently of the AI provider.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from_address: String,
}

impl SmtpConfig {
    /// Whether enough is present to attempt a send. Checked per-request,
    /// never at startup.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.user.is_empty() && !self.password.is_empty()
    }
}

/// Process-wide configuration, resolved once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub endpoint_url: String,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key -> value lookup.
    ///
    /// `USE_GROQ=1` selects the alternate provider; the effective API key,
    /// model and endpoint URL are chosen together from that provider's
    /// settings, never a mix. Nothing is validated here - missing values
    /// surface when a handler tries to use them.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_groq = lookup("USE_GROQ").is_some_and(|v| v == "1");

        let (provider, api_key, model, endpoint_url) = if use_groq {
            (
                Provider::Groq,
                lookup("GROQ_API_KEY").unwrap_or_default(),
                lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
                GROQ_API_URL.to_string(),
            )
        } else {
            (
                Provider::OpenAi,
                lookup("OPENAI_API_KEY").unwrap_or_default(),
                lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                OPENAI_API_URL.to_string(),
            )
        };

        let user = lookup("SMTP_USER").unwrap_or_default();
        let from_address = lookup("SMTP_FROM")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                if user.is_empty() {
                    FALLBACK_FROM_ADDRESS.to_string()
                } else {
                    user.clone()
                }
            });

        let smtp = SmtpConfig {
            host: lookup("SMTP_HOST").unwrap_or_default(),
            port: lookup("SMTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            user,
            password: lookup("SMTP_PASS").unwrap_or_default(),
            from_address,
        };

        Self {
            provider,
            api_key,
            model,
            endpoint_url,
            smtp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_openai_provider() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]));
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.endpoint_url, OPENAI_API_URL);
    }

    #[test]
    fn use_groq_selects_alternate_provider_atomically() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("USE_GROQ", "1"),
            ("GROQ_API_KEY", "gsk-test"),
            ("OPENAI_API_KEY", "sk-ignored"),
            ("OPENAI_MODEL", "gpt-ignored"),
        ]));
        assert_eq!(config.provider, Provider::Groq);
        assert_eq!(config.api_key, "gsk-test");
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.endpoint_url, GROQ_API_URL);
    }

    #[test]
    fn use_groq_must_be_exactly_one() {
        let config = AppConfig::from_lookup(lookup_from(&[("USE_GROQ", "true")]));
        assert_eq!(config.provider, Provider::OpenAi);
    }

    #[test]
    fn model_overrides_apply_to_selected_provider() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("USE_GROQ", "1"),
            ("GROQ_MODEL", "llama-3.1-70b-versatile"),
        ]));
        assert_eq!(config.model, "llama-3.1-70b-versatile");
    }

    #[test]
    fn smtp_port_defaults_to_587() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.smtp.port, 587);

        let config = AppConfig::from_lookup(lookup_from(&[("SMTP_PORT", "not-a-port")]));
        assert_eq!(config.smtp.port, 587);

        let config = AppConfig::from_lookup(lookup_from(&[("SMTP_PORT", "465")]));
        assert_eq!(config.smtp.port, 465);
    }

    #[test]
    fn from_address_falls_back_to_user_then_placeholder() {
        let config = AppConfig::from_lookup(lookup_from(&[("SMTP_FROM", "summary@corp.test")]));
        assert_eq!(config.smtp.from_address, "summary@corp.test");

        let config = AppConfig::from_lookup(lookup_from(&[("SMTP_USER", "mailer@corp.test")]));
        assert_eq!(config.smtp.from_address, "mailer@corp.test");

        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.smtp.from_address, "no-reply@example.com");
    }

    #[test]
    fn smtp_configured_requires_host_user_and_password() {
        let full = AppConfig::from_lookup(lookup_from(&[
            ("SMTP_HOST", "smtp.corp.test"),
            ("SMTP_USER", "mailer"),
            ("SMTP_PASS", "hunter2"),
        ]));
        assert!(full.smtp.is_configured());

        let missing_pass = AppConfig::from_lookup(lookup_from(&[
            ("SMTP_HOST", "smtp.corp.test"),
            ("SMTP_USER", "mailer"),
        ]));
        assert!(!missing_pass.smtp.is_configured());
    }
}
