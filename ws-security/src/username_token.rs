//! This implements the values of the Username token profile described in
//! [WS-UsernameToken]: https://docs.oasis-open.org/wss/v1.1/wss-v1.1-spec-pr-UsernameTokenProfile-01.htm
use super::options::{PasswordType, SecurityConfig};
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Lifetime of the `Timestamp` element, `Expires` is `Created` plus this many seconds
pub const TIMESTAMP_TTL_SECS: i64 = 600;

/// Supplies the random part of each nonce.
///
/// The value only has to differ between calls; it is hashed together with the
/// creation time and is never relied on for secrecy.
#[cfg_attr(test, automock)]
pub trait NonceSource {
    fn random_value(&self) -> String;
}

/// Default `NonceSource` backed by a fresh v4 UUID
pub struct UuidNonceSource;

impl NonceSource for UuidNonceSource {
    fn random_value(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Formats an instant as `YYYY-MM-DDTHH:mm:ssZ`
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Expiry of a `Timestamp` created at `instant`
pub fn expires_at(instant: &DateTime<Utc>) -> DateTime<Utc> {
    *instant + chrono::Duration::seconds(TIMESTAMP_TTL_SECS)
}

/// Raw nonce bytes: SHA-1(created + random value)
pub fn generate_nonce(created: &str, source: &impl NonceSource) -> [u8; 20] {
    let mut hasher = sha1::Sha1::new();
    hasher.update(created.as_bytes());
    hasher.update(source.random_value().as_bytes());
    hasher.digest().bytes()
}

/// base64(SHA-1(nonce + created + password)), where `nonce` is the raw
/// (not base64 encoded) nonce
pub fn password_digest(nonce: &[u8], created: &str, password: &str) -> String {
    let digest = {
        let mut hasher = sha1::Sha1::new();
        hasher.update(nonce);
        hasher.update(created.as_bytes());
        hasher.update(password.as_bytes());
        hasher.digest().bytes()
    };
    base64::encode(digest)
}

/// Values of a single rendered `UsernameToken`
#[derive(Default, Debug, Clone, PartialEq)]
pub struct UsernameToken {
    pub username: String,
    pub password_type: PasswordType,
    /// Clear text password or digest, depending on `password_type`
    pub password: String,
    /// Base64 encoded nonce, if one was needed
    pub nonce: Option<String>,
    pub created: String,
}

impl UsernameToken {
    pub fn new(config: &SecurityConfig, created: &str, source: &impl NonceSource) -> UsernameToken {
        let nonce = if config.needs_nonce() {
            Some(generate_nonce(created, source))
        } else {
            None
        };
        let password = match (config.password_type(), nonce.as_ref()) {
            (PasswordType::PasswordDigest, Some(nonce)) => {
                password_digest(nonce, created, config.password())
            }
            _ => config.password().to_string(),
        };

        UsernameToken {
            username: config.username().to_string(),
            password_type: config.password_type(),
            password,
            nonce: nonce.map(base64::encode),
            created: created.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::options::SecurityOptions;
    use super::*;
    use chrono::TimeZone;

    fn configure_nonce_source(value: &'static str) -> MockNonceSource {
        let mut source = MockNonceSource::new();
        source
            .expect_random_value()
            .times(1)
            .returning(move || value.to_string());
        source
    }

    #[test]
    fn test_password_digest() {
        let password = "1234567";
        let nonce = "nonce";
        let created = "2000-01-01T12:34:56:789Z";

        assert_eq!(
            password_digest(nonce.as_bytes(), created, password),
            "AGsoQQ+qNJu6Ha7h/QAPoQvYcV0="
        );
    }

    #[test]
    fn test_format_timestamp() {
        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 23, 55, 1).unwrap();
        assert_eq!(format_timestamp(&instant), "2024-02-29T23:55:01Z");
        assert_eq!(format_timestamp(&expires_at(&instant)), "2024-03-01T00:05:01Z");
    }

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let instant = Utc.timestamp_millis_opt(1_000_000_123_456).unwrap();
        assert_eq!(format_timestamp(&instant), "2001-09-09T01:48:43Z");
    }

    #[test]
    fn test_generate_nonce() {
        let source = configure_nonce_source("random-value");
        let nonce = generate_nonce("2024-02-29T23:55:01Z", &source);
        assert_eq!(base64::encode(nonce), "SzlMkCqczlZrkjSOhpF8TFdMCJw=");
    }

    #[test]
    fn test_uuid_nonce_source_differs_per_call() {
        let source = UuidNonceSource;
        assert_ne!(source.random_value(), source.random_value());
    }

    #[test]
    fn test_generate_digest_token() {
        let config = SecurityConfig::new("abcdefe", "secret", Some("PasswordDigest".into()));
        let source = configure_nonce_source("random-value");

        let username_token = UsernameToken::new(&config, "2024-02-29T23:55:01Z", &source);

        assert_eq!(username_token.username, "abcdefe");
        assert_eq!(username_token.created, "2024-02-29T23:55:01Z");
        assert_eq!(username_token.password_type, PasswordType::PasswordDigest);
        assert_eq!(
            username_token.nonce.as_deref(),
            Some("SzlMkCqczlZrkjSOhpF8TFdMCJw=")
        );
        assert_eq!(username_token.password, "t/9rZ3NS2qGZbtAW/jxv6n1gXU0=");
    }

    #[test]
    fn test_generate_text_token_without_nonce() {
        let config = SecurityConfig::new("abcdefe", "secret", None);
        let mut source = MockNonceSource::new();
        source.expect_random_value().times(0);

        let username_token = UsernameToken::new(&config, "2024-02-29T23:55:01Z", &source);

        assert_eq!(username_token.password_type, PasswordType::PasswordText);
        assert_eq!(username_token.password, "secret");
        assert_eq!(username_token.nonce, None);
    }

    #[test]
    fn test_generate_text_token_with_nonce() {
        let config = SecurityConfig::new(
            "abcdefe",
            "secret",
            Some(
                SecurityOptions {
                    has_nonce: Some(true),
                    ..Default::default()
                }
                .into(),
            ),
        );
        let source = configure_nonce_source("random-value");

        let username_token = UsernameToken::new(&config, "2024-02-29T23:55:01Z", &source);

        assert_eq!(username_token.password, "secret");
        assert_eq!(
            username_token.nonce.as_deref(),
            Some("SzlMkCqczlZrkjSOhpF8TFdMCJw=")
        );
    }
}
