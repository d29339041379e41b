use super::error::{Error, Result};
use super::USERNAME_TOKEN_PROFILE;
use log::{trace, warn};
use std::{fmt, str::FromStr};

/// How the password is carried in the `Password` element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordType {
    /// The password is sent as `base64(SHA-1(nonce + created + password))`
    PasswordDigest,
    /// The password is sent in the clear
    #[default]
    PasswordText,
}

impl PasswordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordType::PasswordDigest => "PasswordDigest",
            PasswordType::PasswordText => "PasswordText",
        }
    }

    /// Full URI used as the `Type` attribute of the `Password` element
    pub fn type_uri(&self) -> String {
        format!("{}#{}", USERNAME_TOKEN_PROFILE, self.as_str())
    }

    /// Lenient parse used while building a `SecurityConfig`.
    ///
    /// An empty name means the caller did not ask for a type. Any name other than
    /// `PasswordDigest` or `PasswordText` is coerced to `PasswordText`, which keeps
    /// existing callers working; use `str::parse` to reject unknown names instead.
    pub fn normalize(name: &str) -> PasswordType {
        if name.is_empty() {
            return PasswordType::default();
        }
        name.parse().unwrap_or_else(|_| {
            warn!(
                "normalize - unknown password type {}, falling back to {}",
                name,
                PasswordType::PasswordText
            );
            PasswordType::PasswordText
        })
    }
}

impl FromStr for PasswordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PasswordDigest" => Ok(PasswordType::PasswordDigest),
            "PasswordText" => Ok(PasswordType::PasswordText),
            other => Err(Error::UnknownPasswordType(other.to_string())),
        }
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured header options.
///
/// Every field is optional so that "not provided" can be told apart from an
/// explicit `false`. Keys use camelCase (`passwordType`, `hasTimeStamp`, ...)
/// when read from a config document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_time_stamp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_nonce: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_token_created: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_understand: Option<bool>,
}

/// The two accepted shapes of the options argument: a bare password type name
/// (older callers) or a full set of `SecurityOptions`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Options {
    PasswordType(String),
    Structured(SecurityOptions),
}

impl Default for Options {
    fn default() -> Self {
        Options::Structured(SecurityOptions::default())
    }
}

impl From<&str> for Options {
    fn from(password_type: &str) -> Self {
        Options::PasswordType(password_type.to_string())
    }
}

impl From<String> for Options {
    fn from(password_type: String) -> Self {
        Options::PasswordType(password_type)
    }
}

impl From<PasswordType> for Options {
    fn from(password_type: PasswordType) -> Self {
        Options::PasswordType(password_type.as_str().to_string())
    }
}

impl From<SecurityOptions> for Options {
    fn from(options: SecurityOptions) -> Self {
        Options::Structured(options)
    }
}

/// Normalized header configuration. Built once and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SecurityConfig {
    username: String,
    password: String,
    password_type: PasswordType,
    has_time_stamp: bool,
    has_nonce: Option<bool>,
    has_token_created: bool,
    actor: Option<String>,
    must_understand: Option<bool>,
}

impl SecurityConfig {
    pub fn new(username: &str, password: &str, options: Option<Options>) -> Self {
        let (password_type, options) = match options.unwrap_or_default() {
            Options::PasswordType(password_type) => (password_type, SecurityOptions::default()),
            Options::Structured(options) => (
                options.password_type.clone().unwrap_or_default(),
                options,
            ),
        };
        let config = SecurityConfig {
            username: username.to_string(),
            password: password.to_string(),
            password_type: PasswordType::normalize(&password_type),
            has_time_stamp: options.has_time_stamp.unwrap_or(true),
            has_nonce: options.has_nonce,
            has_token_created: options.has_token_created.unwrap_or(true),
            // An empty actor is never emitted, so it is the same as no actor
            actor: options.actor.filter(|actor| !actor.is_empty()),
            must_understand: options.must_understand,
        };
        trace!(
            "new - username: {}, password type: {}, timestamp: {}, nonce: {:?}, token created: {}",
            config.username,
            config.password_type,
            config.has_time_stamp,
            config.has_nonce,
            config.has_token_created
        );
        config
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_type(&self) -> PasswordType {
        self.password_type
    }

    pub fn has_time_stamp(&self) -> bool {
        self.has_time_stamp
    }

    pub fn has_nonce(&self) -> Option<bool> {
        self.has_nonce
    }

    pub fn has_token_created(&self) -> bool {
        self.has_token_created
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn must_understand(&self) -> Option<bool> {
        self.must_understand
    }

    /// A nonce is computed when asked for explicitly, and always in digest mode
    pub fn needs_nonce(&self) -> bool {
        self.has_nonce == Some(true) || self.password_type != PasswordType::PasswordText
    }
}
