pub mod config;
pub mod error;
pub mod header;
pub mod options;
pub mod username_token;

#[macro_use]
extern crate serde_derive;

pub use config::HeaderConfig;
pub use error::{Error, Result};
pub use header::WsSecurity;
pub use options::{Options, PasswordType, SecurityConfig, SecurityOptions};
pub use username_token::{NonceSource, UsernameToken, UuidNonceSource};

/// Namespace of the WS-Security 1.0 extension elements, bound to the `o` prefix
pub const WSSE_NAMESPACE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
/// Namespace of the WS-Security 1.0 utility elements, bound to the `u` prefix
pub const WSU_NAMESPACE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd";
/// Prefix of the UsernameToken profile password type URIs
pub const USERNAME_TOKEN_PROFILE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0";
/// Encoding type of the `Nonce` element
pub const BASE64_BINARY_ENCODING: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-soap-message-security-1.0#Base64Binary";
