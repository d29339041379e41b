use super::options::{Options, SecurityConfig};
use super::username_token::{
    expires_at, format_timestamp, NonceSource, UsernameToken, UuidNonceSource,
};
use super::{BASE64_BINARY_ENCODING, WSSE_NAMESPACE, WSU_NAMESPACE};
use chrono::{DateTime, Utc};
use log::trace;
use std::fmt;

/// `WsSecurity` builds the `<o:Security>` SOAP header carrying a WS-Security
/// UsernameToken.
///
/// Every call to `to_xml` takes the current time and a fresh nonce, so two calls
/// never produce the same header. Username, password and actor are written as
/// given; they must already be safe to embed in XML.
#[derive(Clone, Debug, PartialEq)]
pub struct WsSecurity {
    config: SecurityConfig,
}

impl WsSecurity {
    /// Accepts either a bare password type name or `SecurityOptions`:
    ///
    /// ```
    /// use ws_security::{SecurityOptions, WsSecurity};
    ///
    /// let legacy = WsSecurity::new("joe", "secret", Some("PasswordDigest"));
    /// let structured = WsSecurity::new(
    ///     "joe",
    ///     "secret",
    ///     Some(SecurityOptions {
    ///         password_type: Some("PasswordDigest".to_string()),
    ///         ..Default::default()
    ///     }),
    /// );
    /// assert_eq!(legacy, structured);
    /// ```
    pub fn new<O: Into<Options>>(username: &str, password: &str, options: Option<O>) -> Self {
        WsSecurity {
            config: SecurityConfig::new(username, password, options.map(Into::into)),
        }
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    /// Renders the header using the wall clock and a random nonce
    pub fn to_xml(&self) -> String {
        self.render(&Utc::now(), &UuidNonceSource)
    }

    /// Resolves the token values (created time, nonce, password or digest) for `now`
    pub fn username_token(&self, now: &DateTime<Utc>, source: &impl NonceSource) -> UsernameToken {
        UsernameToken::new(&self.config, &format_timestamp(now), source)
    }

    pub fn render(&self, now: &DateTime<Utc>, source: &impl NonceSource) -> String {
        let username_token = self.username_token(now, source);
        let created = &username_token.created;
        trace!(
            "render - {} header for {} created at {}",
            username_token.password_type,
            username_token.username,
            created
        );

        let time_stamp_xml = if self.config.has_time_stamp() {
            get_time_stamp_xml(created, &format_timestamp(&expires_at(now)))
        } else {
            String::new()
        };
        let token_created_xml = if self.config.has_token_created() {
            format!("<u:Created>{}</u:Created>", created)
        } else {
            String::new()
        };

        format!(
            r#"<o:Security {}{}xmlns:o="{}" xmlns:u="{}">{}<o:UsernameToken xmlns:u="{}" u:Id="SecurityToken-{}"><o:Username>{}</o:Username>{}{}</o:UsernameToken></o:Security>"#,
            self.config
                .actor()
                .map(|actor| format!(r#"soap:actor="{}" "#, actor))
                .unwrap_or_default(),
            if self.config.must_understand() == Some(true) {
                r#"s:mustUnderstand="1" "#
            } else {
                ""
            },
            WSSE_NAMESPACE,
            WSU_NAMESPACE,
            time_stamp_xml,
            WSU_NAMESPACE,
            created,
            username_token.username,
            get_password_xml(&username_token),
            token_created_xml,
        )
    }
}

impl fmt::Display for WsSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

fn get_time_stamp_xml(created: &str, expires: &str) -> String {
    format!(
        r#"<u:Timestamp u:Id="Timestamp-{}"><u:Created>{}</u:Created><u:Expires>{}</u:Expires></u:Timestamp>"#,
        created, created, expires
    )
}

/// `Password` element followed by the `Nonce` element when a nonce was computed.
/// Digest tokens always carry a nonce.
fn get_password_xml(username_token: &UsernameToken) -> String {
    let password_xml = format!(
        r#"<o:Password Type="{}">{}</o:Password>"#,
        username_token.password_type.type_uri(),
        username_token.password
    );
    match &username_token.nonce {
        Some(nonce) => format!(
            r#"{}<o:Nonce EncodingType="{}">{}</o:Nonce>"#,
            password_xml, BASE64_BINARY_ENCODING, nonce
        ),
        None => password_xml,
    }
}
