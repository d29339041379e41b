use super::error::Result;
use super::header::WsSecurity;
use super::options::Options;
use log::trace;
use std::path::Path;

/// Header config document, read from YAML or JSON:
///
/// ```yaml
/// username: joe
/// password: c2VjcmV0
/// base64encoded: true
/// options:
///   passwordType: PasswordDigest
///   mustUnderstand: true
/// ```
///
/// `options` may also be a bare password type name, e.g. `options: PasswordDigest`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HeaderConfig {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub base64encoded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl HeaderConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a document from disk. Files ending in `.json` are parsed as JSON,
    /// everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        trace!("from_file - reading header config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Replaces the password with a clear text one
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(password);
        self.base64encoded = false;
        self
    }

    /// Clear text password; a missing password is empty
    pub fn password(&self) -> Result<String> {
        match &self.password {
            Some(encoded) if self.base64encoded => Ok(String::from_utf8(base64::decode(encoded)?)?),
            Some(password) => Ok(password.clone()),
            None => Ok(String::new()),
        }
    }

    pub fn into_security(self) -> Result<WsSecurity> {
        let password = self.password()?;
        Ok(WsSecurity::new(&self.username, &password, self.options))
    }
}
