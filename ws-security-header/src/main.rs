mod env_var;

use anyhow::Context;
use env_var::{ActualEnvVarQuery, EnvVarQuery};
use log::info;
use ws_security::HeaderConfig;

/// Path of the YAML or JSON header config document
pub const CONFIG_PATH_LABEL: &str = "WS_SECURITY_CONFIG_PATH";
/// Optional clear text password overriding the one in the config document
pub const PASSWORD_LABEL: &str = "WS_SECURITY_PASSWORD";

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    env_logger::try_init()?;
    info!("main - ws-security header started");
    let header = run(&ActualEnvVarQuery)?;
    println!("{}", header);
    info!("main - ws-security header ended");
    Ok(())
}

/// Loads the header config named by the environment and renders the security header
fn run(env_var_query: &impl EnvVarQuery) -> anyhow::Result<String> {
    let config_path = env_var_query
        .get_env_var(CONFIG_PATH_LABEL)
        .with_context(|| format!("{} is not set", CONFIG_PATH_LABEL))?;
    info!("run - loading header config from {}", config_path);
    let mut config = HeaderConfig::from_file(&config_path)
        .with_context(|| format!("failed to load header config {}", config_path))?;
    if let Ok(password) = env_var_query.get_env_var(PASSWORD_LABEL) {
        info!("run - using password from {}", PASSWORD_LABEL);
        config = config.with_password(password);
    }
    let security = config.into_security()?;
    Ok(security.to_xml())
}
