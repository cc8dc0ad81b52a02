use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

// this code reads in app-specific settings from the yaml files in
// the configuration directory, plus any APP_ environment variables

// A struct holding settings relevent to this run
#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    // the port and host on which the app is listening
    pub application: ApplicationSettings,
    // cookie + timeouts for the session middleware
    pub session: SessionSettings,
}

// port listening on and host environemnt (docker image - production, or debug)
#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // env vars are always strings - so we let serde-aux parse the number for us
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

// settings for the session cookie
#[derive(serde::Deserialize, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    // the session is forgotten if no request touches it for this long
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub idle_timeout_seconds: u64,
    // how long we wait on a client to send a full request
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub io_timeout_seconds: u64,
    // only send the cookie over https - off for local runs
    pub secure_cookie: bool,
    // signs and encrypts the session cookie, this will be redacted unless exposed
    pub secret_key: Secret<String>,
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }

    pub fn io_timeout(&self) -> Duration {
        Duration::from_secs(self.io_timeout_seconds)
    }
}

// we will read our configuration settings from configuration/base.yaml and
// configuration/{environment}.yaml - env vars win over both
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;

    let configuration_directory = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001` would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
