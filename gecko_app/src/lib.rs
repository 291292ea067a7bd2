use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Serialize, de::DeserializeOwned};

pub trait ContextProvider<Config> {
    fn new(config: Config) -> Self;
}

/// Installs the global tracing subscriber.
///
/// Logs are JSON lines; the level is taken from `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // ANSI color codes are noise once logs are shipped anywhere.
        .with_ansi(false)
        // remove the name of the module from every log entry
        .with_target(false)
        .init();
}

/// Loads the configuration from environment variables, falling back to
/// `Config::default()` for anything unset.
///
/// # Errors
/// If an environment variable cannot be converted to its field's type.
pub fn load_config<Config>() -> Result<Config, figment::Error>
where
    Config: Serialize + DeserializeOwned + Default,
{
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Env::raw())
        .extract()
}

/// Initialize the application context with configuration from environment
/// variables.
///
/// # Returns
/// The application context built from the configuration, as specified by
/// the trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
pub fn create_app_context<A, Config>() -> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
    Config: Serialize + DeserializeOwned + Default,
{
    init_tracing();

    let config: Config = load_config()?;

    Ok(A::new(config))
}
