//! Server configuration from environment variables.
//!
//! | Variable             | Default                    |
//! |----------------------|----------------------------|
//! | `PORT`               | `5000`                     |
//! | `FARE_RESOLVER`      | `graph`                    |
//! | `FARE_DISTANCE_FILE` | `data/hankyu_kilo.csv`     |
//! | `FARE_TARIFF_FILE`   | preset for the resolver    |
//! | `FARE_PASS_PRICE`    | `1300` (`off` disables)    |
//! | `FARE_MISSING_EDGE`  | `1.0` (`fail` disables)    |
//!
//! `FARE_RESOLVER=table` needs a distance file with every station pair
//! tabulated; pairs missing from it have no route.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::fare::{DEFAULT_PASS_PRICE, Tariff, TariffError};
use crate::network::{DEFAULT_EDGE_KM, LoadError, MissingEdgePolicy, NetworkError, load_matrix};
use crate::planner::{InvalidResolverKind, JourneyPlanner, PlannerConfig, ResolverKind};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default distance matrix path, relative to the working directory.
pub const DEFAULT_DISTANCE_FILE: &str = "data/hankyu_kilo.csv";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.trim().parse().map_err(|e| invalid(name, value, e))
}

/// Errors from building the planner at start-up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The distance matrix could not be loaded
    #[error("failed to load distance matrix: {0}")]
    Load(#[from] LoadError),

    /// The tariff file could not be loaded
    #[error("failed to load tariff: {0}")]
    Tariff(#[from] TariffError),

    /// The network graph could not be built
    #[error("failed to build network: {0}")]
    Network(#[from] NetworkError),
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,

    /// Distance resolution strategy
    pub resolver: ResolverKind,

    /// Path of the distance matrix CSV
    pub distance_file: PathBuf,

    /// Optional JSON tariff replacing the resolver's preset
    pub tariff_file: Option<PathBuf>,

    /// Flat-rate pass price, or `None` to skip the comparison
    pub pass_price: Option<u32>,

    /// Graph builder behaviour for edges without a tabulated distance
    pub missing_edge: MissingEdgePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            resolver: ResolverKind::default(),
            distance_file: PathBuf::from(DEFAULT_DISTANCE_FILE),
            tariff_file: None,
            pass_price: Some(DEFAULT_PASS_PRICE),
            missing_edge: MissingEdgePolicy::Default(DEFAULT_EDGE_KM),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset and empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("PORT") {
            config.port = parse_number("PORT", &value)?;
        }

        if let Some(value) = get("FARE_RESOLVER") {
            config.resolver = value
                .parse()
                .map_err(|e: InvalidResolverKind| invalid("FARE_RESOLVER", &value, e))?;
        }

        if let Some(value) = get("FARE_DISTANCE_FILE") {
            config.distance_file = PathBuf::from(value);
        }

        config.tariff_file = get("FARE_TARIFF_FILE").map(PathBuf::from);

        if let Some(value) = get("FARE_PASS_PRICE") {
            config.pass_price = match value.trim() {
                "off" | "none" => None,
                _ => Some(parse_number("FARE_PASS_PRICE", &value)?),
            };
        }

        if let Some(value) = get("FARE_MISSING_EDGE") {
            config.missing_edge = match value.trim() {
                "fail" => MissingEdgePolicy::Fail,
                km => match km.parse::<f64>() {
                    Ok(km) if km.is_finite() && km >= 0.0 => MissingEdgePolicy::Default(km),
                    _ => {
                        let reason = "expected \"fail\" or a non-negative distance";
                        return Err(invalid("FARE_MISSING_EDGE", &value, reason));
                    }
                },
            };
        }

        Ok(config)
    }

    /// The planner settings carried by this configuration.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.resolver, self.missing_edge, self.pass_price)
    }

    /// Load reference data and build the journey planner.
    pub fn build_planner(&self) -> Result<JourneyPlanner, StartupError> {
        let source = load_matrix(&self.distance_file, self.resolver.load_mode())?;

        let tariff = match &self.tariff_file {
            Some(path) => {
                let tariff = Tariff::from_json_file(path)?;
                info!(path = %path.display(), bands = tariff.bands().len(), "Loaded tariff");
                tariff
            }
            None => self.resolver.default_tariff(),
        };

        Ok(JourneyPlanner::from_source(
            source,
            &self.planner_config(),
            tariff,
        )?)
    }
}
