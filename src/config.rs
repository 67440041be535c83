//! Runtime options: RNG seed, catalog table location, log filter

use crate::catalog::CatalogConfig;
use crate::error::CatalogError;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "zoo-excursion")]
#[command(about = "Interactive excursion through the zoo enclosures")]
#[command(version)]
pub struct AppConfig {
    /// Seed for gender assignment (random when omitted)
    #[arg(long, env = "ZOO_SEED")]
    pub seed: Option<u64>,

    /// JSON catalog table to load instead of the built-in one
    #[arg(long, env = "ZOO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

impl AppConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn catalog_config(&self) -> Result<CatalogConfig, CatalogError> {
        match &self.catalog {
            Some(path) => CatalogConfig::load(path),
            None => Ok(CatalogConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_parse_defaults() {
        let config = AppConfig::try_parse_from(["zoo-excursion"]).unwrap();

        assert_eq!(config.catalog, None);
        assert_eq!(config.log, DEFAULT_LOG_FILTER);
        assert_eq!(config.catalog_config().unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_parse_seed_and_catalog() {
        let config = AppConfig::try_parse_from([
            "zoo-excursion",
            "--seed",
            "17",
            "--catalog",
            "/tmp/zoo.json",
            "--log",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.seed, Some(17));
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/zoo.json")));
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn test_seeded_rng_builds_identical_catalogs() {
        let config = AppConfig {
            seed: Some(3),
            ..AppConfig::default()
        };
        let table = CatalogConfig::default();

        let first = Catalog::build(&table, &mut config.rng());
        let second = Catalog::build(&table, &mut config.rng());

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("/nonexistent/zoo.json")),
            ..AppConfig::default()
        };

        assert!(matches!(config.catalog_config(), Err(CatalogError::Read { .. })));
    }
}
