//! Whole-pipeline facade over a catalog and configuration.

use crate::build::BuildState;
use crate::codec::{self, DecodeError};
use crate::config::EngineConfig;
use crate::env::CatalogOracle;
use crate::resolve;
use crate::stats::{self, StatsReport};

/// Result of running one query through the full pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    /// Resolved build.
    pub build: BuildState,
    pub stats: StatsReport,
    /// Canonical query for the resolved build.
    pub query: String,
}

/// Binds a catalog oracle and configuration for repeated evaluation.
pub struct BuildEngine<'a, C: ?Sized> {
    catalog: &'a C,
    config: EngineConfig,
}

impl<'a, C> BuildEngine<'a, C>
where
    C: CatalogOracle + ?Sized,
{
    pub fn new(catalog: &'a C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn decode(&self, query: &str) -> Result<BuildState, DecodeError> {
        codec::decode_query(self.catalog, query)
    }

    pub fn encode(&self, build: &BuildState) -> String {
        codec::encode(build)
    }

    pub fn resolve(&self, build: BuildState) -> BuildState {
        resolve::resolve(self.catalog, build)
    }

    pub fn aggregate(&self, build: &BuildState) -> StatsReport {
        stats::aggregate(build, &self.config.weight_classes)
    }

    /// Resolves and aggregates an already-built state.
    pub fn evaluate_build(&self, build: BuildState) -> Evaluation {
        let build = self.resolve(build);
        let stats = self.aggregate(&build);
        let query = self.encode(&build);
        Evaluation {
            build,
            stats,
            query,
        }
    }

    /// decode → resolve → aggregate → encode.
    pub fn evaluate(&self, query: &str) -> Result<Evaluation, DecodeError> {
        let build = self.decode(query)?;
        Ok(self.evaluate_build(build))
    }
}
