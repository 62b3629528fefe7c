//! Series engine
//!
//! Owns one cached `SampleSet` and the most recent `ChartBundle`. A call to
//! [`SeriesEngine::generate`] works out what changed since the last call:
//!
//! - nothing: the cached bundle is returned as-is
//! - only the degree: cached term rows are re-sliced and re-summed
//! - the function or `a`: the whole sample set is rebuilt first
//!
//! Failed calls leave both cache slots untouched. The engine does no locking;
//! callers serialize access to a single instance.

use crate::bundle::ChartBundle;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::sample::SampleSet;
use crate::table::TableView;
use taylor_catalog::{Catalog, FunctionDefinition};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct SeriesEngine {
    config: EngineConfig,
    samples: Option<SampleSet>,
    current: Option<ChartBundle>,
    /// Number of full resamples performed
    resamples: u64,
}

impl SeriesEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            samples: None,
            current: None,
            resamples: 0,
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce the chart bundle for `function` at `degree` around `a`.
    ///
    /// `degree` must name one of the entry's terms; anything else fails with
    /// `InvalidDegree` and leaves the cache as it was. `a` is used as given,
    /// even outside `function.a_range`.
    pub fn generate(
        &mut self,
        function: &FunctionDefinition,
        degree: usize,
        a: f64,
    ) -> Result<ChartBundle, EngineError> {
        if !function.accepts_degree(degree) {
            return Err(EngineError::InvalidDegree {
                function: function.id.to_string(),
                degree,
                term_count: function.term_count(),
            });
        }

        // The current bundle is always sliced from the current samples
        let same_samples = self
            .samples
            .as_ref()
            .map_or(false, |samples| samples.matches(function, a));
        if same_samples {
            if let Some(bundle) = self.current.as_ref().filter(|b| b.degree == degree) {
                trace!(function = %function.id, degree, a, "chart bundle unchanged");
                return Ok(bundle.clone());
            }
        }

        let samples = match self.samples.take() {
            Some(samples) if samples.matches(function, a) => samples,
            _ => {
                let samples = SampleSet::build(function, a, &self.config);
                self.resamples += 1;
                debug!(
                    function = %function.id,
                    a,
                    grid_len = samples.grid().len(),
                    terms = function.term_count(),
                    "resampled series"
                );
                samples
            }
        };

        let bundle = ChartBundle::from_samples(&samples, function, degree, self.config.value_precision);
        self.samples = Some(samples);
        self.current = Some(bundle.clone());
        Ok(bundle)
    }

    /// Look `id` up in `catalog` and generate its bundle
    pub fn generate_by_id(
        &mut self,
        catalog: &Catalog,
        id: &str,
        degree: usize,
        a: f64,
    ) -> Result<ChartBundle, EngineError> {
        let function = catalog.get(id)?;
        self.generate(function, degree, a)
    }

    /// Sparse summary table for a bundle of `function`
    pub fn table_view(
        &self,
        function: &FunctionDefinition,
        bundle: &ChartBundle,
    ) -> Result<TableView, EngineError> {
        TableView::build(function, bundle)
    }

    /// The bundle returned by the last successful `generate`
    pub fn last_bundle(&self) -> Option<&ChartBundle> {
        self.current.as_ref()
    }

    pub fn samples(&self) -> Option<&SampleSet> {
        self.samples.as_ref()
    }

    pub fn resample_count(&self) -> u64 {
        self.resamples
    }

    /// Drop both cache slots; the next `generate` resamples
    pub fn invalidate(&mut self) {
        self.samples = None;
        self.current = None;
    }
}

impl Default for SeriesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taylor_catalog::functions::{EXP, SIN};
    use taylor_catalog::Bounds;

    #[test]
    fn test_first_call_resamples() {
        let mut engine = SeriesEngine::new();
        assert!(engine.last_bundle().is_none());

        engine.generate(&EXP, 4, 0.0).unwrap();
        assert_eq!(engine.resample_count(), 1);
        assert!(engine.samples().unwrap().matches(&EXP, 0.0));
    }

    #[test]
    fn test_degree_change_reuses_samples() {
        let mut engine = SeriesEngine::new();
        engine.generate(&EXP, 4, 0.0).unwrap();
        let bundle = engine.generate(&EXP, 1, 0.0).unwrap();
        assert_eq!(engine.resample_count(), 1);
        assert_eq!(bundle.term_series.len(), 2);
    }

    #[test]
    fn test_function_or_a_change_resamples() {
        let mut engine = SeriesEngine::new();
        engine.generate(&EXP, 2, 0.0).unwrap();
        engine.generate(&EXP, 2, 1.0).unwrap();
        assert_eq!(engine.resample_count(), 2);
        engine.generate(&SIN, 2, 1.0).unwrap();
        assert_eq!(engine.resample_count(), 3);
    }

    #[test]
    fn test_same_id_with_other_bounds_resamples() {
        let narrow = FunctionDefinition {
            x_range: Bounds::new(0.0, 1.0),
            table_sample_points: &[0.0, 1.0],
            ..SIN
        };

        let mut engine = SeriesEngine::new();
        let wide = engine.generate(&SIN, 2, 0.0).unwrap();
        let bundle = engine.generate(&narrow, 2, 0.0).unwrap();

        assert_eq!(wide.len(), 127);
        assert_eq!(bundle.len(), 11);
        assert_eq!(bundle.grid.first(), Some(&0.0));
        assert_eq!(engine.resample_count(), 2);
    }

    #[test]
    fn test_copied_definition_reuses_samples() {
        let copy = SIN;
        let mut engine = SeriesEngine::new();
        engine.generate(&SIN, 2, 0.0).unwrap();
        engine.generate(&copy, 3, 0.0).unwrap();
        assert_eq!(engine.resample_count(), 1);
    }

    #[test]
    fn test_invalidate_forces_resample() {
        let mut engine = SeriesEngine::new();
        engine.generate(&EXP, 2, 0.0).unwrap();
        engine.invalidate();
        assert!(engine.last_bundle().is_none());
        engine.generate(&EXP, 2, 0.0).unwrap();
        assert_eq!(engine.resample_count(), 2);
    }

    #[test]
    fn test_with_config_validates() {
        let config = EngineConfig {
            tick_size: -1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            SeriesEngine::with_config(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
