use log::warn;

/// Environment variable read by [`SolverConfig::from_env`].
pub const MAX_EXPANSIONS_VAR: &str = "RUSH_HOUR_MAX_EXPANSIONS";

/// Knobs for a single solve call. The default runs the search to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop with [`crate::SolveError::BudgetExhausted`] once this many states
    /// have been expanded.
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Default config, with the expansion budget taken from
    /// `RUSH_HOUR_MAX_EXPANSIONS` when it is set.
    pub fn from_env() -> Self {
        Self::from_budget_var(std::env::var(MAX_EXPANSIONS_VAR).ok().as_deref())
    }

    fn from_budget_var(value: Option<&str>) -> Self {
        let max_expansions = value.and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(max) => Some(max),
            Err(e) => {
                warn!("ignoring {}={:?}: {}", MAX_EXPANSIONS_VAR, raw, e);
                None
            }
        });

        SolverConfig { max_expansions }
    }
}
