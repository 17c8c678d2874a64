//! Ordered fallback over root-finding strategies.
//!
//! Strategies are tried in insertion order. The first one that returns a
//! root inside the admissible domain wins; every failure is recorded and the
//! next strategy runs. Nothing here panics or propagates a strategy error.

use crate::error::SolverError;
use crate::root::{RootConfig, RootStrategy};
use tracing::debug;

/// Which roots the chain accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootDomain {
    /// Finite and strictly positive.
    #[default]
    Positive,
    /// Any finite value.
    Finite,
}

impl RootDomain {
    pub fn admits(self, x: f64) -> bool {
        match self {
            RootDomain::Positive => x.is_finite() && x > 0.0,
            RootDomain::Finite => x.is_finite(),
        }
    }
}

/// Winning strategy and its root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSolution {
    pub root: f64,
    pub strategy: &'static str,
    pub iterations: usize,
}

/// Result of running a chain: an optional solution plus the failure trail.
#[derive(Debug, Clone, Default)]
pub struct ChainOutcome {
    pub solution: Option<ChainSolution>,
    pub failures: Vec<(&'static str, SolverError)>,
}

impl ChainOutcome {
    pub fn root(&self) -> Option<f64> {
        self.solution.map(|s| s.root)
    }

    pub fn converged(&self) -> bool {
        self.solution.is_some()
    }
}

/// Ordered list of strategies sharing one configuration.
pub struct StrategyChain {
    strategies: Vec<Box<dyn RootStrategy>>,
    config: RootConfig,
    domain: RootDomain,
}

impl StrategyChain {
    pub fn new(config: RootConfig) -> Self {
        Self {
            strategies: Vec::new(),
            config,
            domain: RootDomain::default(),
        }
    }

    pub fn with_domain(mut self, domain: RootDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Append a strategy to the end of the chain.
    pub fn then(mut self, strategy: impl RootStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn solve(&self, f: &dyn Fn(f64) -> f64) -> ChainOutcome {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            let name = strategy.name();
            match strategy.find_root(f, &self.config) {
                Ok(out) if self.domain.admits(out.root) => {
                    debug!(strategy = name, root = out.root, iterations = out.iterations, "root found");
                    return ChainOutcome {
                        solution: Some(ChainSolution {
                            root: out.root,
                            strategy: name,
                            iterations: out.iterations,
                        }),
                        failures,
                    };
                }
                Ok(out) => {
                    debug!(strategy = name, root = out.root, "root outside admissible domain");
                    failures.push((name, SolverError::OutsideDomain { root: out.root }));
                }
                Err(err) => {
                    debug!(strategy = name, error = %err, "strategy failed");
                    failures.push((name, err));
                }
            }
        }

        ChainOutcome {
            solution: None,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bracket, Newton, Secant};

    #[test]
    fn first_success_wins() {
        let f = |x: f64| x * x - 4.0;
        let chain = StrategyChain::new(RootConfig::default())
            .then(Bracket::new(0.0, 10.0))
            .then(Secant::new(1.0, 3.0));
        let out = chain.solve(&f);
        let sol = out.solution.unwrap();
        assert_eq!(sol.strategy, "brent");
        assert!((sol.root - 2.0).abs() < 1e-9);
        assert!(out.failures.is_empty());
    }

    #[test]
    fn falls_through_on_missing_sign_change() {
        let f = |x: f64| x * x - 4.0;
        let chain = StrategyChain::new(RootConfig::default())
            .then(Bracket::new(3.0, 10.0))
            .then(Secant::new(1.0, 3.0));
        let out = chain.solve(&f);
        assert_eq!(out.solution.unwrap().strategy, "secant");
        assert_eq!(out.failures.len(), 1);
        assert!(matches!(out.failures[0].1, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn negative_root_is_rejected() {
        let f = |x: f64| x + 2.0;
        let chain = StrategyChain::new(RootConfig::default()).then(Newton::new(1.0));
        let out = chain.solve(&f);
        assert!(!out.converged());
        assert!(matches!(
            out.failures[0].1,
            SolverError::OutsideDomain { .. }
        ));

        let chain = StrategyChain::new(RootConfig::default())
            .with_domain(RootDomain::Finite)
            .then(Newton::new(1.0));
        assert!((chain.solve(&f).root().unwrap() + 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_chain_has_no_solution() {
        let chain = StrategyChain::new(RootConfig::default());
        assert!(chain.is_empty());
        assert!(chain.solve(&|x| x).solution.is_none());
    }
}
