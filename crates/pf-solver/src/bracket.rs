//! Bracketing search (Brent's method).

use crate::error::{SolverError, SolverResult};
use crate::root::{RootConfig, RootOutcome, RootStrategy};

/// Brent search over a fixed bracket.
///
/// Only attempted when the residual changes sign across `[lo, hi]`.
#[derive(Debug, Clone, Copy)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
}

impl Bracket {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

impl RootStrategy for Bracket {
    fn name(&self) -> &'static str {
        "brent"
    }

    fn find_root(
        &self,
        f: &dyn Fn(f64) -> f64,
        config: &RootConfig,
    ) -> SolverResult<RootOutcome> {
        brent(f, self.lo, self.hi, config)
    }
}

/// Brent's method: inverse quadratic interpolation and secant steps guarded by
/// bisection, so the bracket always shrinks.
pub fn brent(
    f: &dyn Fn(f64) -> f64,
    lo: f64,
    hi: f64,
    config: &RootConfig,
) -> SolverResult<RootOutcome> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(SolverError::InvalidBracket { lo, hi });
    }

    let mut x_pre = lo;
    let mut x_cur = hi;
    let mut f_pre = f(x_pre);
    let mut f_cur = f(x_cur);

    if !f_pre.is_finite() {
        return Err(SolverError::NonFinite { x: x_pre });
    }
    if !f_cur.is_finite() {
        return Err(SolverError::NonFinite { x: x_cur });
    }
    if f_pre == 0.0 {
        return Ok(RootOutcome {
            root: x_pre,
            iterations: 0,
        });
    }
    if f_cur == 0.0 {
        return Ok(RootOutcome {
            root: x_cur,
            iterations: 0,
        });
    }
    if f_pre.signum() == f_cur.signum() {
        return Err(SolverError::NoSignChange {
            lo,
            hi,
            f_lo: f_pre,
            f_hi: f_cur,
        });
    }

    // x_blk is the contrapoint: f(x_blk) and f(x_cur) always differ in sign
    let mut x_blk = 0.0;
    let mut f_blk = 0.0;
    let mut s_pre = 0.0;
    let mut s_cur = 0.0;

    for iter in 0..config.max_iterations {
        if f_pre != 0.0 && f_cur != 0.0 && f_pre.signum() != f_cur.signum() {
            x_blk = x_pre;
            f_blk = f_pre;
            s_pre = x_cur - x_pre;
            s_cur = s_pre;
        }
        if f_blk.abs() < f_cur.abs() {
            x_pre = x_cur;
            x_cur = x_blk;
            x_blk = x_pre;

            f_pre = f_cur;
            f_cur = f_blk;
            f_blk = f_pre;
        }

        let delta = 0.5 * config.step_tolerance(x_cur);
        let s_bis = 0.5 * (x_blk - x_cur);
        if f_cur == 0.0 || s_bis.abs() < delta {
            return Ok(RootOutcome {
                root: x_cur,
                iterations: iter,
            });
        }

        if s_pre.abs() > delta && f_cur.abs() < f_pre.abs() {
            let s_try = if x_pre == x_blk {
                // secant
                -f_cur * (x_cur - x_pre) / (f_cur - f_pre)
            } else {
                // inverse quadratic
                let d_pre = (f_pre - f_cur) / (x_pre - x_cur);
                let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                -f_cur * (f_blk * d_blk - f_pre * d_pre) / (d_blk * d_pre * (f_blk - f_pre))
            };
            if 2.0 * s_try.abs() < s_pre.abs().min(3.0 * s_bis.abs() - delta) {
                s_pre = s_cur;
                s_cur = s_try;
            } else {
                s_pre = s_bis;
                s_cur = s_bis;
            }
        } else {
            s_pre = s_bis;
            s_cur = s_bis;
        }

        x_pre = x_cur;
        f_pre = f_cur;
        if s_cur.abs() > delta {
            x_cur += s_cur;
        } else {
            x_cur += if s_bis > 0.0 { delta } else { -delta };
        }

        f_cur = f(x_cur);
        if !f_cur.is_finite() {
            return Err(SolverError::NonFinite { x: x_cur });
        }
    }

    Err(SolverError::MaxIterations {
        iterations: config.max_iterations,
        last: x_cur,
    })
}
