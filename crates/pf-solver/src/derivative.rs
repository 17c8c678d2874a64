//! Finite difference slope for scalar functions.

/// Forward difference `(f(x+h) - f(x)) / h` with `h = epsilon * max(|x|, 1)`.
pub fn forward_difference(f: &dyn Fn(f64) -> f64, x: f64, fx: f64, epsilon: f64) -> f64 {
    let dx = epsilon * x.abs().max(1.0);
    (f(x + dx) - fx) / dx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_linear() {
        let f = |x: f64| 2.0 * x;
        assert!((forward_difference(&f, 3.0, 6.0, 1e-7) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn slope_quadratic() {
        let f = |x: f64| x * x;
        assert!((forward_difference(&f, 3.0, 9.0, 1e-7) - 6.0).abs() < 1e-5);
    }
}
