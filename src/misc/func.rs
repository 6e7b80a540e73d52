use special::Gamma;
use std::fmt::Debug;

/// Convert a slice to a printable string, eliding the middle when it holds
/// more than `max_entries` values.
///
/// # Example
///
/// ```rust
/// # use gausbin::misc::vec_to_string;
/// let xs: Vec<u8> = vec![0, 1, 2, 3, 4, 5];
///
/// assert_eq!(vec_to_string(&xs, 6).as_str(), "[0, 1, 2, 3, 4, 5]");
/// assert_eq!(vec_to_string(&xs, 5).as_str(), "[0, 1, 2, 3, ..., 5]");
/// ```
pub fn vec_to_string<T: Debug>(xs: &[T], max_entries: usize) -> String {
    let n = xs.len();
    let entries: Vec<String> = if n <= max_entries || max_entries < 2 {
        xs.iter().map(|x| format!("{:?}", x)).collect()
    } else {
        xs[..max_entries - 1]
            .iter()
            .map(|x| format!("{:?}", x))
            .chain(std::iter::once(String::from("...")))
            .chain(xs.last().map(|x| format!("{:?}", x)))
            .collect()
    };

    format!("[{}]", entries.join(", "))
}

/// Natural logarithm of binomial coefficent, ln nCk
///
/// Computed through `ln Γ` so it stays finite long after `n!` overflows.
///
/// # Example
///
/// ```rust
/// use gausbin::misc::ln_binom;
///
/// assert!((ln_binom(4.0, 2.0) - 6.0_f64.ln()).abs() < 1E-12);
/// ```
pub fn ln_binom(n: f64, k: f64) -> f64 {
    (n + 1.0).ln_gamma().0 - (k + 1.0).ln_gamma().0 - (n - k + 1.0).ln_gamma().0
}
