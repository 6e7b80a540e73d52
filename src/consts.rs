//! Mathematical constants and defaults

/// 0.5 ln(2π)
pub const HALF_LN_2PI: f64 = 0.918_938_533_204_672_7;

/// Number of evenly spaced points used when no count is given for density
/// plot data.
pub const DEFAULT_PDF_SPACES: usize = 50;
