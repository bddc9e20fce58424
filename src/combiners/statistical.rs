//! Statistical combiners: `AverageF64`

use crate::collection::CombineFn;
use crate::utils::AsF64;

/* ===================== AverageF64 ===================== */

/// Arithmetic mean as `f64`.
///
/// Inputs go through [`AsF64`]; inputs without a numeric view are skipped
/// and do not count towards the denominator.
///
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `Option<f64>`, `None` when nothing numeric was seen
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V: AsF64> CombineFn<V, (f64, u64), Option<f64>> for AverageF64 {
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        if let Some(x) = v.as_f64() {
            acc.0 += x;
            acc.1 += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> Option<f64> {
        if acc.1 == 0 {
            None
        } else {
            Some(acc.0 / (acc.1 as f64))
        }
    }
}
