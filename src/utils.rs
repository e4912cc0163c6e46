/// Rounds `value` to `decimals` decimal places, halves away from zero.
///
/// Every probability (one decimal), risk score (one decimal) and statistic
/// (two decimals) goes through this, so displayed and exported figures agree.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
