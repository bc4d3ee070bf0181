use serde::Serialize;

/// How a percentage and its complement (`100 - x`) are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ComplementPolicy {
    /// Clamp the input into `[0, 100]` first; both parts are non-negative and sum to 100.
    #[default]
    Clamp,
    /// Take the input as-is; out-of-range input yields an out-of-range complement.
    Raw,
}

/// Splits a percentage into `(value, 100 - value)` under `policy`.
///
/// Non-finite input counts as `0`.
pub fn complement_pair(value: f64, policy: ComplementPolicy) -> (f64, f64) {
    let value = if value.is_finite() { value } else { 0.0 };
    match policy {
        ComplementPolicy::Raw => (value, 100.0 - value),
        ComplementPolicy::Clamp => {
            if !(0.0..=100.0).contains(&value) {
                tracing::warn!(value, "percentage outside 0..=100; clamping");
            }
            let clamped = value.clamp(0.0, 100.0);
            (clamped, 100.0 - clamped)
        }
    }
}
