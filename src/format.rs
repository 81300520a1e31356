/// Fixed display precision: at most this many fractional digits survive
/// formatting.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Renders a result for display and for re-use as accumulated input.
///
/// Finite values are rounded to at most [`MAX_FRACTION_DIGITS`] fractional
/// digits with trailing zeros and a trailing decimal point stripped; the
/// separator is always `.`, never localized. Non-finite values keep the
/// calculator's display symbols and are not valid as further input.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    // Precision above guarantees a decimal point, so stripping zeros can never
    // eat into the integer part.
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
