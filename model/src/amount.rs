use alloy_primitives::{
    utils::{format_units, parse_units, UnitsError},
    U256,
};
use num_format::{Locale, ToFormattedString};

/// Convert a human token amount to base units.
///
/// The amount is first rounded to `token_precision` decimal digits and
/// rendered as a decimal string; everything past that point is exact
/// integer arithmetic, so no binary-float artifacts reach the base-unit
/// value.
pub fn parse_token_amount(
    amount_tokens: f64,
    token_precision: u32,
    unit_decimals: u8,
) -> Result<U256, UnitsError> {
    let rounded = format!("{amount_tokens:.precision$}", precision = token_precision as usize);
    Ok(parse_units(&rounded, unit_decimals)?.get_absolute())
}

/// Render a base-unit amount as a human token value with a fixed number of
/// output digits, e.g. for table cells and balance labels.
pub fn format_token_amount(
    amount: U256,
    unit_decimals: u8,
    output_decimals: usize,
) -> Result<String, UnitsError> {
    let value = format_units(amount, unit_decimals)?;
    let value = value.parse::<f64>().unwrap_or(0.0);
    Ok(format!("{value:.output_decimals$}"))
}

/// Same as [`format_token_amount`] with thousands separators in the whole
/// part: `1234567.891` renders as `1,234,567.89`.
pub fn format_token_amount_grouped(
    amount: U256,
    unit_decimals: u8,
    output_decimals: usize,
) -> Result<String, UnitsError> {
    let plain = format_token_amount(amount, unit_decimals, output_decimals)?;
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let whole = whole.parse::<u128>().unwrap_or(0).to_formatted_string(&Locale::en);

    Ok(if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    })
}
