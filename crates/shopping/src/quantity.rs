use crate::normalize::DEFAULT_UNIT;

/// Fractional parts closer than this to a common cooking fraction print as that fraction.
const FRACTION_TOLERANCE: f64 = 0.06;

const COMMON_FRACTIONS: [(f64, &str); 5] = [
    (0.25, "1/4"),
    (0.33, "1/3"),
    (0.5, "1/2"),
    (0.66, "2/3"),
    (0.75, "3/4"),
];

/// Units that take a plural form, as (singular, plural).
const COUNTABLE_UNITS: [(&str, &str); 5] = [
    ("piece", "pieces"),
    ("slice", "slices"),
    ("can", "cans"),
    ("cup", "cups"),
    ("handful", "handfuls"),
];

/// Format a merged quantity and its unit as a grocery-friendly label
///
/// Formats:
/// - Whole numbers: 2 piece → "2 pieces"
/// - Common fractions: 1.5 cup → "1 1/2 cups", 0.5 cup → "1/2 cup"
/// - Anything else: rounded to two decimals, 2.125 tsp → "2.13 tsp"
///
/// Non-finite or non-positive quantities fall back to `"1 {unit}"`.
pub fn format_qty(qty: f64, unit: &str) -> String {
    let unit = match unit.trim() {
        "" => DEFAULT_UNIT,
        unit => unit,
    };

    if !qty.is_finite() || qty <= 0.0 {
        return format!("1 {unit}");
    }

    let pretty = pretty_number(qty);

    match countable_forms(unit) {
        Some((singular, plural)) => {
            let unit = if takes_singular(qty) {
                singular
            } else {
                plural
            };
            format!("{pretty} {unit}")
        }
        None => format!("{pretty} {unit}"),
    }
}

/// Render a positive number, preferring common cooking fractions.
pub fn pretty_number(value: f64) -> String {
    let whole = value.floor();

    if let Some(fraction) = fraction_label(value - whole) {
        return if whole == 0.0 {
            fraction.to_string()
        } else {
            format!("{} {fraction}", whole as u64)
        };
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn fraction_label(fraction: f64) -> Option<&'static str> {
    COMMON_FRACTIONS
        .iter()
        .find(|(value, _)| (fraction - value).abs() < FRACTION_TOLERANCE)
        .map(|(_, label)| *label)
}

fn countable_forms(unit: &str) -> Option<(&'static str, &'static str)> {
    let lower = unit.to_lowercase();
    COUNTABLE_UNITS
        .iter()
        .find(|(singular, plural)| lower == *singular || lower == *plural)
        .copied()
}

/// One or less reads as singular: "1 cup", "1/2 cup", "1 1/2 cups".
fn takes_singular(value: f64) -> bool {
    value < 1.0 || (value - 1.0).abs() < 1e-9
}
