//! In-game money formatting

use crate::constants::{COPPER_PER_GOLD, COPPER_PER_SILVER};

/// Format a copper amount as `"{gold}g {silver}s {copper}c"`.
///
/// Gold gets thousands separators.
///
/// ```
/// use wowapi_domain::format_gold;
///
/// assert_eq!(format_gold(9_999_999), "999g 99s 99c");
/// assert_eq!(format_gold(12_345_678_901), "1,234,567g 89s 1c");
/// ```
pub fn format_gold(copper: u64) -> String {
    let gold = copper / COPPER_PER_GOLD;
    let silver = (copper % COPPER_PER_GOLD) / COPPER_PER_SILVER;
    let copper = copper % COPPER_PER_SILVER;

    format!("{}g {}s {}c", group_thousands(gold), silver, copper)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
