use num_format::{Locale, ToFormattedString};

/// USD with thousands separators and cents, e.g. `$1,250,000.00`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_formatted_string(&Locale::en);

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", cents % 100)
}
