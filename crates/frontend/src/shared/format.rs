/// Price as the admin table shows it: shortest form, `$10`, `$9.99`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Price with two decimals, as the client table shows it: `$10.00`
pub fn format_price_fixed(price: f64) -> String {
    format!("${:.2}", price)
}
