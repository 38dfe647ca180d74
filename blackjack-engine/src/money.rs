//! Money helpers. All amounts are held in whole cents.

/// Convert whole dollars to cents.
pub fn dollars(amount: u64) -> u64 {
    amount * 100
}

/// Format cents as `$12` or `$12.50`.
pub fn format_money(cents: u64) -> String {
    let whole = cents / 100;
    let frac = cents % 100;
    if frac == 0 {
        format!("${}", whole)
    } else {
        format!("${}.{:02}", whole, frac)
    }
}
