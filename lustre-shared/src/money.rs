/// Currency amounts are carried as integer cents end to end; formatting to
/// two decimals happens only at the display edge.
pub type Cents = i64;

/// Convert a decimal dollar amount from a catalog resource into cents.
pub fn dollars_to_cents(dollars: f64) -> Cents {
    (dollars * 100.0).round() as Cents
}

/// Two-decimal display formatting, e.g. `12960` -> `"$129.60"`.
pub fn format_usd(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12960), "$129.60");
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(5), "$0.05");
    }

    #[test]
    fn test_dollars_to_cents_rounds() {
        assert_eq!(dollars_to_cents(49.99), 4999);
        assert_eq!(dollars_to_cents(100.0), 10000);
        assert_eq!(dollars_to_cents(0.335), 34);
    }
}
