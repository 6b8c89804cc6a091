pub mod time;

use rust_decimal::Decimal;

/// Format a price for display in the tables and detail views.
pub fn format_price(price: Decimal) -> String {
    format!("${price:.2}")
}

/// Trimmed input, or `None` when the user left the field blank.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn prices_render_with_two_decimal_places() {
        assert_eq!(format_price(dec!(9.9)), "$9.90");
        assert_eq!(format_price(dec!(12)), "$12.00");
    }

    #[test]
    fn blank_input_becomes_none() {
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(" Galaxy "), Some("Galaxy".to_string()));
    }
}
