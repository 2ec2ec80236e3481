use crate::core::Currency;

/// Round to 2 decimal places, the display precision for all quotes.
pub(crate) fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Convert a USD amount using the fixed rate table.
pub(crate) fn convert_from_usd(amount_usd: f64, currency: Currency) -> f64 {
    round2(amount_usd * currency.rate_from_usd())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(19.7289), 19.73);
        assert_eq!(round2(19.994), 19.99);
        assert_eq!(round2(19.995), 20.0);
    }

    #[test]
    fn test_usd_is_identity() {
        assert_eq!(convert_from_usd(29.99, Currency::USD), 29.99);
    }

    #[test]
    fn test_conversion_round_trips_within_a_cent() {
        for price in [0.99, 4.99, 19.99, 29.99, 59.99] {
            for currency in [Currency::EUR, Currency::UAH, Currency::RUB] {
                let converted = convert_from_usd(price, currency);
                let back = converted / currency.rate_from_usd();
                assert!(
                    (back - price).abs() <= 0.01,
                    "{price} {currency} -> {converted} -> {back}"
                );
            }
        }
    }
}
