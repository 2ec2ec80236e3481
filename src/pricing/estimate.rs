//! Static price estimation table, used when Steam cannot resolve a
//! title. Prices are USD; discounts mirror typical storefront sales.

/// Base price and discount applied when nothing matches.
pub(crate) const DEFAULT_ESTIMATE: (f64, u8) = (29.99, 0);

/// Lowercase title substrings mapped to (base USD price, discount %).
/// First match wins, so more specific substrings come first.
const ESTIMATES: &[(&str, f64, u8)] = &[
    ("elden ring", 59.99, 20),
    ("red dead", 59.99, 50),
    ("cyberpunk", 59.99, 30),
    ("witcher", 39.99, 70),
    ("disco elysium", 39.99, 65),
    ("doom", 39.99, 50),
    ("hades", 24.99, 20),
    ("unpacking", 19.99, 0),
    ("stardew", 14.99, 0),
    ("portal", 9.99, 0),
    ("a short hike", 7.99, 0),
    ("vampire survivors", 4.99, 0),
    ("minecraft", 29.99, 0),
];

/// Look up an estimated (base price, discount) for a title.
pub(crate) fn estimate_for(game_name: &str) -> (f64, u8) {
    let needle = game_name.to_lowercase();
    ESTIMATES
        .iter()
        .find(|(pattern, _, _)| needle.contains(pattern))
        .map(|(_, base, discount)| (*base, *discount))
        .unwrap_or(DEFAULT_ESTIMATE)
}
