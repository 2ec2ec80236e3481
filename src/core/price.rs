use serde::{Deserialize, Serialize};

/// Maximum discount a quote may carry, in percentage points
pub const DISCOUNT_CAP: u8 = 90;

/// Digital storefront a price is quoted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    Steam,
    Epic,
    Xbox,
    Ea,
    Ubisoft,
}

impl Store {
    /// All supported stores, in display order
    pub const ALL: [Store; 5] = [
        Store::Steam,
        Store::Epic,
        Store::Xbox,
        Store::Ea,
        Store::Ubisoft,
    ];

    /// Store price relative to the Steam baseline. Steam prices are
    /// divided by this to derive the store's price.
    pub fn multiplier(&self) -> f64 {
        match self {
            Store::Steam => 1.0,
            Store::Epic => 0.95,
            Store::Xbox => 1.15,
            Store::Ea => 1.05,
            Store::Ubisoft => 1.00,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Store::Steam => "steam",
            Store::Epic => "epic",
            Store::Xbox => "xbox",
            Store::Ea => "ea",
            Store::Ubisoft => "ubisoft",
        }
    }
}

impl std::str::FromStr for Store {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "steam" => Ok(Store::Steam),
            "epic" => Ok(Store::Epic),
            "xbox" => Ok(Store::Xbox),
            "ea" => Ok(Store::Ea),
            "ubisoft" => Ok(Store::Ubisoft),
            other => Err(format!("unknown store: {other}")),
        }
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported display currencies, quoted against a USD base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    UAH,
    RUB,
}

impl Currency {
    /// Fixed conversion rate from USD
    pub fn rate_from_usd(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.93,
            Currency::UAH => 39.5,
            Currency::RUB => 92.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::UAH => "₴",
            Currency::RUB => "₽",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::UAH => "UAH",
            Currency::RUB => "RUB",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "UAH" => Ok(Currency::UAH),
            "RUB" => Ok(Currency::RUB),
            other => Err(format!("unknown currency: {other}")),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a quote's number was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceProvenance {
    /// Direct Steam price_overview data
    SteamApi,
    /// Static estimation table, Steam unresolvable
    SteamEstimated,
    /// Derived from a Steam baseline for another store
    Calculated,
}

/// One price estimate for a (game, store, currency) triple
///
/// Invariants: `original_price` is `Some` iff `discount_percent > 0`,
/// and `price = original_price * (1 - discount_percent / 100)` then.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_percent: u8,
    pub currency: Currency,
    pub store: Store,
    pub is_real_price: bool,
    pub provenance: PriceProvenance,
}

impl PriceQuote {
    /// A zero price renders as "free" downstream, not as a priced item
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Formatted price for display, e.g. `$19.99` or `Free`
    pub fn display_price(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("{}{:.2}", self.currency.symbol(), self.price)
        }
    }
}

/// Clamp a discount into [0, DISCOUNT_CAP]
pub fn clamp_discount(percent: i64) -> u8 {
    percent.clamp(0, DISCOUNT_CAP as i64) as u8
}
