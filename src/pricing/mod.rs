//! Derives per-storefront [`PriceQuote`]s from a Steam baseline.
//!
//! Every path degrades instead of failing: an unreachable Steam lookup
//! becomes a table estimate, and non-Steam stores are always derived
//! from the baseline with fixed multipliers. Provenance tags tell the
//! caller which of those happened.

mod currency;
mod estimate;

use crate::core::price::{clamp_discount, DISCOUNT_CAP};
use crate::core::{Currency, PriceProvenance, PriceQuote, Store};
use crate::providers::SteamPriceLookup;

use currency::{convert_from_usd, round2};

/// Extra discount percentage points Epic promotions add on top of the
/// carried-over Steam discount.
const EPIC_DISCOUNT_BONUS: i64 = 5;

/// Steam baseline in USD, before store derivation and conversion.
#[derive(Debug, Clone, Copy)]
struct SteamBase {
    price_usd: f64,
    original_usd: Option<f64>,
    discount_percent: u8,
    provenance: PriceProvenance,
}

/// Computes price quotes. Stateless; the Steam lookup collaborator is
/// passed per call so callers control transport and stubbing.
#[derive(Debug, Default, Clone)]
pub struct PriceReconciler;

impl PriceReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Quote one store in one currency. Total: lookup failures and
    /// unresolvable titles degrade to estimates, annotated through
    /// `provenance` and `is_real_price`.
    pub async fn quote(
        &self,
        game_name: &str,
        store: Store,
        currency: Currency,
        lookup: &dyn SteamPriceLookup,
    ) -> PriceQuote {
        let base = self.steam_base(game_name, lookup).await;
        self.derive(store, currency, base)
    }

    /// Quote all stores in one currency, resolving the Steam baseline
    /// exactly once.
    pub async fn quote_all(
        &self,
        game_name: &str,
        currency: Currency,
        lookup: &dyn SteamPriceLookup,
    ) -> Vec<PriceQuote> {
        let base = self.steam_base(game_name, lookup).await;
        Store::ALL
            .iter()
            .map(|store| self.derive(*store, currency, base))
            .collect()
    }

    /// Resolve the USD baseline: real Steam data when the lookup
    /// succeeds, the estimation table otherwise.
    async fn steam_base(&self, game_name: &str, lookup: &dyn SteamPriceLookup) -> SteamBase {
        match lookup.lookup(game_name).await {
            Ok(Some(price)) => {
                let discount = clamp_discount(price.discount_percent as i64);
                if discount > 0 {
                    // Recompute from the initial price so the quote
                    // invariant holds even against inconsistent API data
                    let original = price.initial_price;
                    SteamBase {
                        price_usd: round2(original * (1.0 - discount as f64 / 100.0)),
                        original_usd: Some(original),
                        discount_percent: discount,
                        provenance: PriceProvenance::SteamApi,
                    }
                } else {
                    SteamBase {
                        price_usd: price.final_price,
                        original_usd: None,
                        discount_percent: 0,
                        provenance: PriceProvenance::SteamApi,
                    }
                }
            }
            Ok(None) => {
                tracing::debug!("no Steam price for '{}', estimating", game_name);
                Self::estimated_base(game_name)
            }
            Err(e) => {
                tracing::warn!("Steam lookup failed for '{}': {}", game_name, e);
                Self::estimated_base(game_name)
            }
        }
    }

    fn estimated_base(game_name: &str) -> SteamBase {
        let (base_price, discount) = estimate::estimate_for(game_name);
        let discount = clamp_discount(discount as i64);
        if discount > 0 {
            SteamBase {
                price_usd: round2(base_price * (1.0 - discount as f64 / 100.0)),
                original_usd: Some(base_price),
                discount_percent: discount,
                provenance: PriceProvenance::SteamEstimated,
            }
        } else {
            SteamBase {
                price_usd: base_price,
                original_usd: None,
                discount_percent: 0,
                provenance: PriceProvenance::SteamEstimated,
            }
        }
    }

    /// Derive a store's quote from the baseline and convert it.
    fn derive(&self, store: Store, currency: Currency, base: SteamBase) -> PriceQuote {
        if store == Store::Steam {
            return Self::finish(
                base.price_usd,
                base.original_usd,
                base.discount_percent,
                store,
                currency,
                base.provenance == PriceProvenance::SteamApi,
                base.provenance,
            );
        }

        // Multipliers express the store's price relative to the Steam
        // baseline, so derivation divides by them
        let base_usd = base.original_usd.unwrap_or(base.price_usd);
        let store_base_usd = base_usd / store.multiplier();

        let mut discount = base.discount_percent as i64;
        if store == Store::Epic {
            discount += EPIC_DISCOUNT_BONUS;
        }
        let discount = clamp_discount(discount);

        let (price_usd, original_usd) = if discount > 0 {
            (
                store_base_usd * (1.0 - discount as f64 / 100.0),
                Some(store_base_usd),
            )
        } else {
            (store_base_usd, None)
        };

        Self::finish(
            price_usd,
            original_usd,
            discount,
            store,
            currency,
            false,
            PriceProvenance::Calculated,
        )
    }

    /// Convert a USD quote into the requested currency. Discounted
    /// quotes recompute `price` from the rounded original so the price
    /// invariant survives rounding.
    #[allow(clippy::too_many_arguments)]
    fn finish(
        price_usd: f64,
        original_usd: Option<f64>,
        discount_percent: u8,
        store: Store,
        currency: Currency,
        is_real_price: bool,
        provenance: PriceProvenance,
    ) -> PriceQuote {
        debug_assert!(discount_percent <= DISCOUNT_CAP);
        match original_usd {
            Some(original_usd) if discount_percent > 0 => {
                let original = convert_from_usd(original_usd, currency);
                PriceQuote {
                    price: round2(original * (1.0 - discount_percent as f64 / 100.0)),
                    original_price: Some(original),
                    discount_percent,
                    currency,
                    store,
                    is_real_price,
                    provenance,
                }
            }
            _ => PriceQuote {
                price: convert_from_usd(price_usd, currency),
                original_price: None,
                discount_percent: 0,
                currency,
                store,
                is_real_price,
                provenance,
            },
        }
    }
}
