mod tables;

use std::collections::BTreeMap;
use std::sync::Arc;

/// Market snapshot for one commodity.
#[derive(Debug, Clone, Copy)]
pub struct MarketEntry {
    pub current: &'static str,
    pub trend: &'static str,
    pub mandi: &'static str,
}

/// Result of a price lookup, tagged with the source table it came from.
#[derive(Debug, Clone, Copy)]
pub enum PriceQuote {
    /// Full snapshot from the preplanned market table.
    Snapshot(MarketEntry),
    /// Plain sample figure from the legacy price table.
    Sample(&'static str),
}

struct Tables {
    crop_recommendations: BTreeMap<&'static str, &'static str>,
    growth_stages: BTreeMap<&'static str, Vec<(&'static str, &'static str)>>,
    market: BTreeMap<&'static str, MarketEntry>,
    legacy_prices: BTreeMap<&'static str, &'static str>,
    // Iteration order is the documented match priority, so this stays a Vec.
    disease_symptoms: Vec<(&'static str, &'static str)>,
    weather_notes: BTreeMap<&'static str, &'static str>,
}

/// Static, read-only advice tables. Built once at startup and shared by
/// every handler; cloning the handle is cheap.
#[derive(Clone)]
pub struct KnowledgeBase {
    tables: Arc<Tables>,
}

impl KnowledgeBase {
    pub fn load() -> Self {
        Self {
            tables: Arc::new(tables::build()),
        }
    }

    pub fn crop_recommendation(&self, crop: &str) -> Option<&'static str> {
        self.tables.crop_recommendations.get(crop).copied()
    }

    /// Growth stages in chronological order, as stored.
    pub fn growth_stages(&self, crop: &str) -> Option<&[(&'static str, &'static str)]> {
        self.tables.growth_stages.get(crop).map(Vec::as_slice)
    }

    pub fn market_snapshot(&self, commodity: &str) -> Option<MarketEntry> {
        self.tables.market.get(commodity).copied()
    }

    /// Price sources tried in priority order: the preplanned market table
    /// first, then the legacy sample table.
    pub fn price_quote(&self, commodity: &str) -> Option<PriceQuote> {
        if let Some(entry) = self.tables.market.get(commodity) {
            return Some(PriceQuote::Snapshot(*entry));
        }
        self.tables
            .legacy_prices
            .get(commodity)
            .copied()
            .map(PriceQuote::Sample)
    }

    /// Known crop keys, alphabetically sorted.
    pub fn known_crops(&self) -> Vec<&'static str> {
        self.tables.crop_recommendations.keys().copied().collect()
    }

    /// Commodities any price source knows about, alphabetically sorted.
    pub fn known_commodities(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .tables
            .market
            .keys()
            .chain(self.tables.legacy_prices.keys())
            .copied()
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Symptom entries in match-priority order.
    pub fn disease_entries(&self) -> &[(&'static str, &'static str)] {
        &self.tables.disease_symptoms
    }

    pub fn weather_note(&self, bucket: &str) -> Option<&'static str> {
        self.tables.weather_notes.get(bucket).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_crops_are_sorted() {
        let kb = KnowledgeBase::load();
        let crops = kb.known_crops();
        let mut sorted = crops.clone();
        sorted.sort();
        assert_eq!(crops, sorted);
        assert!(crops.contains(&"wheat"));
    }

    #[test]
    fn price_sources_are_tried_in_order() {
        let kb = KnowledgeBase::load();
        assert!(matches!(kb.price_quote("urea"), Some(PriceQuote::Snapshot(_))));
        assert!(matches!(kb.price_quote("rice"), Some(PriceQuote::Sample(_))));
        assert!(kb.price_quote("saffron").is_none());
    }

    #[test]
    fn every_growth_stage_crop_has_a_recommendation() {
        let kb = KnowledgeBase::load();
        for crop in kb.tables.growth_stages.keys() {
            assert!(
                kb.crop_recommendation(crop).is_some(),
                "growth stages without recommendation for {crop}"
            );
        }
    }
}
