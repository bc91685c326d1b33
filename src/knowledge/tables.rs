use std::collections::BTreeMap;

use super::{MarketEntry, Tables};

pub(super) fn build() -> Tables {
    Tables {
        crop_recommendations: crop_recommendations(),
        growth_stages: growth_stages(),
        market: market(),
        legacy_prices: legacy_prices(),
        disease_symptoms: disease_symptoms(),
        weather_notes: weather_notes(),
    }
}

fn crop_recommendations() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        (
            "wheat",
            "Urea 50kg/acre in two splits; use certified seeds; irrigate at tillering and before heading.",
        ),
        (
            "rice",
            "DAP 40kg + Potash 20kg per acre; maintain flooded fields; use pest resistant seedlings.",
        ),
        (
            "maize",
            "Apply NPK (20:20:20) at sowing and urea at 30 DAS; ensure good drainage and timely weeding.",
        ),
        (
            "cotton",
            "Balanced NPK at sowing and top-dress nitrogen during vegetative growth; monitor boll formation.",
        ),
    ])
}

fn growth_stages() -> BTreeMap<&'static str, Vec<(&'static str, &'static str)>> {
    BTreeMap::from([
        (
            "wheat",
            vec![
                ("Sowing", "Prepare fine seedbed; ensure recommended seed rate."),
                ("Tillering", "Apply first split of nitrogen; check for weeds."),
                (
                    "Booting/Heading",
                    "Apply second split of nitrogen; scout for pests.",
                ),
                ("Maturity", "Reduce irrigation and prepare for harvest."),
            ],
        ),
        (
            "rice",
            vec![
                (
                    "Nursery/Transplant",
                    "Use healthy seedlings; transplant at 25-30 DAS.",
                ),
                ("Tillering", "Top dress nitrogen; maintain water levels."),
                (
                    "Panicle Initiation",
                    "Monitor for pests and apply recommended fungicide if necessary.",
                ),
                ("Maturity", "Drain field prior to harvest and dry properly."),
            ],
        ),
        (
            "maize",
            vec![
                (
                    "Germination",
                    "Ensure moisture at seed depth; light irrigation if dry.",
                ),
                ("Vegetative", "Side-dress nitrogen at 30 DAS; control weeds."),
                ("Tasseling", "Watch for borers; timely irrigation."),
                (
                    "Harvest",
                    "Harvest when kernels are hard; sun-dry to required moisture.",
                ),
            ],
        ),
    ])
}

fn market() -> BTreeMap<&'static str, MarketEntry> {
    BTreeMap::from([
        (
            "wheat",
            MarketEntry {
                current: "₹2,100 per quintal",
                trend: "down 2% (mild fall due to local harvest)",
                mandi: "Nearby mandi: Raipur Mandi — good demand from flour mills.",
            },
        ),
        (
            "urea",
            MarketEntry {
                current: "₹8,500 per tonne",
                trend: "stable",
                mandi: "Logistics delays expected; check bulk supply availability.",
            },
        ),
        (
            "dap",
            MarketEntry {
                current: "₹24,000 per tonne",
                trend: "up 1.5% (export demand)",
                mandi: "Stocks limited — consider ordering early.",
            },
        ),
        (
            "maize",
            MarketEntry {
                current: "₹1,900 per quintal",
                trend: "up 3% (strong animal feed demand)",
                mandi: "Higher demand in nearby feed plants.",
            },
        ),
    ])
}

fn legacy_prices() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("rice", "₹1,850 per quintal (sample)"),
        ("cotton", "₹6,200 per quintal (sample)"),
    ])
}

fn disease_symptoms() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "yellow leaves",
            "Could be nitrogen deficiency; test soil and consider urea.",
        ),
        (
            "brown spots",
            "Possible fungal infection — consider fungicide and remove affected leaves.",
        ),
        (
            "wilt",
            "Possible bacterial/fungal wilt or water stress; check root health and irrigation.",
        ),
    ]
}

fn weather_notes() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        (
            "hot_and_dry",
            "High temperature and low humidity — increase irrigation frequency and mulch soil.",
        ),
        (
            "hot_and_humid",
            "High temp + humidity — risk of fungal diseases; consider preventive fungicide and avoid overhead irrigation at night.",
        ),
        (
            "cold",
            "Low temperatures — protect young seedlings and avoid late irrigation that freezes.",
        ),
        // No classifier rule produces this bucket yet; the provider data
        // has no precipitation field to key it on.
        (
            "heavy_rain",
            "Expect waterlogging — ensure drainage and delay nitrogen application until fields dry.",
        ),
    ])
}
