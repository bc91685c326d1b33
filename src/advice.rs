//! Pure composers: knowledge-base lookups and weather observations in,
//! formatted reply payloads out. No I/O and no state beyond the tables.

use std::fmt::Display;

use crate::knowledge::{KnowledgeBase, PriceQuote};
use crate::models::ResponsePayload;
use crate::weather::types::WeatherObservation;
use crate::weather::WeatherError;

const DEFAULT_WEATHER_TIP: &str = "Normal conditions — follow regular schedule.";

/// Bucket an observation for the advisory lookup. First match wins;
/// both readings must be present for any rule to fire. Note the
/// `heavy_rain` note in the knowledge table has no rule here — the
/// provider gives us no precipitation signal to key it on.
pub fn classify_conditions(temperature: Option<f64>, humidity: Option<u32>) -> Option<&'static str> {
    let temp = temperature?;
    let humidity = humidity?;

    if temp >= 35.0 && humidity <= 40 {
        Some("hot_and_dry")
    } else if temp >= 30.0 && humidity >= 60 {
        Some("hot_and_humid")
    } else if temp <= 10.0 {
        Some("cold")
    } else {
        None
    }
}

pub fn compose_weather_advice(kb: &KnowledgeBase, obs: &WeatherObservation) -> ResponsePayload {
    let bucket = classify_conditions(obs.temperature, obs.humidity);
    let tip = bucket
        .and_then(|b| kb.weather_note(b))
        .unwrap_or(DEFAULT_WEATHER_TIP);

    let coord_text = match (obs.latitude, obs.longitude) {
        (Some(lat), Some(lon)) => format!(" (lat: {}, lon: {})", lat, lon),
        _ => String::new(),
    };
    let condition = obs
        .condition
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| "N/A".to_string());

    ResponsePayload::text(format!(
        "🌤️ Weather in *{city}*{coord_text}\n\n\
         *Condition:* {condition}\n\
         *Temperature:* {temp} °C (feels like {feels} °C)\n\
         *Humidity:* {humidity}%\n\
         *Pressure:* {pressure} hPa\n\
         *Wind:* {wind} m/s\n\
         *Sunrise:* {sunrise}\n\
         *Sunset:* {sunset}\n\n\
         *Farmer tip:* {tip}\n\
         _If you want local market impact on crops, try: /price <commodity>._",
        city = obs.city,
        temp = fmt_opt(obs.temperature),
        feels = fmt_opt(obs.feels_like),
        humidity = fmt_opt(obs.humidity),
        pressure = fmt_opt(obs.pressure),
        wind = fmt_opt(obs.wind_speed),
        sunrise = fmt_timestamp(obs.sunrise),
        sunset = fmt_timestamp(obs.sunset),
    ))
}

/// Map a gateway outcome to the single reply both dispatch paths share.
pub fn compose_weather_reply(
    kb: &KnowledgeBase,
    city: &str,
    result: Result<WeatherObservation, WeatherError>,
) -> ResponsePayload {
    match result {
        Ok(obs) => compose_weather_advice(kb, &obs),
        Err(WeatherError::NotConfigured) => {
            ResponsePayload::text("Weather API key not configured. Set OWM_API_KEY in .env.")
        }
        Err(_) => ResponsePayload::text(format!(
            "Could not fetch weather for *{}*. Check the city name.",
            city
        )),
    }
}

pub fn compose_crop_advice(kb: &KnowledgeBase, crop: &str) -> ResponsePayload {
    let Some(recommendation) = kb.crop_recommendation(crop) else {
        let suggestions = kb.known_crops().join(", ");
        return ResponsePayload::text(format!(
            "Sorry, no data for *{}*.\nTry these crops: {}",
            title_case(crop),
            suggestions
        ));
    };

    let mut msg = format!(
        "🌾 *Recommendations for {}*\n\n{}\n\n",
        title_case(crop),
        recommendation
    );

    if let Some(stages) = kb.growth_stages(crop) {
        msg.push_str("*Growth stages & quick tips:*\n");
        for (stage, tip) in stages {
            msg.push_str(&format!("• *{}*: {}\n", stage, tip));
        }
        msg.push('\n');
    }

    if let Some(market) = kb.market_snapshot(crop) {
        msg.push_str(&format!(
            "*Market note:* Current {} price: {} — 7d trend: {}\n",
            title_case(crop),
            market.current,
            market.trend
        ));
        msg.push_str(&format!("Nearby mandi note: {}\n", market.mandi));
    }

    ResponsePayload::text(msg.trim_end().to_string())
}

pub fn compose_price_advice(kb: &KnowledgeBase, commodity: &str) -> ResponsePayload {
    match kb.price_quote(commodity) {
        Some(PriceQuote::Snapshot(entry)) => {
            let mut msg = format!(
                "💱 *{}* — Market snapshot\n\n\
                 Current: {}\n\
                 7-day trend: {}\n\
                 Local mandi: {}",
                title_case(commodity),
                entry.current,
                entry.trend,
                entry.mandi
            );
            if let Some(tip) = trend_tip(entry.trend) {
                msg.push_str("\n\n");
                msg.push_str(tip);
            }
            ResponsePayload::text(msg)
        }
        Some(PriceQuote::Sample(price)) => ResponsePayload::text(format!(
            "💱 *{}* price (sample):\n{}",
            title_case(commodity),
            price
        )),
        None => ResponsePayload::text(format!(
            "No price data for *{}*. Try one of: {}.",
            title_case(commodity),
            kb.known_commodities().join(", ")
        )),
    }
}

fn trend_tip(trend: &str) -> Option<&'static str> {
    if trend.contains("up") {
        Some("_Practical tip: trend is up — consider selling surplus._")
    } else if trend.contains("down") {
        Some("_Practical tip: trend is down — store in proper conditions or look for forward buyers._")
    } else {
        None
    }
}

/// A symptom key matches if it occurs verbatim in the text, or if every
/// word of the key does ("my leaves look yellow" matches "yellow leaves").
fn symptom_matches(key: &str, text: &str) -> bool {
    text.contains(key) || key.split_whitespace().all(|word| text.contains(word))
}

pub fn compose_disease_advice(kb: &KnowledgeBase, symptom_text: &str) -> ResponsePayload {
    for (key, advice) in kb.disease_entries() {
        if symptom_matches(key, symptom_text) {
            return ResponsePayload::text(format!(
                "⚠️ *Possible cause:* {}\n\n\
                 Suggested actions:\n\
                 1. Inspect nearby plants for spread.\n\
                 2. Remove badly affected leaves and dispose safely.\n\
                 3. Test soil (pH/nutrient) if deficiency suspected.",
                advice
            ));
        }
    }

    ResponsePayload::text(
        "Could not match symptoms to a known issue. Please provide more details.",
    )
}

/// Capitalise the first letter of every word, lower-case the rest.
/// Any non-alphabetic character counts as a word boundary, so
/// "unknown_commodity" becomes "Unknown_Commodity".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

fn fmt_opt<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn fmt_timestamp(ts: Option<i64>) -> String {
    ts.and_then(|t| chrono::DateTime::from_timestamp(t, 0))
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(temp: Option<f64>, humidity: Option<u32>) -> WeatherObservation {
        WeatherObservation {
            city: "Delhi".to_string(),
            condition: Some("clear sky".to_string()),
            temperature: temp,
            feels_like: temp,
            humidity,
            pressure: Some(1010),
            wind_speed: Some(2.5),
            sunrise: None,
            sunset: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn classification_follows_decision_order() {
        assert_eq!(classify_conditions(Some(36.0), Some(30)), Some("hot_and_dry"));
        assert_eq!(classify_conditions(Some(32.0), Some(70)), Some("hot_and_humid"));
        assert_eq!(classify_conditions(Some(5.0), Some(50)), Some("cold"));
        assert_eq!(classify_conditions(Some(20.0), Some(50)), None);
        assert_eq!(classify_conditions(None, Some(50)), None);
        assert_eq!(classify_conditions(Some(36.0), None), None);
    }

    #[test]
    fn weather_advice_includes_bucket_tip() {
        let kb = KnowledgeBase::load();
        let reply = compose_weather_advice(&kb, &observation(Some(36.0), Some(30)));
        assert!(reply.text.contains("increase irrigation frequency"));

        let reply = compose_weather_advice(&kb, &observation(Some(20.0), Some(50)));
        assert!(reply.text.contains("Normal conditions"));
    }

    #[test]
    fn weather_advice_formats_missing_fields_as_na() {
        let kb = KnowledgeBase::load();
        let mut obs = observation(None, None);
        obs.condition = None;
        obs.pressure = None;
        obs.wind_speed = None;
        let reply = compose_weather_advice(&kb, &obs);
        assert!(reply.text.contains("*Condition:* N/A"));
        assert!(reply.text.contains("*Sunrise:* N/A"));
    }

    #[test]
    fn weather_failure_replies_name_the_city() {
        let kb = KnowledgeBase::load();
        let reply = compose_weather_reply(&kb, "Atlantis", Err(WeatherError::NotConfigured));
        assert!(reply.text.contains("not configured"));

        let reply = compose_weather_reply(
            &kb,
            "Atlantis",
            Err(WeatherError::BadStatus(reqwest::StatusCode::NOT_FOUND)),
        );
        assert!(reply.text.contains("Could not fetch weather for *Atlantis*"));
        assert!(reply.text.contains("Check the city name"));
    }

    #[test]
    fn wheat_recommendation_has_stages_in_order_and_market_line() {
        let kb = KnowledgeBase::load();
        let reply = compose_crop_advice(&kb, "wheat");

        assert!(reply.text.contains("Urea 50kg/acre"));
        assert!(reply.text.contains("₹2,100 per quintal"));
        assert!(reply.text.contains("down 2%"));

        let positions: Vec<usize> = ["Sowing", "Tillering", "Booting/Heading", "Maturity"]
            .iter()
            .map(|stage| reply.text.find(stage).expect("stage missing"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "growth stages out of stored order");
    }

    #[test]
    fn unknown_crop_lists_known_crops_alphabetically() {
        let kb = KnowledgeBase::load();
        let reply = compose_crop_advice(&kb, "quinoa");
        assert!(reply.text.contains("Sorry, no data for *Quinoa*"));
        assert!(reply.text.contains("cotton, maize, rice, wheat"));
    }

    #[test]
    fn price_tip_follows_the_trend_text() {
        let kb = KnowledgeBase::load();

        let up = compose_price_advice(&kb, "dap");
        assert!(up.text.contains("consider selling surplus"));

        let down = compose_price_advice(&kb, "wheat");
        assert!(down.text.contains("store in proper conditions"));

        let stable = compose_price_advice(&kb, "urea");
        assert!(!stable.text.contains("Practical tip"));
        assert!(stable.text.contains("₹8,500 per tonne"));
    }

    #[test]
    fn legacy_price_source_is_reachable() {
        let kb = KnowledgeBase::load();
        let reply = compose_price_advice(&kb, "rice");
        assert!(reply.text.contains("price (sample)"));
    }

    #[test]
    fn unknown_commodity_is_title_cased_in_no_data_reply() {
        let kb = KnowledgeBase::load();
        let reply = compose_price_advice(&kb, "unknown_commodity");
        assert!(reply.text.contains("No price data for *Unknown_Commodity*"));
    }

    #[test]
    fn disease_matches_symptom_substring() {
        let kb = KnowledgeBase::load();
        let reply = compose_disease_advice(&kb, "there are brown spots on the stems");
        assert!(reply.text.contains("fungal infection"));
        assert!(reply.text.contains("1. Inspect nearby plants"));
        assert!(reply.text.contains("3. Test soil"));
    }

    #[test]
    fn disease_matches_when_key_words_are_scattered() {
        let kb = KnowledgeBase::load();
        let reply = compose_disease_advice(&kb, "my leaves look yellow");
        assert!(reply.text.contains("nitrogen deficiency"));
    }

    #[test]
    fn disease_falls_back_when_nothing_matches() {
        let kb = KnowledgeBase::load();
        let reply = compose_disease_advice(&kb, "purple stems");
        assert!(reply.text.contains("Could not match symptoms"));
    }

    #[test]
    fn title_case_treats_non_alpha_as_boundaries() {
        assert_eq!(title_case("unknown_commodity"), "Unknown_Commodity");
        assert_eq!(title_case("scattered clouds"), "Scattered Clouds");
        assert_eq!(title_case("DELHI"), "Delhi");
    }
}
