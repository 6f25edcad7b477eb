//! Data models for cleaned tariff-schedule records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six tariff-preference regimes in Schedule 1 Part 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// General (most-favoured-nation) rate.
    General,
    /// European Union / United Kingdom agreement rate.
    EuUk,
    /// European Free Trade Association agreement rate.
    Efta,
    /// Southern African Development Community rate.
    Sadc,
    /// MERCOSUR preferential rate.
    Mercosur,
    /// African Continental Free Trade Area rate.
    Afcfta,
}

impl Regime {
    /// All regimes, in the column order of the schedule table.
    pub const ALL: [Regime; 6] = [
        Regime::General,
        Regime::EuUk,
        Regime::Efta,
        Regime::Sadc,
        Regime::Mercosur,
        Regime::Afcfta,
    ];

    /// The key used for this regime in the cleaned JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::General => "general",
            Regime::EuUk => "eu_uk",
            Regime::Efta => "efta",
            Regime::Sadc => "sadc",
            Regime::Mercosur => "mercosur",
            Regime::Afcfta => "afcfta",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate-of-duty cells for a single record, one per preference regime.
///
/// A struct rather than a map, so serialization emits the six keys in the
/// fixed column order of the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub general: String,
    pub eu_uk: String,
    pub efta: String,
    pub sadc: String,
    pub mercosur: String,
    pub afcfta: String,
}

impl RateTable {
    /// Rate text for a regime.
    pub fn get(&self, regime: Regime) -> &str {
        match regime {
            Regime::General => &self.general,
            Regime::EuUk => &self.eu_uk,
            Regime::Efta => &self.efta,
            Regime::Sadc => &self.sadc,
            Regime::Mercosur => &self.mercosur,
            Regime::Afcfta => &self.afcfta,
        }
    }

    /// Iterate `(regime, rate text)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Regime, &str)> {
        Regime::ALL.iter().map(move |&regime| (regime, self.get(regime)))
    }
}

/// A cleaned tariff line keyed by its commodity code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRecord {
    /// Commodity code, e.g. "01.01" or "0101.21".
    pub heading: String,

    /// Check digit accompanying the heading.
    pub cd: String,

    /// Article description, whitespace-normalized.
    pub description: String,

    /// Statistical unit of quantity.
    pub unit: String,

    /// Rate-of-duty text per preference regime.
    pub rates: RateTable,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_regime_order_is_column_order() {
        let keys: Vec<&str> = Regime::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            keys,
            vec!["general", "eu_uk", "efta", "sadc", "mercosur", "afcfta"]
        );
    }

    #[test]
    fn test_rate_table_iter_matches_fields() {
        let rates = RateTable {
            general: "20%".to_string(),
            eu_uk: "free".to_string(),
            ..Default::default()
        };

        let collected: Vec<(Regime, &str)> = rates.iter().collect();
        assert_eq!(collected[0], (Regime::General, "20%"));
        assert_eq!(collected[1], (Regime::EuUk, "free"));
        assert_eq!(collected[5], (Regime::Afcfta, ""));
    }

    #[test]
    fn test_record_serializes_with_fixed_rate_keys() {
        let record = TariffRecord {
            heading: "01.01".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let general = json.find("\"general\"").unwrap();
        let afcfta = json.find("\"afcfta\"").unwrap();
        assert!(general < afcfta);
    }
}
