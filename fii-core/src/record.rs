//! Fund records as served in the static `fii.json` resource.

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Top-level shape of the JSON resource: `{"results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub results: Vec<FundRecord>,
}

impl Dataset {
    /// Parse the JSON resource body.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(body).context("Failed to parse FII dataset JSON")?;
        log::info!("Parsed FII dataset with {} records", dataset.results.len());
        Ok(dataset)
    }

    /// Serialize back to pretty JSON (used by the CLI when saving a download).
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Treats an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single real-estate investment fund (FII).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub ticker: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nome_fundo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub setor: String,
    /// Current quota price (BRL).
    #[serde(default, deserialize_with = "nullable")]
    pub preco_atual: f64,
    /// Daily price change, in percent.
    #[serde(default, deserialize_with = "nullable")]
    pub variacao_dia: f64,
    /// Last dividend paid per quota (BRL).
    #[serde(default, deserialize_with = "nullable")]
    pub ultimo_dividendo: f64,
    /// Last dividend yield, in percent.
    #[serde(default, deserialize_with = "nullable")]
    pub ultimo_dy: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub variacao_cota_desde_ipo: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub variacao_cota_dividendos_desde_ipo: f64,
    /// Price to book value.
    #[serde(default, deserialize_with = "nullable")]
    pub p_vp: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub percentual_em_caixa: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub numero_cotistas: f64,
    /// Net assets (BRL).
    #[serde(default, deserialize_with = "nullable")]
    pub patrimonio: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub liquidez_diaria: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub favoritar: bool,
}

impl FundRecord {
    /// Read one field as a dynamically typed value.
    pub fn field(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Ticker => FieldValue::Text(self.ticker.clone()),
            FieldKey::NomeFundo => FieldValue::Text(self.nome_fundo.clone()),
            FieldKey::Setor => FieldValue::Text(self.setor.clone()),
            FieldKey::PrecoAtual => FieldValue::Number(self.preco_atual),
            FieldKey::VariacaoDia => FieldValue::Number(self.variacao_dia),
            FieldKey::UltimoDividendo => FieldValue::Number(self.ultimo_dividendo),
            FieldKey::UltimoDy => FieldValue::Number(self.ultimo_dy),
            FieldKey::VariacaoCotaDesdeIpo => FieldValue::Number(self.variacao_cota_desde_ipo),
            FieldKey::VariacaoCotaDividendosDesdeIpo => {
                FieldValue::Number(self.variacao_cota_dividendos_desde_ipo)
            }
            FieldKey::PVp => FieldValue::Number(self.p_vp),
            FieldKey::PercentualEmCaixa => FieldValue::Number(self.percentual_em_caixa),
            FieldKey::NumeroCotistas => FieldValue::Number(self.numero_cotistas),
            FieldKey::Patrimonio => FieldValue::Number(self.patrimonio),
            FieldKey::LiquidezDiaria => FieldValue::Number(self.liquidez_diaria),
            FieldKey::Favoritar => FieldValue::Bool(self.favoritar),
        }
    }
}

/// Identifies one field of a [`FundRecord`].
///
/// The serde names match the JSON keys of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Ticker,
    NomeFundo,
    Setor,
    PrecoAtual,
    VariacaoDia,
    UltimoDividendo,
    UltimoDy,
    VariacaoCotaDesdeIpo,
    VariacaoCotaDividendosDesdeIpo,
    PVp,
    PercentualEmCaixa,
    NumeroCotistas,
    Patrimonio,
    LiquidezDiaria,
    Favoritar,
}

impl FieldKey {
    pub const ALL: [FieldKey; 15] = [
        FieldKey::Ticker,
        FieldKey::NomeFundo,
        FieldKey::Setor,
        FieldKey::PrecoAtual,
        FieldKey::VariacaoDia,
        FieldKey::UltimoDividendo,
        FieldKey::UltimoDy,
        FieldKey::VariacaoCotaDesdeIpo,
        FieldKey::VariacaoCotaDividendosDesdeIpo,
        FieldKey::PVp,
        FieldKey::PercentualEmCaixa,
        FieldKey::NumeroCotistas,
        FieldKey::Patrimonio,
        FieldKey::LiquidezDiaria,
        FieldKey::Favoritar,
    ];

    /// The JSON key of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Ticker => "ticker",
            FieldKey::NomeFundo => "nome_fundo",
            FieldKey::Setor => "setor",
            FieldKey::PrecoAtual => "preco_atual",
            FieldKey::VariacaoDia => "variacao_dia",
            FieldKey::UltimoDividendo => "ultimo_dividendo",
            FieldKey::UltimoDy => "ultimo_dy",
            FieldKey::VariacaoCotaDesdeIpo => "variacao_cota_desde_ipo",
            FieldKey::VariacaoCotaDividendosDesdeIpo => "variacao_cota_dividendos_desde_ipo",
            FieldKey::PVp => "p_vp",
            FieldKey::PercentualEmCaixa => "percentual_em_caixa",
            FieldKey::NumeroCotistas => "numero_cotistas",
            FieldKey::Patrimonio => "patrimonio",
            FieldKey::LiquidezDiaria => "liquidez_diaria",
            FieldKey::Favoritar => "favoritar",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// A field value read out of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// String form used for multi-select options and membership checks.
    ///
    /// Integral numbers print without a fractional part (`162`, not `162.0`).
    pub fn stringify(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            // -0.0 would otherwise print as "-0"
            FieldValue::Number(n) if *n == 0.0 => "0".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    /// Numeric view used by range filters. Text that is not a number yields NaN,
    /// which fails every range comparison.
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            FieldValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Total order used by the table sort.
    ///
    /// Values of different kinds never share a column; they are ordered
    /// text < number < bool only to keep the order total.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Bool(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FIXTURE_JSON;

    #[test]
    fn parses_fixture_dataset() {
        let dataset = Dataset::from_json(FIXTURE_JSON).unwrap();
        assert_eq!(dataset.results.len(), 8);
        assert_eq!(dataset.results[0].ticker, "HGLG11");
        assert!(dataset.results[0].favoritar);
    }

    #[test]
    fn null_and_missing_fields_use_defaults() {
        let dataset = Dataset::from_json(FIXTURE_JSON).unwrap();
        let rbva = dataset.results.iter().find(|r| r.ticker == "RBVA11").unwrap();
        assert_eq!(rbva.percentual_em_caixa, 0.0);
        assert!(!rbva.favoritar);
    }

    #[test]
    fn rejects_body_without_results() {
        assert!(Dataset::from_json("{\"data\": []}").is_err());
        assert!(Dataset::from_json("not json").is_err());
    }

    #[test]
    fn field_key_round_trips_through_json_key() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!("preco".parse::<FieldKey>().is_err());
    }

    #[test]
    fn stringify_matches_display_form() {
        assert_eq!(FieldValue::Number(162.0).stringify(), "162");
        assert_eq!(FieldValue::Number(0.42).stringify(), "0.42");
        assert_eq!(FieldValue::Number(-0.0).stringify(), "0");
        assert_eq!(FieldValue::Bool(true).stringify(), "true");
        assert_eq!(FieldValue::Text("Shoppings".into()).stringify(), "Shoppings");
    }

    #[test]
    fn compare_orders_numbers_and_text() {
        let a = FieldValue::Number(2.0);
        let b = FieldValue::Number(10.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        let x = FieldValue::Text("HGLG11".into());
        let y = FieldValue::Text("BRCR11".into());
        assert_eq!(x.compare(&y), Ordering::Greater);
        assert_eq!(FieldValue::Bool(false).compare(&FieldValue::Bool(true)), Ordering::Less);
    }
}
