//! pt-BR display formatting for table cells, slider labels and timestamps.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// America/Sao_Paulo has stayed on UTC-03:00 since daylight saving ended in 2019.
const SAO_PAULO_OFFSET_SECS: i32 = 3 * 3600;

/// How a numeric column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// `R$ 1.234,56`
    Currency,
    /// Value already in percent units: `12,50%`
    Percent,
    /// Two to three fraction digits: `0,95`
    Decimal,
    /// Rounded and grouped: `12.345`
    Integer,
}

impl NumberFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            NumberFormat::Currency => {
                let body = fixed(value.abs(), 2);
                if is_negative(value, 2) {
                    format!("-R$\u{a0}{}", body)
                } else {
                    format!("R$\u{a0}{}", body)
                }
            }
            NumberFormat::Percent => format!("{}%", signed_fixed(value, 2)),
            NumberFormat::Decimal => {
                let s = signed_fixed(value, 3);
                // minimum two fraction digits, maximum three
                match s.strip_suffix('0') {
                    Some(trimmed) => trimmed.to_string(),
                    None => s,
                }
            }
            NumberFormat::Integer => signed_fixed(value, 0),
        }
    }
}

fn is_negative(value: f64, decimals: usize) -> bool {
    value < 0.0
        && format!("{:.*}", decimals, value.abs())
            .chars()
            .any(|c| c.is_ascii_digit() && c != '0')
}

fn signed_fixed(value: f64, decimals: usize) -> String {
    let body = fixed(value.abs(), decimals);
    if is_negative(value, decimals) {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a non-negative value with `.` thousands separators and `,` decimals.
fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let raw = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let grouped = group_thousands(int_part);
    match frac_part {
        Some(f) => format!("{},{}", grouped, f),
        None => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

fn sao_paulo(instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
    // west_opt only fails for offsets of a day or more
    let offset = FixedOffset::west_opt(SAO_PAULO_OFFSET_SECS).unwrap_or(Utc.fix());
    instant.with_timezone(&offset)
}

/// Date and time shown in the "Tabela atualizada em ..." footer,
/// as `("dd/mm/yyyy", "HH:MM:SS")` in São Paulo time.
pub fn format_update_timestamp(instant: &DateTime<Utc>) -> (String, String) {
    let local = sao_paulo(instant);
    (
        local.format("%d/%m/%Y").to_string(),
        local.format("%H:%M:%S").to_string(),
    )
}
