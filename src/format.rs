//! Currency rendering: whole units, grouped thousands, leading symbol.

use crate::config::DisplayConfig;

#[derive(Debug, Clone)]
pub struct CurrencyFormat {
    symbol: String,
    separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            separator: ",".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            separator: separator.into(),
        }
    }

    pub fn from_config(cfg: &DisplayConfig) -> Self {
        Self::new(cfg.currency_symbol.clone(), cfg.thousands_separator.clone())
    }

    /// `1050000.0` → `$1,050,000`, `-20000.0` → `-$20,000`. Rounds half away
    /// from zero; anything that rounds to zero prints unsigned.
    pub fn amount(&self, value: f64) -> String {
        let rounded = value.round();
        let negative = rounded < 0.0;
        let digits = group_digits(rounded.abs(), &self.separator);
        if negative {
            format!("-{}{}", self.symbol, digits)
        } else {
            format!("{}{}", self.symbol, digits)
        }
    }

    /// Delta annotation: `(+$50,000)`, `(-$20,000)`.
    pub fn delta(&self, delta: f64) -> String {
        let sign = if delta > 0.0 { "+" } else { "" };
        format!("({}{})", sign, self.amount(delta))
    }
}

fn group_digits(whole: f64, separator: &str) -> String {
    let s = format!("{:.0}", whole);
    let mut result = String::with_capacity(s.len() + s.len() / 3 * separator.len());
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}
