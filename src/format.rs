//! Display formatting for the raw numbers and dates produced by the engine.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// How currency amounts are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub code: String,
    pub grouping_separator: char,
    pub negative_style: NegativeStyle,
}

impl CurrencyFormat {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            grouping_separator: ',',
            negative_style: NegativeStyle::Sign,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("USD")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "CAD" => "CA$".into(),
        _ => format!("{code} "),
    }
}

/// Formats `amount` as e.g. `$1,234.56` or `-$4.00`.
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let body = format!(
        "{}{}.{}",
        symbol_for(&format.code),
        group_digits(int_part, format.grouping_separator),
        frac_part
    );
    // Amounts that round to zero are never shown as negative.
    if amount < 0.0 && rounded != "0.00" {
        match format.negative_style {
            NegativeStyle::Sign => format!("-{body}"),
            NegativeStyle::Parentheses => format!("({body})"),
        }
    } else {
        body
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// `Wed 2024-05-08`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %Y-%m-%d").to_string()
}
