use crate::domain::model::NumberKind;
use crate::utils::error::{Result, ShopError};

/// Tokens that end the session wherever a number or answer is expected.
pub const EXIT_TOKENS: [&str; 2] = ["exit", "-1"];

/// Characters users tend to wrap around money and quantities.
const DECORATION: [char; 4] = ['$', '?', '_', '"'];

pub fn clean_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| DECORATION.contains(&c) || c.is_whitespace())
}

pub fn is_exit_token(token: &str) -> bool {
    EXIT_TOKENS.contains(&token)
}

pub fn parse_number(kind: NumberKind, token: &str) -> Result<f64> {
    let parsed = match kind {
        NumberKind::Integer => token.parse::<i64>().map(|n| n as f64).ok(),
        NumberKind::Float => token.parse::<f64>().ok().filter(|n| !n.is_nan()),
    };

    parsed.ok_or_else(|| ShopError::ParseError {
        input: token.to_string(),
    })
}

pub fn validate_non_negative(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(ShopError::NegativeValue { value });
    }
    Ok(value)
}
