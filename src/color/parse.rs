//! Parser for CSS-style `lch()` literals.
//!
//! Accepted forms:
//! * `lch(70% 30 210)`
//! * `lch(70 30 210deg)` (bare lightness, `deg` suffix on hue)
//! * `lch(70% 30 210 / 0.5)` and `lch(70% 30 210 / 50%)`
//!
//! Lightness is clamped to `[0, 100]`, negative chroma to 0 and alpha to `[0, 1]`;
//! alpha defaults to 1 when omitted.

use std::str::FromStr;

use thiserror::Error;

use super::lch::LchColor;

/// What exactly went wrong while parsing a literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Nothing but whitespace.
    #[error("empty color string")]
    Empty,
    /// Not wrapped in `lch( ... )`.
    #[error("expected an lch() function")]
    InvalidFunction,
    /// Wrong number of components.
    #[error("expected 3 components and an optional alpha, got {0}")]
    ComponentCount(usize),
    /// A component is not a finite number.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

/// A literal could not be turned into an [`LchColor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse color {input:?}: {kind}")]
pub struct ColorParseError {
    /// The offending input, verbatim.
    pub input: String,
    /// Failure category.
    pub kind: ParseErrorKind,
}

impl ColorParseError {
    fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

fn number(token: &str) -> Result<f64, ParseErrorKind> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseErrorKind::InvalidNumber(token.to_owned()))
}

/// Number with an optional `%` suffix; `scale` maps 100% onto the channel range.
fn number_or_percent(token: &str, scale: f64) -> Result<f64, ParseErrorKind> {
    match token.strip_suffix('%') {
        Some(percent) => Ok(number(percent)? * scale / 100.0),
        None => number(token),
    }
}

fn parse_args(args: &str) -> Result<LchColor, ParseErrorKind> {
    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };

    let tokens: Vec<&str> = channels
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 3 {
        return Err(ParseErrorKind::ComponentCount(
            tokens.len() + usize::from(alpha.is_some()),
        ));
    }

    // lightness percentages map 1:1 onto [0, 100]
    let l = number_or_percent(tokens[0], 100.0)?.clamp(0.0, 100.0);
    let c = number(tokens[1])?.max(0.0);
    let h = number(tokens[2].strip_suffix("deg").unwrap_or(tokens[2]))?;
    let alpha = match alpha {
        Some(token) => number_or_percent(token, 1.0)?,
        None => 1.0,
    };

    Ok(LchColor::with_alpha(l, c, h, alpha))
}

/// Parse an `lch(L% C H [/ A])` literal.
pub fn parse_lch(s: &str) -> Result<LchColor, ColorParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::new(s, ParseErrorKind::Empty));
    }

    let lower = trimmed.to_ascii_lowercase();
    let args = lower
        .strip_prefix("lch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::new(s, ParseErrorKind::InvalidFunction))?;

    parse_args(args).map_err(|kind| ColorParseError::new(s, kind))
}

impl FromStr for LchColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_lch(s)
    }
}

impl TryFrom<&str> for LchColor {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_lch(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percentage_lightness() {
        let color = parse_lch("lch(70% 30 210)").unwrap();
        assert_eq!(color, LchColor::new(70.0, 30.0, 210.0));
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn parses_loose_forms() {
        assert_eq!(
            parse_lch("  LCH( 52.5  12 -30deg ) ").unwrap(),
            LchColor::new(52.5, 12.0, 330.0)
        );
        assert_eq!(
            "lch(40%, 20, 100)".parse::<LchColor>().unwrap(),
            LchColor::new(40.0, 20.0, 100.0)
        );
    }

    #[test]
    fn parses_alpha() {
        let half = parse_lch("lch(70% 30 210 / 0.5)").unwrap();
        assert_eq!(half.alpha, 0.5);
        let quarter = LchColor::try_from("lch(70% 30 210 / 25%)").unwrap();
        assert_eq!(quarter.alpha, 0.25);
    }

    #[test]
    fn clamps_out_of_range_channels() {
        let color = parse_lch("lch(120% -5 10 / 3)").unwrap();
        assert_eq!(color, LchColor::new(100.0, 0.0, 10.0));
    }

    #[test]
    fn display_output_parses_back() {
        let original = LchColor::with_alpha(61.25, 44.5, 292.5, 0.75);
        assert_eq!(parse_lch(&original.to_string()).unwrap(), original);
    }

    #[test]
    fn reports_offending_input() {
        let err = parse_lch("rgb(1, 2, 3)").unwrap_err();
        assert_eq!(err.input, "rgb(1, 2, 3)");
        assert_eq!(err.kind, ParseErrorKind::InvalidFunction);

        assert_eq!(parse_lch("   ").unwrap_err().kind, ParseErrorKind::Empty);
        assert_eq!(
            parse_lch("lch(70% 30)").unwrap_err().kind,
            ParseErrorKind::ComponentCount(2)
        );
        assert_eq!(
            parse_lch("lch(70% thirty 210)").unwrap_err().kind,
            ParseErrorKind::InvalidNumber("thirty".into())
        );
        assert_eq!(
            parse_lch("lch(70% 30 NaN)").unwrap_err().kind,
            ParseErrorKind::InvalidNumber("nan".into())
        );
    }

    #[test]
    fn error_message_carries_input() {
        let err = parse_lch("lch(oops)").unwrap_err();
        assert!(err.to_string().contains("lch(oops)"));
    }
}
