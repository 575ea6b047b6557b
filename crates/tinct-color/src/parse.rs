//! CSS color syntax using the `cssparser` tokenizer.
//!
//! Accepted forms:
//!
//! - hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - `rgb()` / `rgba()` with comma- or space-separated channels, numbers or
//!   percentages, optional alpha (after `,` or `/`)
//! - named colors, including `transparent`
//!
//! Out-of-range channels are errors, never clamped.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::named;

type CssResult<'i, T> = std::result::Result<T, ParseError<'i, ColorError>>;

impl Color {
    /// Parse any supported CSS color string.
    ///
    /// # Example
    ///
    /// ```
    /// use tinct_color::Color;
    ///
    /// assert_eq!(Color::parse_css("rgb(255, 0, 0)").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::parse_css("navy").unwrap().to_hex(), "#000080");
    /// assert!(Color::parse_css("rgb(300, 0, 0)").is_err());
    /// ```
    pub fn parse_css(input: &str) -> Result<Self> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);

        parser
            .parse_entirely(parse_color)
            .map_err(|err| match err.kind {
                ParseErrorKind::Custom(err) => err,
                ParseErrorKind::Basic(kind) => ColorError::parse(input, describe(&kind)),
            })
    }
}

fn describe(kind: &BasicParseErrorKind<'_>) -> String {
    match kind {
        BasicParseErrorKind::UnexpectedToken(token) => format!("unexpected token {token:?}"),
        BasicParseErrorKind::EndOfInput => "unexpected end of input".to_string(),
        _ => "invalid color syntax".to_string(),
    }
}

fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Color> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(&format!("#{}", &*hash)).map_err(|e| parser.new_custom_error(e))
        }
        Token::Ident(name) => named::lookup(&name)
            .ok_or_else(|| parser.new_custom_error(ColorError::unknown_name(&*name))),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(parse_rgb_arguments)
        }
        other => Err(parser.new_unexpected_token_error(other)),
    }
}

fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Color> {
    let r = parse_channel(parser, "red")?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let g = parse_channel(parser, "green")?;
    if legacy {
        parser.expect_comma()?;
    }
    let b = parse_channel(parser, "blue")?;

    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    let a = if has_alpha { parse_alpha(parser)? } else { 1.0 };

    Color::rgba(r, g, b, a).map_err(|e| parser.new_custom_error(e))
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>, channel: &'static str) -> CssResult<'i, u8> {
    let value = match parser.next()? {
        Token::Number { value, .. } => f64::from(*value),
        Token::Percentage { unit_value, .. } => f64::from(*unit_value) * 255.0,
        other => {
            let other = other.clone();
            return Err(parser.new_unexpected_token_error(other));
        }
    };

    if !(0.0..=255.0).contains(&value) {
        return Err(parser.new_custom_error(ColorError::channel_out_of_range(channel, value)));
    }
    Ok(value.round() as u8)
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, f64> {
    let value = match parser.next()? {
        Token::Number { value, .. } => f64::from(*value),
        Token::Percentage { unit_value, .. } => f64::from(*unit_value),
        other => {
            let other = other.clone();
            return Err(parser.new_unexpected_token_error(other));
        }
    };

    if !(0.0..=1.0).contains(&value) {
        return Err(parser.new_custom_error(ColorError::InvalidAlpha { value }));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_tokens() {
        assert_eq!(Color::parse_css("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse_css("  #0F0  ").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::parse_css("#00000080").unwrap().alpha_byte(), 0x80);
    }

    #[test]
    fn hex_errors_pass_through() {
        assert!(matches!(
            Color::parse_css("#12345"),
            Err(ColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn parses_legacy_rgb() {
        assert_eq!(Color::parse_css("rgb(10, 20, 30)").unwrap(), Color::rgb(10, 20, 30));
        assert_eq!(
            Color::parse_css("rgba(10, 20, 30, 0.5)").unwrap(),
            Color::rgba(10, 20, 30, 0.5).unwrap()
        );
        assert_eq!(Color::parse_css("RGB(100%, 0%, 0%)").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn parses_space_separated_rgb() {
        assert_eq!(
            Color::parse_css("rgb(10 20 30 / 50%)").unwrap(),
            Color::rgba(10, 20, 30, 0.5).unwrap()
        );
    }

    #[test]
    fn round_trips_own_output() {
        let c = Color::rgba(12, 34, 56, 0.25).unwrap();
        assert_eq!(Color::parse_css(&c.to_css_rgba()).unwrap(), c);
        assert_eq!(Color::parse_css(&c.to_css_rgb()).unwrap(), c.with_alpha(1.0).unwrap());
    }

    #[test]
    fn parses_names() {
        assert_eq!(Color::parse_css("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!("White".parse::<Color>().unwrap(), Color::WHITE);
        assert!(matches!(
            Color::parse_css("blurple"),
            Err(ColorError::UnknownName { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(matches!(
            Color::parse_css("rgb(256, 0, 0)"),
            Err(ColorError::ChannelOutOfRange { channel: "red", .. })
        ));
        assert!(matches!(
            Color::parse_css("rgba(0, 0, 0, 2)"),
            Err(ColorError::InvalidAlpha { .. })
        ));
        assert!(matches!(Color::parse_css(""), Err(ColorError::Parse { .. })));
        assert!(matches!(Color::parse_css("12px"), Err(ColorError::Parse { .. })));
        assert!(matches!(Color::parse_css("red blue"), Err(ColorError::Parse { .. })));
        assert!(matches!(Color::parse_css("rgb(1, 2)"), Err(ColorError::Parse { .. })));
    }
}
