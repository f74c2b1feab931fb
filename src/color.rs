// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::SgrCode;

/// The closed set of color names accepted by
/// [`crate::StyledMessage::set_color`] and
/// [`crate::StyledMessage::set_bg_color`]. `none` maps to the "reset all
/// attributes" code on both planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Violet,
    Cyan,
    Grey,
    None,
}

mod named_color_impl {
    use super::*;

    impl NamedColor {
        #[rustfmt::skip]
        #[must_use]
        pub fn fg_code(self) -> SgrCode {
            match self {
                NamedColor::Black  => SgrCode::ForegroundBasic(30),
                NamedColor::Red    => SgrCode::ForegroundBasic(31),
                NamedColor::Green  => SgrCode::ForegroundBasic(32),
                NamedColor::Yellow => SgrCode::ForegroundBasic(33),
                NamedColor::Blue   => SgrCode::ForegroundBasic(34),
                NamedColor::Violet => SgrCode::ForegroundBasic(35),
                NamedColor::Cyan   => SgrCode::ForegroundBasic(36),
                NamedColor::Grey   => SgrCode::ForegroundBasic(37),
                NamedColor::None   => SgrCode::Reset,
            }
        }

        #[rustfmt::skip]
        #[must_use]
        pub fn bg_code(self) -> SgrCode {
            match self {
                NamedColor::Black  => SgrCode::BackgroundBasic(40),
                NamedColor::Red    => SgrCode::BackgroundBasic(41),
                NamedColor::Green  => SgrCode::BackgroundBasic(42),
                NamedColor::Yellow => SgrCode::BackgroundBasic(43),
                NamedColor::Blue   => SgrCode::BackgroundBasic(44),
                NamedColor::Violet => SgrCode::BackgroundBasic(45),
                NamedColor::Cyan   => SgrCode::BackgroundBasic(46),
                NamedColor::Grey   => SgrCode::BackgroundBasic(47),
                NamedColor::None   => SgrCode::Reset,
            }
        }

        /// Space-joined list of every accepted name, in declaration order.
        /// This is what [`ColorError`] reports.
        #[must_use]
        pub fn valid_names() -> String {
            Self::iter()
                .map(|it| it.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod rgb_color_impl {
    use super::*;

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self { red, green, blue }
        }
    }

    impl RgbColor {
        #[must_use]
        pub fn fg_code(self) -> SgrCode {
            SgrCode::ForegroundRGB(self.red, self.green, self.blue)
        }

        #[must_use]
        pub fn bg_code(self) -> SgrCode {
            SgrCode::BackgroundRGB(self.red, self.green, self.blue)
        }
    }
}

/// A color as accepted by the builder: either one of the [`NamedColor`]s or
/// a 24-bit RGB triple written as an `rgb(r, g, b)` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(NamedColor),
    Rgb(RgbColor),
}

mod color_impl {
    use super::*;

    impl Color {
        #[must_use]
        pub fn fg_code(self) -> SgrCode {
            match self {
                Color::Named(it) => it.fg_code(),
                Color::Rgb(it) => it.fg_code(),
            }
        }

        #[must_use]
        pub fn bg_code(self) -> SgrCode {
            match self {
                Color::Named(it) => it.bg_code(),
                Color::Rgb(it) => it.bg_code(),
            }
        }
    }

    impl FromStr for Color {
        type Err = ColorError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            if let Ok(named) = NamedColor::from_str(input) {
                return Ok(Color::Named(named));
            }
            match rgb_literal::parse(input) {
                Some(rgb) => Ok(Color::Rgb(rgb)),
                None => Err(ColorError::new(input)),
            }
        }
    }
}

/// The accepted literal grammar, exactly: `rgb(` integer `,` optional
/// whitespace integer `,` optional whitespace integer `)`, each integer in
/// `0..=255` decimal. No other separators or formats are accepted.
mod rgb_literal {
    use nom::{IResult, Parser,
              bytes::complete::tag,
              character::complete::{space0, u8 as channel},
              combinator::all_consuming};

    use super::RgbColor;

    pub fn parse(input: &str) -> Option<RgbColor> {
        try_parse(input).ok().map(|(_, it)| it)
    }

    fn try_parse(input: &str) -> IResult<&str, RgbColor> {
        all_consuming((
            tag("rgb("),
            channel,
            tag(","),
            space0,
            channel,
            tag(","),
            space0,
            channel,
            tag(")"),
        ))
        .parse(input)
        .map(|(remaining, (_, red, _, _, green, _, _, blue, _))| {
            (remaining, RgbColor { red, green, blue })
        })
    }
}

/// Raised by [`crate::StyledMessage::set_color`] and
/// [`crate::StyledMessage::set_bg_color`] when the input is neither a
/// recognized color name nor a syntactically valid `rgb(r, g, b)` literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "incorrect color value `{input}`: the colors which may be used are {} or an arbitrary rgb(r, g, b) value",
    NamedColor::valid_names()
)]
pub struct ColorError {
    pub input: String,
}

mod color_error_impl {
    use super::*;

    impl ColorError {
        pub fn new(input: impl Into<String>) -> Self {
            Self {
                input: input.into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;

    #[test_case("black",  NamedColor::Black)]
    #[test_case("red",    NamedColor::Red)]
    #[test_case("green",  NamedColor::Green)]
    #[test_case("yellow", NamedColor::Yellow)]
    #[test_case("blue",   NamedColor::Blue)]
    #[test_case("violet", NamedColor::Violet)]
    #[test_case("cyan",   NamedColor::Cyan)]
    #[test_case("grey",   NamedColor::Grey)]
    #[test_case("none",   NamedColor::None)]
    fn named_colors_parse(input: &str, expected: NamedColor) {
        assert_eq!(input.parse::<Color>(), Ok(Color::Named(expected)));
    }

    #[test_case(NamedColor::Black,  "\x1b[30m", "\x1b[40m")]
    #[test_case(NamedColor::Red,    "\x1b[31m", "\x1b[41m")]
    #[test_case(NamedColor::Green,  "\x1b[32m", "\x1b[42m")]
    #[test_case(NamedColor::Yellow, "\x1b[33m", "\x1b[43m")]
    #[test_case(NamedColor::Blue,   "\x1b[34m", "\x1b[44m")]
    #[test_case(NamedColor::Violet, "\x1b[35m", "\x1b[45m")]
    #[test_case(NamedColor::Cyan,   "\x1b[36m", "\x1b[46m")]
    #[test_case(NamedColor::Grey,   "\x1b[37m", "\x1b[47m")]
    #[test_case(NamedColor::None,   "\x1b[0m",  "\x1b[0m")]
    fn named_colors_map_to_the_classic_sgr_planes(
        color: NamedColor,
        fg: &str,
        bg: &str,
    ) {
        assert_eq!(color.fg_code().to_string(), fg);
        assert_eq!(color.bg_code().to_string(), bg);
    }

    #[test_case("rgb(0,0,0)", (0, 0, 0))]
    #[test_case("rgb(10, 20, 30)", (10, 20, 30))]
    #[test_case("rgb(255,255,255)", (255, 255, 255))]
    #[test_case("rgb(1,  2,   3)", (1, 2, 3))]
    fn rgb_literals_parse(input: &str, (red, green, blue): (u8, u8, u8)) {
        assert_eq!(
            input.parse::<Color>(),
            Ok(Color::Rgb(RgbColor { red, green, blue }))
        );
    }

    #[test_case("rgb(256, 0, 0)"; "channel out of range")]
    #[test_case("rgb(0, 0)"; "two channels")]
    #[test_case("rgb(0, 0, 0, 0)"; "four channels")]
    #[test_case("rgb(1 , 2, 3)"; "whitespace before comma")]
    #[test_case("rgb( 1, 2, 3)"; "whitespace after paren")]
    #[test_case("rgb(1, 2, 3"; "missing close paren")]
    #[test_case("rgb(1, 2, 3) "; "trailing garbage")]
    #[test_case("RGB(1, 2, 3)"; "uppercase keyword")]
    #[test_case("rgb(-1, 2, 3)"; "negative channel")]
    #[test_case("not-a-color"; "unknown name")]
    #[test_case(""; "empty input")]
    fn malformed_specs_are_rejected(input: &str) {
        assert_eq!(input.parse::<Color>(), Err(ColorError::new(input)));
    }

    #[test]
    fn the_error_message_enumerates_the_accepted_names() {
        let report = ColorError::new("mauve").to_string();
        assert!(report.contains("mauve"));
        assert!(report.contains("black red green yellow blue violet cyan grey none"));
    }

    #[test]
    fn the_named_color_set_is_closed() {
        assert_eq!(NamedColor::COUNT, 9);
        assert_eq!(
            NamedColor::valid_names(),
            "black red green yellow blue violet cyan grey none"
        );
    }
}
