// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, ColorError, NamedColor, SgrCode};

/// The fluent message builder. It has two fields:
/// - `text` - the accumulated, already rendered output buffer.
/// - `styles` - the pending [`SgrCode`]s applied to the NEXT appended or
///   prepended fragment. This is owned in a stack allocated buffer (which can
///   spill to the heap if it gets larger than
///   [`sizing::MAX_PENDING_STYLE_SIZE`]).
///
/// Pending styles are never applied retroactively: every [`Self::append`] and
/// [`Self::prepend`] wraps only its own fragment in
/// `<codes…><fragment><reset>`, so styling never leaks into neighboring text.
/// Codes accumulate in call order; [`Self::reset`] is the only operation that
/// discards them, matching ANSI semantics where reset-all must be issued to
/// fully clear.
///
/// Every operation takes the builder by value and returns it, so a whole
/// message is one expression. An instance is a plain value with no shared
/// state; ownership confines it to one call chain.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_styled_message::StyledMessage;
///
/// let msg = StyledMessage::new()
///     .bold()
///     .set_color_red()
///     .append("a");
/// assert_eq!(msg.text, "\x1b[1m\x1b[31ma\x1b[0m");
///
/// StyledMessage::new()
///     .set_color_green()
///     .append_check_mark()
///     .append_whitespace(1)
///     .set_color_cyan()
///     .append("Successfully executed!")
///     .reset()
///     .log();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledMessage {
    pub text: String,
    pub styles: sizing::InlineVecStyles,
}

pub mod sizing {
    use smallstr::SmallString;
    use smallvec::SmallVec;

    use super::SgrCode;

    /// Pending attributes are: color_fg, color_bg, bold, dim, italic,
    /// underline, blink, plus headroom for repeated color pushes before a
    /// `reset`.
    pub const MAX_PENDING_STYLE_SIZE: usize = 12;
    pub type InlineVecStyles = SmallVec<[SgrCode; MAX_PENDING_STYLE_SIZE]>;

    /// Scratch storage for rendering one wrapped fragment before it lands in
    /// the text buffer. Spills to the heap for longer fragments.
    pub const FRAGMENT_STORAGE_SIZE: usize = 64;
    pub type FragmentBuffer = SmallString<[u8; FRAGMENT_STORAGE_SIZE]>;
}

mod constructor_impl {
    use super::*;

    impl StyledMessage {
        /// Creates an empty message with no pending styles. Use
        /// [`From<&str>`] / [`From<String>`] to start from an initial text.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl From<&str> for StyledMessage {
        fn from(message: &str) -> Self {
            Self {
                text: message.to_owned(),
                styles: sizing::InlineVecStyles::new(),
            }
        }
    }

    impl From<String> for StyledMessage {
        fn from(message: String) -> Self {
            Self {
                text: message,
                styles: sizing::InlineVecStyles::new(),
            }
        }
    }
}

mod style_state_impl {
    use super::*;

    impl StyledMessage {
        pub(crate) fn with_style(mut self, code: SgrCode) -> Self {
            self.styles.push(code);
            self
        }

        /// Discards every accumulated code and replaces the pending prefix
        /// with the ANSI "reset all attributes" code.
        #[must_use]
        pub fn reset(mut self) -> Self {
            self.styles.clear();
            self.styles.push(SgrCode::Reset);
            self
        }

        #[must_use]
        pub fn bold(self) -> Self {
            self.with_style(SgrCode::Bold)
        }

        #[must_use]
        pub fn italic(self) -> Self {
            self.with_style(SgrCode::Italic)
        }

        #[must_use]
        pub fn blink(self) -> Self {
            self.with_style(SgrCode::SlowBlink)
        }

        #[must_use]
        pub fn underline(self) -> Self {
            self.with_style(SgrCode::Underline)
        }

        /// Machine-like (teletype) rendering, via the ANSI dim attribute.
        #[must_use]
        pub fn machine(self) -> Self {
            self.with_style(SgrCode::Dim)
        }

        /// Pushes the foreground code for `spec` onto the pending styles.
        /// `spec` is one of the [`NamedColor`] names or an `rgb(r, g, b)`
        /// literal with each channel in `0..=255`.
        ///
        /// # Errors
        ///
        /// Returns [`ColorError`] when `spec` is neither; the message
        /// enumerates the accepted names.
        pub fn set_color(self, spec: &str) -> Result<Self, ColorError> {
            let color: Color = spec.parse()?;
            Ok(self.with_style(color.fg_code()))
        }

        /// Background counterpart of [`Self::set_color`]: named colors map
        /// to the `40..=47` plane, literals to the 24-bit background
        /// sequence.
        ///
        /// # Errors
        ///
        /// Returns [`ColorError`] on invalid input, exactly like
        /// [`Self::set_color`].
        pub fn set_bg_color(self, spec: &str) -> Result<Self, ColorError> {
            let color: Color = spec.parse()?;
            Ok(self.with_style(color.bg_code()))
        }
    }
}

// The following methods are infallible conveniences, one per named color and
// plane. They bypass parsing and push the known-valid code directly.

mod named_color_convenience_impl {
    use super::*;

    impl StyledMessage {
        /// Sets the color of the next fragment to black.
        #[must_use]
        pub fn set_color_black(self) -> Self {
            self.with_style(NamedColor::Black.fg_code())
        }

        /// Sets the color of the next fragment to red.
        #[must_use]
        pub fn set_color_red(self) -> Self {
            self.with_style(NamedColor::Red.fg_code())
        }

        /// Sets the color of the next fragment to green.
        #[must_use]
        pub fn set_color_green(self) -> Self {
            self.with_style(NamedColor::Green.fg_code())
        }

        /// Sets the color of the next fragment to yellow.
        #[must_use]
        pub fn set_color_yellow(self) -> Self {
            self.with_style(NamedColor::Yellow.fg_code())
        }

        /// Sets the color of the next fragment to blue.
        #[must_use]
        pub fn set_color_blue(self) -> Self {
            self.with_style(NamedColor::Blue.fg_code())
        }

        /// Sets the color of the next fragment to violet.
        #[must_use]
        pub fn set_color_violet(self) -> Self {
            self.with_style(NamedColor::Violet.fg_code())
        }

        /// Sets the color of the next fragment to cyan.
        #[must_use]
        pub fn set_color_cyan(self) -> Self {
            self.with_style(NamedColor::Cyan.fg_code())
        }

        /// Sets the color of the next fragment to grey.
        #[must_use]
        pub fn set_color_grey(self) -> Self {
            self.with_style(NamedColor::Grey.fg_code())
        }

        /// Sets the background of the next fragment to black.
        #[must_use]
        pub fn set_bg_color_black(self) -> Self {
            self.with_style(NamedColor::Black.bg_code())
        }

        /// Sets the background of the next fragment to red.
        #[must_use]
        pub fn set_bg_color_red(self) -> Self {
            self.with_style(NamedColor::Red.bg_code())
        }

        /// Sets the background of the next fragment to green.
        #[must_use]
        pub fn set_bg_color_green(self) -> Self {
            self.with_style(NamedColor::Green.bg_code())
        }

        /// Sets the background of the next fragment to yellow.
        #[must_use]
        pub fn set_bg_color_yellow(self) -> Self {
            self.with_style(NamedColor::Yellow.bg_code())
        }

        /// Sets the background of the next fragment to blue.
        #[must_use]
        pub fn set_bg_color_blue(self) -> Self {
            self.with_style(NamedColor::Blue.bg_code())
        }

        /// Sets the background of the next fragment to violet.
        #[must_use]
        pub fn set_bg_color_violet(self) -> Self {
            self.with_style(NamedColor::Violet.bg_code())
        }

        /// Sets the background of the next fragment to cyan.
        #[must_use]
        pub fn set_bg_color_cyan(self) -> Self {
            self.with_style(NamedColor::Cyan.bg_code())
        }

        /// Sets the background of the next fragment to grey.
        #[must_use]
        pub fn set_bg_color_grey(self) -> Self {
            self.with_style(NamedColor::Grey.bg_code())
        }
    }
}

mod text_buffer_impl {
    use std::fmt::Write as _;

    use super::*;

    impl StyledMessage {
        /// Renders `<pending codes><text><reset>` into a stack allocated
        /// scratch buffer. The trailing reset is emitted even when no styles
        /// are pending.
        fn render_fragment(&self, arg_text: &str) -> sizing::FragmentBuffer {
            let mut acc = sizing::FragmentBuffer::new();
            for code in &self.styles {
                _ = write!(acc, "{code}");
            }
            acc.push_str(arg_text);
            _ = write!(acc, "{}", SgrCode::Reset);
            acc
        }

        /// Appends the fragment, wrapped in the current pending styles and a
        /// hard reset, to the end of the buffer.
        #[must_use]
        pub fn append(mut self, arg_text: impl AsRef<str>) -> Self {
            let fragment = self.render_fragment(arg_text.as_ref());
            self.text.push_str(&fragment);
            self
        }

        /// Inserts the wrapped fragment BEFORE the existing buffer. Only the
        /// new fragment is styled; the previously existing text stays
        /// byte-identical.
        #[must_use]
        pub fn prepend(mut self, arg_text: impl AsRef<str>) -> Self {
            let fragment = self.render_fragment(arg_text.as_ref());
            self.text.insert_str(0, &fragment);
            self
        }

        /// Appends `n` space characters, styled like any other fragment. A
        /// count of zero silently normalizes to one; whitespace insertion is
        /// best-effort, never an error.
        #[must_use]
        pub fn append_whitespace(self, n: usize) -> Self {
            self.append(" ".repeat(n.max(1)))
        }

        /// Prepends `n` space characters; same normalization as
        /// [`Self::append_whitespace`].
        #[must_use]
        pub fn prepend_whitespace(self, n: usize) -> Self {
            self.prepend(" ".repeat(n.max(1)))
        }
    }
}

mod output_impl {
    use super::*;

    impl StyledMessage {
        /// Prints the buffer to stdout.
        pub fn log(self) -> Self {
            println!("{}", self.text);
            self
        }

        /// Prints the buffer to stdout, as an informational message.
        pub fn info(self) -> Self {
            println!("{}", self.text);
            self
        }

        /// Prints the buffer to stderr, as a warning.
        pub fn warn(self) -> Self {
            eprintln!("{}", self.text);
            self
        }

        /// Prints the buffer to stderr. It only prints; it never fails the
        /// chain.
        pub fn error(self) -> Self {
            eprintln!("{}", self.text);
            self
        }
    }
}

mod metadata_impl {
    use super::StyledMessage;

    impl StyledMessage {
        pub const AUTHOR: &'static str = env!("CARGO_PKG_AUTHORS");
        pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    }
}

mod display_trait_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::StyledMessage;

    impl Display for StyledMessage {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("black",  "\x1b[30m")]
    #[test_case("red",    "\x1b[31m")]
    #[test_case("green",  "\x1b[32m")]
    #[test_case("yellow", "\x1b[33m")]
    #[test_case("blue",   "\x1b[34m")]
    #[test_case("violet", "\x1b[35m")]
    #[test_case("cyan",   "\x1b[36m")]
    #[test_case("grey",   "\x1b[37m")]
    #[test_case("none",   "\x1b[0m")]
    fn set_color_wraps_the_next_fragment(name: &str, code: &str) {
        let msg = StyledMessage::new().set_color(name).unwrap().append("s");
        assert_eq!(msg.text, format!("{code}s\x1b[0m"));
    }

    #[test_case("black",  "\x1b[40m")]
    #[test_case("red",    "\x1b[41m")]
    #[test_case("green",  "\x1b[42m")]
    #[test_case("yellow", "\x1b[43m")]
    #[test_case("blue",   "\x1b[44m")]
    #[test_case("violet", "\x1b[45m")]
    #[test_case("cyan",   "\x1b[46m")]
    #[test_case("grey",   "\x1b[47m")]
    #[test_case("none",   "\x1b[0m")]
    fn set_bg_color_wraps_the_next_fragment(name: &str, code: &str) {
        let msg = StyledMessage::new().set_bg_color(name).unwrap().append("s");
        assert_eq!(msg.text, format!("{code}s\x1b[0m"));
    }

    #[test_case(0, 0, 0)]
    #[test_case(255, 125, 0)]
    #[test_case(17, 3, 255)]
    fn rgb_literals_embed_the_captured_channels(red: u8, green: u8, blue: u8) {
        let spec = format!("rgb({red}, {green}, {blue})");
        let msg = StyledMessage::new().set_color(&spec).unwrap().append("x");
        assert_eq!(msg.text, format!("\x1b[38;2;{red};{green};{blue}mx\x1b[0m"));

        let msg = StyledMessage::new().set_bg_color(&spec).unwrap().append("x");
        assert_eq!(msg.text, format!("\x1b[48;2;{red};{green};{blue}mx\x1b[0m"));
    }

    #[test_case("rgb(256, 0, 0)")]
    #[test_case("not-a-color")]
    #[test_case("rgb(1, 2, 3")]
    fn invalid_specs_fail_on_both_planes(spec: &str) {
        assert!(StyledMessage::new().set_color(spec).is_err());
        assert!(StyledMessage::new().set_bg_color(spec).is_err());
    }

    #[test]
    fn reset_discards_accumulated_styles() {
        let msg = StyledMessage::new()
            .bold()
            .set_color_red()
            .reset()
            .append("s");
        assert_eq!(msg.text, "\x1b[0ms\x1b[0m");
    }

    #[test]
    fn styles_accumulate_in_call_order() {
        let msg = StyledMessage::new()
            .bold()
            .italic()
            .underline()
            .set_color("rgb(200, 50, 30)")
            .unwrap()
            .set_bg_color("cyan")
            .unwrap()
            .append("x");
        assert_eq!(
            msg.text,
            "\x1b[1m\x1b[3m\x1b[4m\x1b[38;2;200;50;30m\x1b[46mx\x1b[0m"
        );
    }

    #[test]
    fn chaining_matches_manual_concatenation() {
        let chained = StyledMessage::new().bold().set_color_red().append("a");
        let manual = format!(
            "{}{}a{}",
            SgrCode::Bold,
            NamedColor::Red.fg_code(),
            SgrCode::Reset
        );
        assert_eq!(chained.text, manual);
    }

    #[test]
    fn conveniences_match_set_color() {
        let by_name = StyledMessage::new().set_color("violet").unwrap().append("v");
        let by_method = StyledMessage::new().set_color_violet().append("v");
        assert_eq!(by_method.text, by_name.text);

        let by_name = StyledMessage::new()
            .set_bg_color("grey")
            .unwrap()
            .append("v");
        let by_method = StyledMessage::new().set_bg_color_grey().append("v");
        assert_eq!(by_method.text, by_name.text);
    }

    #[test]
    fn machine_is_the_dim_rendering() {
        let msg = StyledMessage::new().machine().append("tty");
        assert_eq!(msg.text, "\x1b[2mtty\x1b[0m");
    }

    #[test]
    fn blink_is_the_slow_blink_code() {
        let msg = StyledMessage::new().blink().append("b");
        assert_eq!(msg.text, "\x1b[5mb\x1b[0m");
    }

    #[test]
    fn append_wraps_even_without_pending_styles() {
        let msg = StyledMessage::new().append("plain");
        assert_eq!(msg.text, "plain\x1b[0m");
    }

    #[test]
    fn prepend_leaves_existing_text_untouched_and_unstyled() {
        let msg = StyledMessage::from("T").bold().prepend("s");
        assert_eq!(msg.text, "\x1b[1ms\x1b[0mT");
    }

    #[test]
    fn whitespace_counts_are_normalized() {
        let msg = StyledMessage::new().append_whitespace(3);
        assert_eq!(msg.text, "   \x1b[0m");

        let msg = StyledMessage::new().append_whitespace(0);
        assert_eq!(msg.text, " \x1b[0m");

        let msg = StyledMessage::from("T").prepend_whitespace(2);
        assert_eq!(msg.text, "  \x1b[0mT");
    }

    #[test]
    fn whitespace_is_styled_like_any_fragment() {
        let msg = StyledMessage::new().set_bg_color_blue().append_whitespace(1);
        assert_eq!(msg.text, "\x1b[44m \x1b[0m");
    }

    #[test]
    fn output_methods_return_the_buffer_unchanged() {
        let msg = StyledMessage::new().set_color_green().append("done");
        let expected = msg.text.clone();
        let msg = msg.log().info().warn().error();
        assert_eq!(msg.text, expected);
    }

    #[test]
    fn display_writes_the_rendered_buffer() {
        let msg = StyledMessage::from("plain").bold().append("!");
        assert_eq!(format!("{msg}"), msg.text);
    }

    #[test]
    fn metadata_constants_come_from_the_manifest() {
        assert_eq!(StyledMessage::VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!StyledMessage::AUTHOR.is_empty());
    }
}
