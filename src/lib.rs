// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_styled_message
//!
//! Fluent builder for ANSI styled terminal messages. A [`StyledMessage`]
//! accumulates a text buffer and a set of pending style / color escape codes
//! through chained calls, then prints the composed string to stdout or
//! stderr. It supports the classic 8 terminal colors on both planes, 24-bit
//! truecolor via `rgb(r, g, b)` literals, the usual SGR attributes (bold,
//! italic, underline, blink, dim), and a closed catalog of named Unicode
//! glyphs (math operators, check marks, currency, emoji).
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_styled_message::{ColorError, StyledMessage};
//!
//! # fn main() -> Result<(), ColorError> {
//! StyledMessage::new()
//!     .set_color_green()
//!     .append_check_mark()
//!     .append_whitespace(1)
//!     .set_color("rgb(90, 250, 250)")?
//!     .append("Build finished.")
//!     .reset()
//!     .log();
//! # Ok(())
//! # }
//! ```
//!
//! Styles accumulate in call order and apply only to fragments added after
//! they were set; every appended fragment is terminated with a hard reset, so
//! styling never leaks into neighboring text. [`StyledMessage::reset`] is the
//! only operation that clears accumulated style state.
//!
//! A builder is a plain value: each operation consumes it and returns it, so
//! ownership confines an instance to one logical call chain.

pub mod ansi_escape_codes;
pub mod color;
pub mod styled_message;
pub mod symbols;

pub use ansi_escape_codes::*;
pub use color::*;
pub use styled_message::*;
