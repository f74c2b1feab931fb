// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_styled_message::{ColorError, StyledMessage};

fn main() -> Result<(), ColorError> {
    // Success banner.
    StyledMessage::new()
        .set_color_green()
        .append_check_mark()
        .append_whitespace(1)
        .set_color_cyan()
        .append("Successfully executed the styled message demo!")
        .reset()
        .log();

    // Pseudo error message, truecolor fg on truecolor bg.
    StyledMessage::new()
        .set_color("rgb(200, 50, 30)")?
        .set_bg_color("rgb(90, 250, 250)")?
        .underline()
        .bold()
        .italic()
        .append_warning_sign()
        .append_whitespace(1)
        .append("Pseudo error message:")
        .append_whitespace(1)
        .append_face_with_tears_of_joy()
        .reset()
        .log();

    // Quantifier formula.
    StyledMessage::new()
        .bold()
        .set_color_yellow()
        .set_bg_color("rgb(45, 140, 200)")?
        .append_logical_for_all_symbol()
        .append(" a, b : a ")
        .append_logical_element_of_symbol()
        .append_whitespace(1)
        .append_math_natural_numbers_symbol()
        .append_whitespace(1)
        .append_logical_conjunction_symbol()
        .append(" b ")
        .append_logical_element_of_symbol()
        .append_whitespace(1)
        .append_math_natural_numbers_symbol()
        .append_whitespace(1)
        .append_logical_follows_symbol()
        .append(" a + b ")
        .append_logical_element_of_symbol()
        .append_whitespace(1)
        .append_math_natural_numbers_symbol()
        .reset()
        .log();

    // Calculus formula.
    StyledMessage::new()
        .append("\n")
        .bold()
        .set_color("rgb(20, 130, 180)")?
        .append_math_cube_root_symbol()
        .append("x + ")
        .append_math_partial_differential()
        .append("y / ")
        .append_math_partial_differential()
        .append("x + w * y = 0")
        .reset()
        .log();

    // A short symbol tour.
    StyledMessage::new()
        .append("This is the ambulance symbol: ")
        .append_ambulance_symbol()
        .append("\n")
        .append("This is the copyright symbol: ")
        .append_copyright_symbol()
        .append("\n")
        .append("This is the hourglass symbol: ")
        .append_hourglass_symbol()
        .append("\n")
        .append("This is the Bitcoin symbol: ")
        .append_bitcoin_symbol()
        .append("\n")
        .append("This is the rose symbol: ")
        .append_rose_symbol()
        .reset()
        .log();

    // Warnings go to stderr.
    StyledMessage::new()
        .bold()
        .set_bg_color_yellow()
        .set_color_black()
        .append("Warnings are printed on stderr.")
        .reset()
        .warn();

    Ok(())
}
