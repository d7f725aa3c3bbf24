//! Session 01 text helpers: bars, character cards, number bases, type limits.

// Display helpers build strings with format! on purpose
#![allow(clippy::format_push_string)]

use std::fmt::Display;

/// Filled bar segment.
pub const FILLED: char = '█';
/// Empty bar segment.
pub const EMPTY: char = '░';

/// Render a progress bar like `[█████░░░░░]`.
///
/// `filled = current * width / max`, clamped to `0..=width`. A `max` of
/// zero is treated as one; a quotient too large for `i64` fills the bar.
#[must_use]
pub fn bar(current: i64, max: i64, width: usize) -> String {
    let max = if max == 0 { 1 } else { max };
    let width_i = i64::try_from(width).unwrap_or(i64::MAX);
    let filled = current
        .saturating_mul(width_i)
        .checked_div(max)
        .unwrap_or(width_i)
        .clamp(0, width_i);
    let filled = usize::try_from(filled).unwrap_or(0);

    let mut output = String::with_capacity(width * 3 + 2);
    output.push('[');
    for i in 0..width {
        output.push(if i < filled { FILLED } else { EMPTY });
    }
    output.push(']');
    output
}

/// Render a character summary card.
#[must_use]
pub fn character_card(
    name: &str,
    class: &str,
    level: u32,
    health: u32,
    max_health: u32,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Name:   {name:<15}\n"));
    output.push_str(&format!("Class:  {class:<15}\n"));
    output.push_str(&format!("Level:  {level}\n"));
    output.push_str(&format!(
        "Health: {} {health}/{max_health}\n",
        bar(i64::from(health), i64::from(max_health), 10)
    ));
    output
}

/// Show a value in decimal, hexadecimal and octal.
///
/// Negative values show their two's-complement bit pattern in hex and octal.
#[must_use]
pub fn in_bases(value: i32) -> String {
    format!("Dec: {value}, Hex: {value:x}, Oct: {value:o}")
}

/// Size and limits of a primitive type.
pub trait TypeLimits {
    /// Smallest representable value, formatted.
    fn min_value() -> String;
    /// Largest representable value, formatted.
    fn max_value() -> String;
}

macro_rules! impl_type_limits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeLimits for $ty {
                fn min_value() -> String {
                    <$ty>::MIN.to_string()
                }

                fn max_value() -> String {
                    <$ty>::MAX.to_string()
                }
            }
        )*
    };
}

impl_type_limits!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Describe a type's size and range.
#[must_use]
pub fn type_info<T: TypeLimits>(type_name: &str) -> String {
    format!(
        "Type: {type_name}\n  Size: {} bytes\n  Min:  {}\n  Max:  {}\n",
        std::mem::size_of::<T>(),
        T::min_value(),
        T::max_value()
    )
}

/// Pad a label/value pair the way the stat sheets do.
pub(crate) fn field(label: &str, value: impl Display) -> String {
    format!("{:<10}{value}\n", format!("{label}:"))
}
