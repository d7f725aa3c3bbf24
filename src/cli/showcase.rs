//! Session 01 display exercises.

use super::CliError;
use quest::display::{character_card, in_bases, type_info};

/// Print the character cards, number bases and type table.
///
/// # Errors
///
/// Never fails; returns `Result` like the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn execute() -> Result<(), CliError> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut output = String::from("=== Quest: Character Display System ===\n\n");
    output.push_str(&character_card("Aragorn", "Warrior", 10, 70, 100));
    output.push('\n');
    output.push_str(&character_card("Gandalf", "Mage", 50, 45, 60));

    output.push_str("\nCharacter ID: ");
    output.push_str(&in_bases(42));
    output.push_str("\n\n=== Type Information ===\n");
    output.push_str(&type_info::<u8>("u8"));
    output.push('\n');
    output.push_str(&type_info::<i32>("i32"));
    output.push('\n');
    output.push_str(&type_info::<f64>("f64"));
    output
}
