//! Interactive command assistant.
//!
//! Reads one command per line, hands it to [`Assistant`] and prints the
//! reply. The directory lives as long as the loop; nothing is persisted.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{error_message, Assistant, Reply, HELP};

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter a command: ";

/// Run the assistant loop until `close`/`exit` or end of input.
///
/// # Arguments
/// * `assistant` - The assistant holding the directory
/// * `input` - Source of command lines (stdin in the binary)
/// * `output` - Destination of prompts and replies (stdout in the binary)
///
/// # Returns
/// An error only if reading input or writing output fails
pub fn run<R: BufRead, W: Write>(
    assistant: &mut Assistant,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "Welcome to the assistant bot! Here are the commands:")?;
    writeln!(output, "{}", HELP)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("End of input, stopping");
            writeln!(output)?;
            break;
        }

        match assistant.handle_line(&line) {
            Reply::Text(text) => writeln!(output, "{}", text)?,
            Reply::Silent => {}
            Reply::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    Ok(())
}
