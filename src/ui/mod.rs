pub mod dashboard;
pub mod gauge;
pub mod hero;
pub mod processing;
pub mod upload;

use std::io::{self, Write};

use eyre::Result;

/// Prints a prompt and reads one trimmed line from stdin.
pub(crate) fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        eyre::bail!("stdin closed");
    }

    Ok(input.trim().to_string())
}
