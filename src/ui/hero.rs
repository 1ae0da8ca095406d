use colored::Colorize;
use eyre::Result;

use crate::ui::prompt_line;

pub fn render() {
    println!();
    println!("  {}{}", "CV Forge".white().bold(), ".ai".cyan().bold());
    println!(
        "  {}",
        "Land more interviews with an AI-optimized CV".bright_black()
    );
    println!();
    println!(
        "  Upload your CV and a job description; get back a rewritten,\n  \
         ATS-scored version with ready-to-compile LaTeX source."
    );
    println!();
    println!("  {}", "Powered by Gemini".bright_black());
    println!();
}

/// Returns false when the user chooses to quit instead of starting.
pub fn wait_for_start() -> Result<bool> {
    let input = prompt_line(&format!(
        "{}",
        "Press Enter to get started (or 'q' to quit): ".cyan()
    ))?;

    Ok(!input.eq_ignore_ascii_case("q"))
}
