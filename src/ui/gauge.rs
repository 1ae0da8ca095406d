use colored::{ColoredString, Colorize};

/// Width of the gauge bar in cells; the fill proportion is score / 100.
pub const WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Mid,
    High,
}

/// Below 70 low, 70-85 mid, above 85 high.
pub fn band(score: u8) -> Band {
    match score {
        0..=69 => Band::Low,
        70..=85 => Band::Mid,
        _ => Band::High,
    }
}

pub fn filled_cells(score: u8) -> usize {
    (score.min(100) as usize * WIDTH) / 100
}

pub fn render(score: u8) -> String {
    format!("{} {}", bar(score), score.to_string().bold())
}

fn bar(score: u8) -> ColoredString {
    let filled = filled_cells(score);
    let cells = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled));

    match band(score) {
        Band::Low => cells.red(),
        Band::Mid => cells.yellow(),
        Band::High => cells.green(),
    }
}
