use std::time::Duration;

use colored::Colorize;
use tokio::task::JoinHandle;

/// The cosmetic step texts shown while the gateway call is in flight.
pub const STEPS: [&str; 4] = [
    "Extracting CV content...",
    "Analyzing job requirements...",
    "Rewriting bullet points...",
    "Optimizing keywords & metrics...",
];

/// Wall-clock pace of the indicator. Ornamentation only: the ticker is
/// not tied to the gateway call and can finish before or after it.
pub const STEP_INTERVAL: Duration = Duration::from_secs(2);

/// Looping step index, advanced on a timer. Saturates at the last step.
#[derive(Debug, Default)]
pub struct StepTicker {
    index: usize,
}

impl StepTicker {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        STEPS[self.index]
    }

    /// Advances to the next step; returns false once saturated.
    pub fn advance(&mut self) -> bool {
        if self.index < STEPS.len() - 1 {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

/// Spawns the decorative indicator. The caller aborts the task when the
/// real call settles; whatever the ticker displayed by then is irrelevant.
pub fn spawn_indicator() -> JoinHandle<()> {
    tokio::spawn(async move {
        println!();
        println!("  {}", "Optimizing your profile".white().bold());

        let mut ticker = StepTicker::default();
        let mut interval = tokio::time::interval(STEP_INTERVAL);
        interval.tick().await;

        loop {
            println!("    {} {}", "▸".cyan(), ticker.current().bright_black());

            if ticker.index() == STEPS.len() - 1 {
                break;
            }

            interval.tick().await;
            ticker.advance();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_walks_every_step_in_order() {
        let mut ticker = StepTicker::default();
        assert_eq!(ticker.current(), STEPS[0]);

        assert!(ticker.advance());
        assert_eq!(ticker.current(), STEPS[1]);
        assert!(ticker.advance());
        assert!(ticker.advance());
        assert_eq!(ticker.current(), STEPS[3]);
    }

    #[test]
    fn test_ticker_saturates_at_last_step() {
        let mut ticker = StepTicker::default();
        for _ in 0..10 {
            ticker.advance();
        }

        assert_eq!(ticker.index(), STEPS.len() - 1);
        assert!(!ticker.advance());
        assert_eq!(ticker.current(), STEPS[3]);
    }
}
