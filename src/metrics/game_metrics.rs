use std::time::{Duration, Instant};

/// Session statistics across resets of one process run. Nothing here is
/// persisted; closing the window discards it all.
pub struct GameMetrics {
    run_started: Instant,
    pub last_run_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            last_run_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// A new run begins (initial spawn or reset)
    pub fn on_game_start(&mut self) {
        self.run_started = Instant::now();
    }

    /// A run ended with the given final score
    pub fn on_game_over(&mut self, final_score: u32) {
        self.last_run_time = self.run_started.elapsed();
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// "mm:ss" of the last finished run
    pub fn format_last_run_time(&self) -> String {
        let total_secs = self.last_run_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
