use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::{GameEvent, GameMode, HUMAN_MARK, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn add_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

/// Results against the computer, from the human's side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Statistics {
    fn record_win(&mut self) {
        self.games_played += 1;
        self.wins += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    fn record_loss(&mut self) {
        self.games_played += 1;
        self.losses += 1;
        self.current_streak = 0;
    }

    fn record_draw(&mut self) {
        self.games_played += 1;
        self.draws += 1;
        self.current_streak = 0;
    }

    /// Whole percent, rounded half up.
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (self.wins * 200 + self.games_played) / (self.games_played * 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub scores: Scores,
    pub statistics: Statistics,
}

impl Scoreboard {
    /// Counts a finished game. Returns `true` when something changed.
    pub fn record(&mut self, mode: GameMode, event: &GameEvent) -> bool {
        match *event {
            GameEvent::GameWon { mark, .. } => {
                self.scores.add_win(mark);
                if mode == GameMode::Computer {
                    if mark == HUMAN_MARK {
                        self.statistics.record_win();
                    } else {
                        self.statistics.record_loss();
                    }
                }
                true
            }
            GameEvent::GameDraw if mode == GameMode::Computer => {
                self.statistics.record_draw();
                true
            }
            _ => false,
        }
    }
}

impl Validate for Scoreboard {
    fn validate(&self) -> Result<(), String> {
        let stats = &self.statistics;
        if stats.wins + stats.losses + stats.draws != stats.games_played {
            return Err(format!(
                "wins ({}) + losses ({}) + draws ({}) must equal games_played ({})",
                stats.wins, stats.losses, stats.draws, stats.games_played
            ));
        }
        if stats.current_streak > stats.best_streak {
            return Err("current_streak cannot exceed best_streak".to_string());
        }
        Ok(())
    }
}
