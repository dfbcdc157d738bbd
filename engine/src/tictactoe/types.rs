use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Computer opponent strength. Unknown names fall back to [`Difficulty::Medium`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            _ => Difficulty::Medium,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from_name(&name)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.name().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    Computer,
}

impl GameMode {
    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::TwoPlayer => GameMode::Computer,
            GameMode::Computer => GameMode::TwoPlayer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("two player"),
            GameMode::Computer => f.write_str("computer"),
        }
    }
}

/// Three cell indices that win when held by one mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win { mark: Mark, line: WinningLine },
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    WrongTurn { expected: Mark, got: Mark },
    GameOver,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange { index } => {
                write!(f, "Cell {} is out of range (expected 0-8)", index)
            }
            InvalidMove::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            InvalidMove::WrongTurn { expected, got } => {
                write!(f, "Not {}'s turn, waiting for {}", got, expected)
            }
            InvalidMove::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for InvalidMove {}
