use tictactoe_engine::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    ToggleMode,
    SetDifficulty(Difficulty),
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    MissingDifficulty,
    Unknown(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Enter a command, or h for help"),
            CommandError::MissingDifficulty => {
                write!(f, "Usage: d <easy|medium|hard|expert>")
            }
            CommandError::Unknown(input) => {
                write!(f, "Unknown command '{}', type h for help", input)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Cells are typed 1-9. Unknown difficulty names become medium.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(CommandError::Empty);
    };

    if let Ok(cell) = head.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&cell) && parts.next().is_none() {
            return Ok(Command::Place(cell - 1));
        }
        return Err(CommandError::Unknown(input.trim().to_string()));
    }

    let command = match head.to_ascii_lowercase().as_str() {
        "r" | "reset" => Command::Reset,
        "m" | "mode" => Command::ToggleMode,
        "d" | "difficulty" => {
            let name = parts.next().ok_or(CommandError::MissingDifficulty)?;
            Command::SetDifficulty(Difficulty::from_name(name))
        }
        "s" | "stats" => Command::Stats,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(input.trim().to_string())),
    };
    Ok(command)
}
