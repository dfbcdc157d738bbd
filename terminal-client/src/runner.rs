use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::TicTacToeSession;

use crate::broadcaster::TerminalBroadcaster;
use crate::command::{Command, parse_command};
use crate::render::{help_text, render_scoreboard, render_session};
use crate::scoreboard::Scoreboard;

pub type StatsManager = ConfigManager<FileContentConfigProvider, Scoreboard>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct GameRunner {
    session: TicTacToeSession<TerminalBroadcaster>,
    computer_delay: Duration,
    stats_manager: StatsManager,
    output: Vec<String>,
}

impl GameRunner {
    pub fn new(
        session: TicTacToeSession<TerminalBroadcaster>,
        computer_delay: Duration,
        stats_manager: StatsManager,
    ) -> Self {
        Self {
            session,
            computer_delay,
            stats_manager,
            output: Vec::new(),
        }
    }

    pub fn session(&self) -> &TicTacToeSession<TerminalBroadcaster> {
        &self.session
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        match command {
            Command::Place(index) => {
                // rejections reach the player through the broadcaster
                let _ = self.session.submit_move(index);
            }
            Command::Reset => self.session.reset(),
            Command::ToggleMode => {
                self.session.toggle_mode();
            }
            Command::SetDifficulty(difficulty) => self.session.set_difficulty(difficulty),
            Command::Stats => self
                .output
                .push(render_scoreboard(self.session.broadcaster().scoreboard())),
            Command::Help => self.output.push(help_text()),
            Command::Quit => return Flow::Quit,
        }
        self.persist_scoreboard();
        Flow::Continue
    }

    pub fn play_computer_turn(&mut self) {
        match self.session.play_computer_turn() {
            Ok(index) => self.output.push(format!("Computer plays {}", index + 1)),
            Err(e) => {
                log!("Computer turn failed, starting over: {}", e);
                self.session.reset();
            }
        }
        self.persist_scoreboard();
    }

    /// Everything queued for the player since the last call.
    pub fn drain_output(&mut self) -> Vec<String> {
        let mut lines = self.session.broadcaster_mut().drain_messages();
        lines.append(&mut self.output);
        lines
    }

    fn persist_scoreboard(&mut self) {
        if !self.session.broadcaster_mut().take_scoreboard_dirty() {
            return;
        }
        let scoreboard = *self.session.broadcaster().scoreboard();
        if let Err(e) = self.stats_manager.set_config(&scoreboard) {
            log!("Failed to save statistics: {}", e);
        }
    }

    fn print_output(&mut self) {
        for line in self.drain_output() {
            println!("{}", line);
        }
    }

    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{}", help_text());

        loop {
            self.print_output();
            println!("\n{}\n", render_session(self.session()));

            if self.session.is_computer_turn() {
                tokio::time::sleep(self.computer_delay).await;
                self.play_computer_turn();
                continue;
            }

            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Ok(command) => {
                    if self.handle_command(command) == Flow::Quit {
                        break;
                    }
                }
                Err(e) => self.output.push(e.to_string()),
            }
        }

        self.persist_scoreboard();
        log!("Session finished");
        Ok(())
    }
}
