//! Main menu, game screen and scripted play.

use crate::config::Config;
use crate::error::AppError;
use crate::render::Renderer;
use crate::theme::Theme;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rps_core::session::{parse_rounds, validate_name};
use rps_core::{Difficulty, MatchSession, MatchSetup, Move};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuOption {
    Begin,
    Difficulty,
    Theme,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameOption {
    Play(Move),
    Stats,
    Reset,
    MainMenu,
    Quit,
}

impl GameOption {
    fn label(&self) -> String {
        match self {
            GameOption::Play(m) => m.to_string(),
            GameOption::Stats => "STATS".to_string(),
            GameOption::Reset => "RESET".to_string(),
            GameOption::MainMenu => "MAIN MENU".to_string(),
            GameOption::Quit => "QUIT".to_string(),
        }
    }
}

/// Options offered on the game screen; moves disappear once the match is over
fn game_options(finished: bool) -> Vec<GameOption> {
    let mut options = Vec::new();
    if !finished {
        options.extend(Move::ALL.map(GameOption::Play));
    }
    options.extend([
        GameOption::Stats,
        GameOption::Reset,
        GameOption::MainMenu,
        GameOption::Quit,
    ]);
    options
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameExit {
    MainMenu,
    Quit,
}

pub struct App {
    config: Config,
    theme: Theme,
    difficulty: Difficulty,
    renderer: Renderer,
    dialog: ColorfulTheme,
    session: MatchSession,
}

impl App {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let renderer = Renderer::new(config.theme.palette()?, config.animation());
        let session = match config.seed {
            Some(seed) => MatchSession::seeded(seed),
            None => MatchSession::new(),
        };
        Ok(Self {
            theme: config.theme,
            difficulty: config.difficulty,
            renderer,
            dialog: ColorfulTheme::default(),
            session,
            config,
        })
    }

    pub fn run(mut self) -> Result<(), AppError> {
        if self.config.is_scripted() {
            self.run_scripted()
        } else {
            self.run_interactive()
        }
    }

    fn run_interactive(&mut self) -> Result<(), AppError> {
        loop {
            println!("\n{}\n", self.renderer.banner());
            match self.main_menu()? {
                MenuOption::Begin => {
                    let setup = self.prompt_setup()?;
                    self.session.start(setup)?;
                    if self.game_screen()? == GameExit::Quit {
                        return Ok(());
                    }
                }
                MenuOption::Difficulty => self.choose_difficulty()?,
                MenuOption::Theme => self.choose_theme()?,
                MenuOption::Quit => return Ok(()),
            }
        }
    }

    fn main_menu(&self) -> Result<MenuOption, AppError> {
        let options = [
            MenuOption::Begin,
            MenuOption::Difficulty,
            MenuOption::Theme,
            MenuOption::Quit,
        ];
        let labels = [
            "BEGIN!".to_string(),
            format!("Difficulty: {}", self.difficulty.label()),
            format!("Themes: {}", self.theme),
            "Quit".to_string(),
        ];
        let choice = Select::with_theme(&self.dialog)
            .with_prompt(self.renderer.title("Main Menu"))
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(options[choice])
    }

    fn choose_difficulty(&mut self) -> Result<(), AppError> {
        let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();
        let current = Difficulty::ALL
            .iter()
            .position(|d| *d == self.difficulty)
            .unwrap_or(0);
        let choice = Select::with_theme(&self.dialog)
            .with_prompt(self.renderer.title("Choose your difficulty:"))
            .items(&labels)
            .default(current)
            .interact()?;
        self.difficulty = Difficulty::ALL[choice];
        debug!(difficulty = self.difficulty.as_str(), "Difficulty selected");
        Ok(())
    }

    fn choose_theme(&mut self) -> Result<(), AppError> {
        let current = Theme::ALL
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        let choice = Select::with_theme(&self.dialog)
            .with_prompt(self.renderer.text("Themes:"))
            .items(&Theme::ALL)
            .default(current)
            .interact()?;
        self.theme = Theme::ALL[choice];
        self.renderer.set_palette(self.theme.palette()?);
        debug!(theme = self.theme.as_str(), "Theme selected");
        Ok(())
    }

    /// Ask for name and round count, re-prompting until both are valid
    fn prompt_setup(&self) -> Result<MatchSetup, AppError> {
        let renderer = &self.renderer;

        let mut name_input = Input::<String>::with_theme(&self.dialog)
            .with_prompt("Please enter your name...")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                validate_name(input)
                    .map(|_| ())
                    .map_err(|e| renderer.error(&e.to_string()))
            });
        if let Some(name) = &self.config.name {
            name_input = name_input.with_initial_text(name.clone());
        }
        let name = name_input.interact_text()?;

        let mut rounds_input = Input::<String>::with_theme(&self.dialog)
            .with_prompt("Please enter the number of rounds to play...")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                parse_rounds(input)
                    .map(|_| ())
                    .map_err(|e| renderer.error(&e.to_string()))
            });
        if let Some(rounds) = &self.config.rounds {
            rounds_input = rounds_input.with_initial_text(rounds.clone());
        }
        let rounds = rounds_input.interact_text()?;

        Ok(MatchSetup::parse(&name, &rounds, self.difficulty)?)
    }

    fn game_screen(&mut self) -> Result<GameExit, AppError> {
        loop {
            let name = self
                .session
                .setup()
                .map(|s| s.name().to_string())
                .unwrap_or_default();
            println!();
            println!("{}", self.renderer.welcome(&name));
            println!(
                "{}",
                self.renderer
                    .round(self.session.state(), self.session.phase())
            );
            println!("{}", self.renderer.scoreboard(self.session.state()));

            let options = game_options(self.session.is_finished());
            let labels: Vec<String> = options.iter().map(GameOption::label).collect();
            let choice = Select::with_theme(&self.dialog)
                .items(&labels)
                .default(0)
                .interact()?;

            match options[choice] {
                GameOption::Play(player) => self.play_round(player)?,
                GameOption::Stats => println!("\n{}", self.renderer.chart(&self.session.stats())),
                GameOption::Reset => self.session.restart()?,
                GameOption::MainMenu => {
                    self.session.reset();
                    return Ok(GameExit::MainMenu);
                }
                GameOption::Quit => return Ok(GameExit::Quit),
            }
        }
    }

    fn play_round(&mut self, player: Move) -> Result<(), AppError> {
        // The outcome is settled before the animation starts
        let report = self.session.play(player)?;
        let resolution = report.resolution;

        self.renderer.animate(resolution.player, resolution.computer)?;
        println!("{}", self.renderer.outcome(&resolution));
        if report.rock_out {
            self.renderer.rock_out()?;
        }
        Ok(())
    }

    fn run_scripted(&mut self) -> Result<(), AppError> {
        let (name, rounds) = match (&self.config.name, &self.config.rounds) {
            (Some(name), Some(rounds)) => (name, rounds),
            _ => return Err(AppError::MissingScriptedSetup),
        };
        let setup = MatchSetup::parse(name, rounds, self.difficulty)?;
        self.session.start(setup)?;

        let moves = std::mem::take(&mut self.config.moves);
        for (played, player) in moves.iter().enumerate() {
            if self.session.is_finished() {
                warn!(
                    ignored = moves.len() - played,
                    "Match finished; ignoring remaining moves"
                );
                break;
            }
            let report = self.session.play(*player)?;

            if self.config.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!(
                    "{} {}",
                    self.renderer.title(&format!("ROUND {}", report.round)),
                    self.renderer.outcome(&report.resolution)
                );
                if report.rock_out {
                    println!("{}", self.renderer.title("ROCK OUT!"));
                }
            }
        }

        let stats = self.session.stats();
        if self.config.json {
            println!("{}", serde_json::to_string(&stats)?);
        } else {
            println!(
                "{}",
                self.renderer
                    .round(self.session.state(), self.session.phase())
            );
            println!("{}", self.renderer.scoreboard(self.session.state()));
            println!("{}", self.renderer.chart(&stats));
        }
        Ok(())
    }
}
