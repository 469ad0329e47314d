use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_game::config::GameConfig;
use connect_game::game::{Game, GameStatus, Token};

/// Play an N-in-a-row connection game in the terminal.
#[derive(Parser)]
#[command(name = "connect-game", about = "Play an N-in-a-row connection game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the run length needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the number of players
    #[arg(long)]
    players: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(connect) = cli.connect {
        config.connect = connect;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(players) = cli.players {
        config.players = players;
    }

    let mut game = Game::new(&config).context("invalid game configuration")?;
    let tokens: Vec<Token> = (0..config.players as u32).map(Token::new).collect();

    println!("Beginning the game!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut active = 0;

    while game.status() == GameStatus::InProgress {
        println!("{}", game.render());
        println!("Player {}'s move:", active + 1);

        let Some(line) = lines.next() else {
            // Input exhausted; leave the game unfinished.
            return Ok(());
        };
        let line = line.context("reading move from stdin")?;

        let column = match line.trim().parse::<usize>() {
            Ok(column) => column,
            Err(_) => {
                println!("Not a valid move. Try again.");
                continue;
            }
        };

        // An invalid column keeps the turn with the same player
        if !game.drop_token(tokens[active], column) {
            println!("Not a valid move. Try again.");
            continue;
        }

        active = (active + 1) % tokens.len();
    }

    println!("{}", game.render());
    match game.status() {
        GameStatus::WonBy(token) => println!("Winner is: {token}"),
        GameStatus::Draw => println!("The game is a draw."),
        GameStatus::InProgress => unreachable!("loop exits only on a terminal status"),
    }

    Ok(())
}
