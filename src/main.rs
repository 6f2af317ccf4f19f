use std::io::{self, BufRead, Write};

use broadside::{
    init_logging, invalid_move_message, render_view, sunk_message, GameEngine, Player,
    PlayerTurn, ScanAi, Side, SunkShip,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    ///
    /// Keys: w/a/s/d move the cursor, f fires, q quits. Several keys may be
    /// entered on one line.
    Play,
    /// Let the scan strategy play the human side until the game ends.
    Simulate {
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}

#[derive(serde::Serialize)]
struct SimulationReport {
    turns: usize,
    winner: Option<Side>,
    sunk: Vec<SunkShip>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play => play(),
        Commands::Simulate { json } => simulate(json),
    }
}

fn redraw(engine: &mut GameEngine) {
    for event in engine.take_events().iter() {
        println!("{}", sunk_message(&event));
    }
    println!("{}", render_view(engine));
}

fn play() -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    redraw(&mut engine);
    print!("> ");
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if engine.is_game_over() {
            if line.trim().eq_ignore_ascii_case("q") {
                return Ok(());
            }
            engine.reset();
            redraw(&mut engine);
            print!("> ");
            io::stdout().flush()?;
            continue;
        }

        for key in line.trim().chars() {
            match key.to_ascii_lowercase() {
                'w' => engine.move_cursor(0, 1),
                's' => engine.move_cursor(0, -1),
                'a' => engine.move_cursor(-1, 0),
                'd' => engine.move_cursor(1, 0),
                'f' => {
                    if let PlayerTurn::Rejected { streak } = engine.fire_at_cursor()? {
                        println!("{}", invalid_move_message(streak));
                    }
                    if engine.is_game_over() {
                        break;
                    }
                }
                'q' => return Ok(()),
                _ => {}
            }
        }
        redraw(&mut engine);

        if let Some(winner) = engine.winner() {
            println!("Game over! {:?} wins.", winner);
            println!("Press enter to start a new game or q to quit");
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn simulate(json: bool) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    let mut gunner = ScanAi::new();
    let mut turns = 0;
    let mut sunk = Vec::new();

    while !engine.is_game_over() {
        let Some((row, col)) = gunner.select_target(engine.board(Side::Computer)) else {
            break;
        };
        engine.play_turn(row, col)?;
        turns += 1;
        sunk.extend(engine.take_events().iter());
    }

    let report = SimulationReport {
        turns,
        winner: engine.winner(),
        sunk,
    };
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", render_view(&engine));
        for event in &report.sunk {
            println!("{}", sunk_message(event));
        }
        match report.winner {
            Some(side) => println!("{:?} wins after {} turns", side, report.turns),
            None => println!("No winner after {} turns", report.turns),
        }
    }
    Ok(())
}
