use std::error::Error;
use std::io;
use std::sync::Arc;

use board_game_traits::{Color, GameResult};
use clap::{Arg, ArgAction, Command as App};

use scrabble::command::Command;
use scrabble::dictionary::WordList;
use scrabble::game::Game;
use scrabble::player::Player;
use scrabble::position::SharedDictionary;
use scrabble::search::{CandidateRecording, MoveSearch, SearchSetting};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Scrabble")
        .version("0.1")
        .author("Morten Lohne")
        .arg(
            Arg::new("dictionary")
                .short('d')
                .long("dictionary")
                .env("DICTIONARY")
                .value_name("words.txt")
                .help("Word list with one word per line")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("SEED")
                .help("Seed for shuffling the bag")
                .num_args(1)
                .default_value("0")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("scrabble.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("aiVsAi")
                .long("ai-vs-ai")
                .help("Watch two automated players instead of playing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("maxSubsetSize")
                .long("max-subset-size")
                .env("MAX_SUBSET_SIZE")
                .help("Longest letter string the automated player tries")
                .num_args(1)
                .default_value("3")
                .value_parser(clap::value_parser!(u64).range(1..=7)),
        )
        .arg(
            Arg::new("lastWins")
                .long("last-wins")
                .help("Keep only the last square found for each letter string")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
            .apply()?
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
            .apply()?
    }

    let dictionary_path = matches
        .get_one::<String>("dictionary")
        .ok_or("missing --dictionary")?;
    let dictionary: SharedDictionary = Arc::new(WordList::from_file(dictionary_path)?);

    let seed = matches.get_one::<u64>("seed").copied().unwrap_or_default();
    let max_subset_size = matches.get_one::<u64>("maxSubsetSize").copied().unwrap_or(3) as usize;
    let recording = if matches.get_flag("lastWins") {
        CandidateRecording::LastWins
    } else {
        CandidateRecording::Distinct
    };
    let setting = SearchSetting::default()
        .max_subset_size(max_subset_size)
        .recording(recording);

    let white = if matches.get_flag("aiVsAi") {
        Player::automated(1, MoveSearch::new(setting.clone()))
    } else {
        Player::human(1)
    };
    let black = Player::automated(2, MoveSearch::new(setting));

    let game = Game::new(dictionary, [white, black], seed)?;
    play_game(game)?;
    Ok(())
}

fn print_position(game: &Game) {
    println!("\n{}", game.board());
    for color in [Color::White, Color::Black] {
        let player = game.player(color);
        println!(
            "Player {}: {} points{}",
            player.number(),
            player.points(),
            if player.is_active() { " (to move)" } else { "" }
        );
    }
    println!("Tiles in bag: {}", game.bag().len());
}

fn play_game(mut game: Game) -> io::Result<()> {
    let reader = io::stdin();
    let mut input = String::new();
    while game.game_result().is_none() {
        print_position(&game);
        let side_to_move = game.side_to_move();

        if game.player(side_to_move).is_automated() {
            match game.play_automated_turn() {
                Ok(Some(command)) => {
                    println!("Player {} played {}", game.player(side_to_move).number(), command)
                }
                Ok(None) => (),
                Err(err) => {
                    println!("Automated player failed: {}, passing", err);
                    game.process(Command::Pass).ok();
                }
            }
            continue;
        }

        println!("Your rack: {}", game.player(side_to_move).hand());
        println!("Enter play <LETTERS> <8H|H8>, pass, exchange <LETTERS>, shuffle, undo, redo or quit:");
        input.clear();
        if reader.read_line(&mut input)? == 0 {
            return Ok(());
        }
        match input.trim() {
            "quit" => return Ok(()),
            // Take back the opponent's reply as well
            "undo" => {
                if !(game.undo() && game.undo()) {
                    println!("Nothing to undo");
                }
            }
            "redo" => {
                if !(game.redo() && game.redo()) {
                    println!("Nothing to redo");
                }
            }
            line => match line.parse::<Command>() {
                Ok(command) => {
                    if let Err(err) = game.process(command) {
                        println!("{}, try again.", err);
                    }
                }
                Err(err) => println!("{}, try again.", err),
            },
        }
    }

    print_position(&game);
    match game.game_result() {
        Some(GameResult::WhiteWin) => println!("Player 1 won!"),
        Some(GameResult::BlackWin) => println!("Player 2 won!"),
        Some(GameResult::Draw) => println!("The game was drawn!"),
        None => (),
    }
    Ok(())
}
