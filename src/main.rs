//! The caffeine chess engine.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::cmp::min;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand, crate_version};
use log::info;
use simplelog::{WriteLogger, LevelFilter};
use chess::{bitboard, variations, Position};
use caffeine::config::Config;
use caffeine::engine::{InfoWriter, Placeholder, Search, MAX_PLY};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> Result<(), Error> {
    let matches =
        App::new("Caffeine")
            .version(crate_version!())
            .author("Mike Leany")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Reads settings from the given file instead of ~/.caffeine/config.yaml"))
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .help("Sets the log file if logging is turned on [default: caffeine.log]"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .help("Sets the log level if logging is turned on [default: info]"))
            .subcommand(SubCommand::with_name("counts")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth. Defaults to the standard starting position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .multiple(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .subcommand(SubCommand::with_name("search")
                .about("Searches a position to a fixed depth and prints the best move. \
                        Defaults to the\nstandard starting position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .help("Depth to search the position, in plies"))
                .arg(Arg::with_name("fen")
                    .long("fen")
                    .short("f")
                    .value_name("FEN_STRING")
                    .takes_value(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)"))
                .arg(Arg::with_name("moves")
                    .value_name("MOVE")
                    .multiple(true)
                    .help("Moves to play from the position before searching, such as e2e4")))
            .get_matches();

    let config = Config::load(matches.value_of_os("config").map(Path::new))?;

    let log_file = matches.value_of_os("log-file")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.log_file.clone());
    let log_level = match matches.value_of("log-level").unwrap_or(config.log_level.as_str()) {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        level => return Err(Error(format!("{}: invalid log level", level))),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            simplelog::Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, simplelog::Config::default(), io::sink())
    };

    bitboard::init();

    match matches.subcommand() {
        ("counts", Some(matches)) => counts(matches)?,
        ("search", Some(matches)) => search(matches, &config)?,
        _ => unreachable!(),
    }

    Ok(())
}

/// Prints the variation counts for each root move of every requested position
fn counts(matches: &ArgMatches) -> Result<(), Error> {
    let depth = parse_depth(matches.value_of("depth").expect("INFALLIBLE"))?;

    println!();
    for fen in matches.values_of("fen").expect("INFALLIBLE") {
        let mut pos: Position = fen.parse().map_err(|err| {Error(format!("{}: {}", fen, err))})?;
        println!("{}", fen);
        let count = variations::print(&mut pos, depth);
        println!("Depth {} total:\t{:12}\n", depth, count);
    }

    Ok(())
}

/// Plays the requested moves and searches the resulting position
fn search(matches: &ArgMatches, config: &Config) -> Result<(), Error> {
    let depth = match matches.value_of("depth") {
        Some(depth) => parse_depth(depth)?,
        None => config.depth,
    };
    let fen = matches.value_of("fen").unwrap_or(START_FEN);
    let mut pos: Position = fen.parse().map_err(|err| {Error(format!("{}: {}", fen, err))})?;

    for mv in matches.values_of("moves").into_iter().flatten() {
        pos.play(mv)?;
    }
    info!("position after setup:\n{}", pos.diagram());

    let room = min(pos.remaining_plies(), MAX_PLY);
    if depth > room {
        return Err(Error(format!("depth {} is too deep after {} moves; the limit is {}",
            depth, pos.ply(), room)));
    }

    let mut out = InfoWriter::new(io::stdout());
    let thinking = Search::new(Placeholder).run(&mut pos, depth, &mut out);

    match thinking.best_move() {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove (none)"),
    }

    Ok(())
}

fn parse_depth(depth: &str) -> Result<usize, Error> {
    depth.parse().map_err(|_| {Error("depth must be numeric".to_owned())})
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<caffeine::config::Error> for Error {
    fn from(err: caffeine::config::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<chess::Error> for Error {
    fn from(err: chess::Error) -> Self {
        Error(err.to_string())
    }
}
