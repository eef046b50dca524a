use std::{
    fs::File,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use blokus::{BoardGrid, PieceFactory, Player, PlayerId, ShapeCatalog, TurnEngine};

fn main() -> io::Result<()> {
    let matches = App::new("Blokus")
        .version("0.1")
        .about("Console Blokus-style block placement game.")
        .arg(
            Arg::with_name("shapes")
                .short("s")
                .long("shapes")
                .value_name("FILE")
                .help("shape catalog file; defaults to the built-in 21-piece set")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("players")
                .short("p")
                .long("players")
                .value_name("N")
                .help("number of players (1-8)")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::with_name("rounds")
                .short("r")
                .long("rounds")
                .value_name("N")
                .help("number of full rounds to play")
                .takes_value(true)
                .default_value("1"),
        )
        .get_matches();

    let catalog = match matches.value_of("shapes") {
        Some(path) => load_catalog(path),
        None => ShapeCatalog::standard(),
    };
    let num_players = parse_count(matches.value_of("players").unwrap(), 1, 8, "players");
    let rounds = parse_count(matches.value_of("rounds").unwrap(), 1, 1000, "rounds");

    let mut engine = TurnEngine::new(BoardGrid::default());
    let mut factory = PieceFactory::new(&catalog);
    for id in 1..=num_players {
        // Ids start at 1; 0 marks an empty board cell.
        let mut player = Player::new(PlayerId::new(id as u8).unwrap());
        player.init_pieces(&mut factory).unwrap();
        engine.add_player(player).unwrap();
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    println!("Blokus: {} players, {} pieces each.", num_players, catalog.num_types());
    println!("Type help or ? for commands.");
    for round in 1..=rounds {
        if engine.is_end() {
            break;
        }
        println!();
        println!("=== Round {} ===", round);
        for _ in 0..engine.num_players() {
            take_turn(&mut engine, &mut input, &mut rng)?;
        }
    }
    println!();
    println!("Final board:");
    show_board(engine.board());
    Ok(())
}

/// Open and parse the catalog file, exiting with a message on failure. A
/// bad catalog is fatal: there is no game without one.
fn load_catalog(path: &str) -> ShapeCatalog {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to open shape catalog {}: {}", path, err);
            process::exit(1);
        }
    };
    match ShapeCatalog::load(file) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load shape catalog {}: {}", path, err);
            process::exit(1);
        }
    }
}

/// Parse a numeric argument, exiting with a message when out of range.
fn parse_count(value: &str, min: usize, max: usize, name: &str) -> usize {
    match value.parse() {
        Ok(n) if n >= min && n <= max => n,
        _ => {
            eprintln!("{} must be a number in range [{},{}], got {}", name, min, max, value);
            process::exit(1);
        }
    }
}

/// Prompt the current player until one placement succeeds (or they pass).
fn take_turn(
    engine: &mut TurnEngine,
    input: &mut InputReader<impl BufRead>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    enum Command {
        Place(usize, i32, i32),
        Rotate(usize),
        Pieces,
        Board,
        Random,
        Pass,
        Help,
    }
    /// Matchers for commands with args. The placement keyword is optional,
    /// so a bare `slot x y` triple works too.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:place|put)\s+)?
        (?P<slot>[0-9]+)\s+
        (?:(?:at|on|to|->|=>)\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .unwrap()
    });
    static ROTATE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:rotate|rot|turn)\s+(?P<slot>[0-9]+)$").unwrap());

    println!();
    println!("Player {} to place.", engine.current().id());
    show_board(engine.board());
    loop {
        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "pieces" | "list" => Some(Command::Pieces),
            "board" | "show" => Some(Command::Board),
            "random" | "rand" => Some(Command::Random),
            "pass" | "skip" => Some(Command::Pass),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let slot = match captures.name("slot").unwrap().as_str().parse() {
                        Ok(slot) => slot,
                        Err(_) => {
                            println!("invalid slot: {}", captures.name("slot").unwrap().as_str());
                            return None;
                        }
                    };
                    let x = match captures.name("x").unwrap().as_str().parse() {
                        Ok(x) => x,
                        Err(_) => {
                            println!("invalid x: {}", captures.name("x").unwrap().as_str());
                            return None;
                        }
                    };
                    let y = match captures.name("y").unwrap().as_str().parse() {
                        Ok(y) => y,
                        Err(_) => {
                            println!("invalid y: {}", captures.name("y").unwrap().as_str());
                            return None;
                        }
                    };
                    Some(Command::Place(slot, x, y))
                } else if let Some(captures) = ROTATE.captures(other) {
                    match captures.name("slot").unwrap().as_str().parse() {
                        Ok(slot) => Some(Command::Rotate(slot)),
                        Err(_) => {
                            println!("invalid slot: {}", captures.name("slot").unwrap().as_str());
                            None
                        }
                    }
                } else {
                    println!("Invalid command {:?}. Use '?' for help.", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Place(slot, x, y) => match engine.try_place(slot, (x, y)) {
                Ok(true) => {
                    println!("Placed.");
                    break;
                }
                Ok(false) => {
                    println!("Invalid placement: off the board, overlapping, or already used.")
                }
                Err(err) => println!("{}", err),
            },
            Command::Rotate(slot) => match engine.rotate_current(slot) {
                Ok(()) => {
                    let player = engine.current();
                    println!("Slot {} is now:", slot);
                    println!("{}", player.piece(slot).unwrap().shape());
                }
                Err(err) => println!("{}", err),
            },
            Command::Pieces => show_pieces(engine.current()),
            Command::Board => show_board(engine.board()),
            Command::Random => {
                if random_placement(rng, engine) {
                    println!("Placed at random.");
                    break;
                } else {
                    println!("No random placement found.");
                }
            }
            Command::Pass => {
                println!("Passed.");
                engine.pass();
                break;
            }
            Command::Help => {
                println!(
                    "Available Commands:
    place <slot> <x> <y>  place the piece from the given slot with its
        bounding box anchored at (x, y). \"place\" may be omitted.
    rotate <slot>         turn the piece in the given slot a quarter turn.
    pieces                list your unplaced pieces.
    board                 show the board.
    random                place a random piece at a random spot.
    pass                  forfeit this turn."
                );
            }
        }
    }
    Ok(())
}

/// Place a random unused piece at a random position and rotation for the
/// current player. Gives up after a bounded number of attempts so a full
/// board cannot hang the loop.
fn random_placement(rng: &mut impl Rng, engine: &mut TurnEngine) -> bool {
    const ATTEMPTS: usize = 2000;
    let width = engine.board().width() as i32;
    let height = engine.board().height() as i32;
    let slots: Vec<usize> = engine.current().unused_slots().collect();
    if slots.is_empty() {
        return false;
    }
    for _ in 0..ATTEMPTS {
        let slot = slots[rng.gen_range(0, slots.len())];
        for _ in 0..rng.gen_range(0, 4) {
            engine.rotate_current(slot).unwrap();
        }
        let origin = (rng.gen_range(0, width), rng.gen_range(0, height));
        if engine.try_place(slot, origin).unwrap() {
            return true;
        }
    }
    false
}

/// List the player's unplaced pieces with their patterns.
fn show_pieces(player: &Player) {
    let mut any = false;
    for slot in player.unused_slots() {
        let piece = player.piece(slot).unwrap();
        println!("slot {} (piece {}):", slot, piece.id());
        println!("{}", piece.shape());
        any = true;
    }
    if !any {
        println!("No pieces left.");
    }
}

/// Show the board by printing the grid, one player digit per covered cell.
fn show_board(board: &BoardGrid) {
    print!("   ");
    for x in 0..board.width() {
        print!("{:^3}", x);
    }
    println!();
    for (y, row) in board.iter_rows().enumerate() {
        print!("{:>2} ", y);
        for cell in row {
            match cell {
                Some(owner) => print!("{:^3}", owner),
                None => print!("{:^3}", '.'),
            }
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                process::exit(0);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
