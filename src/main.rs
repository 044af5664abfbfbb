//! Wordgrid CLI
//!
//! Interactive command-line interface for generating and playing
//! letter-grid puzzles.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use wordgrid::{
    find_all_words, generate_daily_puzzle, load_dictionary, validate_submission, Dictionary,
    Grid, Puzzle, GRID_CELLS, GRID_SIZE,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn load_dictionary_or_exit() -> Dictionary {
    match load_dictionary() {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("Failed to load dictionary: {}", err);
            std::process::exit(1);
        }
    }
}

fn new_puzzle(dictionary: &Dictionary) -> Puzzle {
    match generate_daily_puzzle(dictionary) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Puzzle generation failed: {}", err);
            std::process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    println!();
    println!("{}", puzzle.grid);
    println!();
    println!("{} words are hiding in this grid.", puzzle.words.len());
    println!();
}

/// Parse a 16-letter row-major grid description.
fn parse_grid(letters: &str) -> Result<Grid, String> {
    let chars: Vec<char> = letters.chars().collect();
    if chars.len() != GRID_CELLS || !chars.iter().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "expected exactly {} letters, got {:?}",
            GRID_CELLS, letters
        ));
    }
    let mut rows = [['A'; GRID_SIZE]; GRID_SIZE];
    for (i, &c) in chars.iter().enumerate() {
        rows[i / GRID_SIZE][i % GRID_SIZE] = c;
    }
    Ok(Grid::from_rows(rows))
}

fn run_interactive() {
    print_banner();

    println!("Loading dictionary...");
    let dictionary = load_dictionary_or_exit();
    println!("Loaded {} words.", dictionary.len());

    let mut puzzle = new_puzzle(&dictionary);
    let mut found: HashSet<String> = HashSet::new();
    let mut score: u32 = 0;
    print_puzzle(&puzzle);
    println!("Type words you find, or 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Final score: {}. Goodbye!", score);
                break;
            }
            "grid" | "g" => {
                print_puzzle(&puzzle);
            }
            "found" | "f" => {
                let mut words: Vec<&String> = found.iter().collect();
                words.sort();
                println!();
                println!(
                    "Found {} of {} words ({} points):",
                    found.len(),
                    puzzle.words.len(),
                    score
                );
                for word in words {
                    println!("  {}", word);
                }
                println!();
            }
            "reveal" | "r" => {
                println!();
                println!("All {} words:", puzzle.words.len());
                for word in puzzle.words.words() {
                    let marker = if found.contains(word) { "✓" } else { " " };
                    println!("  {} {}", marker, word);
                }
                println!();
                println!("You found {} of them for {} points.", found.len(), score);
                println!("Type 'new' for a fresh puzzle.");
                println!();
            }
            "new" | "n" => {
                puzzle = new_puzzle(&dictionary);
                found.clear();
                score = 0;
                print_puzzle(&puzzle);
            }
            guess => {
                let word = guess.to_uppercase();
                if found.contains(&word) {
                    println!("Already found {}.", word);
                    continue;
                }
                // Replay the discovering path through the full validator.
                match puzzle.words.path_for(&word) {
                    Some(path) => {
                        let submission =
                            validate_submission(&puzzle.grid, path, &word, &puzzle.words);
                        if submission.valid {
                            score += submission.score;
                            found.insert(word.clone());
                            println!(
                                "✓ {} (+{} points, total {})",
                                word, submission.score, score
                            );
                        } else if let Some(reason) = submission.reason {
                            println!("✗ {}: {}", word, reason);
                        }
                    }
                    None => {
                        println!("✗ {} is not in this puzzle.", word);
                    }
                }
            }
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "generate" | "gen" => {
                let dictionary = load_dictionary_or_exit();
                let puzzle = new_puzzle(&dictionary);

                println!("{}", puzzle.grid);
                println!();
                println!("{} words:", puzzle.words.len());
                for word in puzzle.words.words() {
                    println!("  {}", word);
                }
            }
            "solve" => {
                if args.len() < 3 {
                    eprintln!("Usage: wordgrid solve <LETTERS>");
                    std::process::exit(1);
                }

                let grid = match parse_grid(&args[2]) {
                    Ok(grid) => grid,
                    Err(err) => {
                        eprintln!("{}", err);
                        std::process::exit(1);
                    }
                };

                let dictionary = load_dictionary_or_exit();
                let words = find_all_words(&grid, &dictionary);

                println!("{}", grid);
                println!();
                println!("{} words:", words.len());
                for (word, path) in words.iter() {
                    let route: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                    println!("  {:<16} {}", word, route.join(" → "));
                }
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        run_interactive();
    }
}
