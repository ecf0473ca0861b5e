//! CLI concentration example.
//!
//! A thin host adapter: text commands are translated into click points, and
//! the engine's scene is drawn as a colored text grid. All game rules live
//! in the library.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use concentration::{Color, Drawable, Game, GameEvent, GameOptions, Point, Scene, Stage};

fn main() {
    println!("Concentration CLI example (type 'q' to quit, 'r' to restart)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Failed to start game: {err}");
            return;
        }
    };

    loop {
        print_scene(&game.current_scene(), &options);

        let prompt = if game.stage() == Stage::ShowingResult {
            "Press Enter to continue: "
        } else {
            "Pick a card as 'row col': "
        };
        let input = prompt_line(prompt);

        let event = match input.as_str() {
            "q" | "quit" => return,
            "r" | "reset" => {
                if let Err(err) = game.reset() {
                    println!("Reset error: {err}");
                }
                continue;
            }
            _ if game.stage() == Stage::ShowingResult => {
                // Any click resolves the shown result.
                game.point_clicked(Point::new(0, 0))
            }
            text => match parse_cell(text, &options) {
                Some(point) => game.point_clicked(point),
                None => {
                    println!("Enter two numbers, e.g. '1 4'.");
                    continue;
                }
            },
        };

        if let Some(GameEvent::Won { message }) = event {
            print_scene(&game.current_scene(), &options);
            println!("{message}");

            if prompt_line("Play again? (y/n): ") != "y" {
                return;
            }
            if let Err(err) = game.reset() {
                println!("Reset error: {err}");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Parses "row col" into the center point of that grid cell.
fn parse_cell(input: &str, options: &GameOptions) -> Option<Point> {
    let mut parts = input.split_whitespace();
    let row: u8 = parts.next()?.parse().ok()?;
    let col: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row >= options.rows || col >= options.cols {
        return None;
    }
    Some(options.cell_center(row, col))
}

/// Maps a scene position back to its grid cell.
fn cell_of(pos: Point, options: &GameOptions) -> Option<(usize, usize)> {
    let col = (pos.x - options.edge_offset() - options.card_width() / 2)
        / (options.card_width() + options.spacing);
    let row = (pos.y - options.edge_offset() - options.card_height() / 2)
        / (options.card_height() + options.spacing);
    if (0..i32::from(options.rows)).contains(&row) && (0..i32::from(options.cols)).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

fn print_scene(scene: &Scene, options: &GameOptions) {
    let rows = options.rows as usize;
    let cols = options.cols as usize;
    let mut grid = vec![vec!["  . ".to_string(); cols]; rows];
    let mut banners = Vec::new();

    for item in &scene.items {
        match &item.drawable {
            Drawable::CardBack { .. } => {
                if let Some((row, col)) = cell_of(item.pos, options) {
                    grid[row][col] = " ## ".to_string();
                }
            }
            Drawable::CardFace { label, color, .. } => {
                if let Some((row, col)) = cell_of(item.pos, options) {
                    let padded = format!("{:>4}", short_label(label));
                    grid[row][col] = colorize(&padded, color_code(*color));
                }
            }
            Drawable::Banner { heading, caption, .. } => {
                banners.push((heading.clone(), caption.clone()));
            }
        }
    }

    print!("\n    ");
    for col in 0..cols {
        print!("{col:>4}");
    }
    println!();
    for (row, cells) in grid.iter().enumerate() {
        print!("{row:>4}");
        for cell in cells {
            print!("{cell}");
        }
        println!();
    }

    for (heading, caption) in banners {
        println!("\n{heading}");
        if let Some(caption) = caption {
            println!("{caption}");
        }
    }
    println!();
}

/// Shortens "Q of ♥" to "Q♥" so it fits a grid cell.
fn short_label(label: &str) -> String {
    label.replace(" of ", "")
}

fn color_code(color: Color) -> &'static str {
    match color {
        Color::Red => "31",
        Color::Black => "1",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
