//! CLI five-in-a-row example for two players at one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use tabletop::{Cell, GameStatus, Gomoku, GomokuOptions, Placement, Player, Position};

fn main() {
    env_logger::init();
    println!("Five-in-a-row CLI example. Enter moves as 'row,col'; 'r' resigns, 'q' quits.");

    let mut game = Gomoku::new(GomokuOptions::default());

    loop {
        game.new_game();

        while let Some(player) = game.to_move() {
            print_board(&game, None);

            let input = prompt_line(&format!("{player} ({}): ", stone(player)));
            match input.as_str() {
                "q" | "quit" => return,
                "r" | "resign" => {
                    if let Ok(winner) = game.resign(player) {
                        println!("{player} resigns. {winner} wins.");
                    }
                    continue;
                }
                _ => {}
            }

            let Some((row, col)) = parse_move(&input) else {
                println!("Expected format: row,col");
                continue;
            };

            match game.place(row, col, player) {
                Ok(Placement::Win(line)) => {
                    print_board(&game, Some((line.start, line.end)));
                    println!("{player} wins with {} in a row.", line.len);
                }
                Ok(Placement::Draw) => {
                    print_board(&game, None);
                    println!("The board is full. Draw.");
                }
                Ok(Placement::Continue { .. }) => {}
                Err(err) => println!("Move rejected: {err}"),
            }
        }

        if game.status() == GameStatus::Draw {
            println!("No winner this time.");
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn parse_move(input: &str) -> Option<(usize, usize)> {
    let (row, col) = input.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

const fn stone(player: Player) -> &'static str {
    match player {
        Player::A => "X",
        Player::B => "O",
    }
}

fn print_board(game: &Gomoku, highlight: Option<(Position, Position)>) {
    let board = game.board();
    let header: String = (0..board.size()).map(|col| format!("{col:>3}")).collect();
    println!("\n   {header}");

    for row in 0..board.size() {
        let mut line = format!("{row:>3}");
        for col in 0..board.size() {
            let here = Position::new(row, col);
            let marked = highlight.is_some_and(|(start, end)| here == start || here == end);
            let text = match board.get(row, col) {
                Some(Cell::Stone(player)) => stone(player),
                _ => ".",
            };
            if marked {
                line.push_str(&format!("  \u{1b}[1;33m{text}\u{1b}[0m"));
            } else {
                line.push_str(&format!("{text:>3}"));
            }
        }
        println!("{line}");
    }
    println!();
}
