// Crossword – A crossword game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod direction;
mod template;
mod grid;

use std::{fs, process::ExitCode, ffi::OsString};
use clap::Parser;
use template::Template;
use direction::Direction;

#[derive(Parser)]
#[command(name = "build-template")]
struct Cli {
    #[arg(required = true, value_name = "TEMPLATE")]
    templates: Vec<OsString>,
    #[arg(short = 'H', long)]
    human_readable: bool,
    #[arg(long)]
    allow_defects: bool,
}

fn print_grid(grid: &grid::Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            print!("{}", grid.at(x, y).unwrap_or('#'));
        }

        println!();
    }
}

fn print_clues(template: &Template, direction: Direction) {
    let mut words = template.words.iter()
        .filter(|word| word.direction == direction)
        .collect::<Vec<_>>();

    if words.is_empty() {
        return;
    }

    words.sort_by_key(|word| word.number);

    println!("\n{}\n", if direction == Direction::Across {
        "Across"
    } else {
        "Down"
    });

    for word in words.into_iter() {
        println!("{:>3}. {} ({})", word.number, word.clue, word.text);
    }
}

fn print_human_readable(template: &Template) -> Result<(), grid::Error> {
    let grid = grid::Grid::new(
        template.words.iter(),
        template.columns,
        template.rows,
    )?;

    print_grid(&grid);
    print_clues(template, Direction::Across);
    print_clues(template, Direction::Down);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    for filename in cli.templates.iter() {
        let template_string = match fs::read_to_string(filename) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        };

        let template = match template_string.parse::<Template>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        };

        let defects = template.validate();

        for defect in defects.iter() {
            eprintln!("{}: {}", filename.to_string_lossy(), defect);
        }

        if !defects.is_empty() && !cli.allow_defects {
            return ExitCode::FAILURE;
        }

        if cli.human_readable {
            if let Err(e) = print_human_readable(&template) {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            }
        } else {
            match serde_json::to_string(&template) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("{}: {}", filename.to_string_lossy(), e);
                    return ExitCode::FAILURE;
                },
            }
        }
    }

    ExitCode::SUCCESS
}
