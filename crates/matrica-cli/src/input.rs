//! Interactive matrix input: keyboard entry, random generation, file loading.
//!
//! Every reader loops until it gets well-formed input, so the numerical core
//! only ever sees matrices that satisfy its dimension and magnitude bounds.
//! End of input (EOF) is reported as `None` and unwinds to the command loop.

use std::fs;
use std::io::{self, BufRead, Write};

use rand::thread_rng;

use matrica_core::parse::parse_entry;
use matrica_core::{matrix_from_str, Mat, MAX_DIM, MAX_ENTRY};

/// Prints a prompt without a trailing newline and reads one line.
///
/// Returns `None` on EOF.
pub fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_owned()),
    }
}

/// How the user chose to supply a matrix.
enum FillMethod {
    Random,
    Keyboard,
    File(String),
}

fn read_fill_method(input: &mut impl BufRead) -> Option<FillMethod> {
    loop {
        let line = prompt_line(
            input,
            "Method of filling matrix, random/keyboard/file filename.txt: ",
        )?;
        match line.as_str() {
            "random" => return Some(FillMethod::Random),
            "keyboard" => return Some(FillMethod::Keyboard),
            other => {
                if let Some(name) = other.strip_prefix("file ") {
                    if !name.ends_with(".txt") {
                        println!("Chosen file is not .txt!");
                    } else {
                        return Some(FillMethod::File(name.to_owned()));
                    }
                } else {
                    println!("Input type was not recognized!");
                }
            }
        }
    }
}

/// Reads a matrix size, re-prompting until both dimensions are in `[1; 20]`
/// (and equal, when a square matrix is required).
fn read_size(input: &mut impl BufRead, must_be_square: bool) -> Option<(usize, usize)> {
    loop {
        let line = prompt_line(
            input,
            "Enter amount of rows and columns (both values are integer and in [1; 20]): ",
        )?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            println!("There are not two numbers!");
            continue;
        }
        let Ok(rows) = tokens[0].parse::<usize>() else {
            println!("First number is not correct!");
            continue;
        };
        let Ok(cols) = tokens[1].parse::<usize>() else {
            println!("Second number is not correct!");
            continue;
        };
        if !(1..=MAX_DIM).contains(&rows) {
            println!("First number is not correct!");
            continue;
        }
        if !(1..=MAX_DIM).contains(&cols) {
            println!("Second number is not correct!");
            continue;
        }
        if must_be_square && rows != cols {
            println!("Matrix should be square!");
            continue;
        }
        return Some((rows, cols));
    }
}

/// Reads the `[lo, hi]` interval for random generation.
fn read_random_range(input: &mut impl BufRead) -> Option<(f64, f64)> {
    loop {
        let line = prompt_line(
            input,
            "Enter minimum and maximum value for random generating matrix \
             (both numbers must be at most 1e9 by absolute value): ",
        )?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            println!("There are not two numbers!");
            continue;
        }
        let (Some(lo), Some(hi)) = (parse_bounded(tokens[0]), parse_bounded(tokens[1])) else {
            println!("One of the numbers is not correct!");
            continue;
        };
        if lo > hi {
            println!("Lower bound is more than upper bound!");
            continue;
        }
        return Some((lo, hi));
    }
}

/// Reads a scalar multiplier bounded by `MAX_ENTRY`.
pub fn read_scalar(input: &mut impl BufRead) -> Option<f64> {
    loop {
        let line = prompt_line(
            input,
            "Enter number (absolute value must be at most 1e9): ",
        )?;
        if let Some(value) = parse_bounded(&line) {
            return Some(value);
        }
        println!("Number is not correct!");
    }
}

fn parse_bounded(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;
    (value.is_finite() && value.abs() <= MAX_ENTRY).then_some(value)
}

/// Reads matrix rows from the keyboard; any malformed row restarts the
/// whole matrix, matching the all-or-nothing behavior of the size prompt.
fn read_rows(input: &mut impl BufRead, rows: usize, cols: usize) -> Option<Mat> {
    'retry: loop {
        println!("Enter matrix row by row (according to matrix size), separate numbers by space.");
        let mut matrix = Mat::zeros(rows, cols);
        for row in 0..rows {
            let Some(line) = prompt_line(input, "") else {
                return None;
            };
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != cols {
                println!("Matrix reading was finished because of incorrect input. Input restarted.");
                continue 'retry;
            }
            for (col, token) in tokens.iter().enumerate() {
                match parse_entry(token, row) {
                    Ok(value) => matrix[(row, col)] = value,
                    Err(_) => {
                        println!(
                            "Matrix reading was finished because of incorrect input. Input restarted."
                        );
                        continue 'retry;
                    }
                }
            }
        }
        return Some(matrix);
    }
}

fn read_from_file(name: &str, must_be_square: bool) -> Option<Mat> {
    let Ok(text) = fs::read_to_string(name) else {
        println!("Chosen file does not exist!");
        return None;
    };
    match matrix_from_str(&text, must_be_square) {
        Ok(matrix) => {
            println!("The matrix was read from file successfully.");
            Some(matrix)
        }
        Err(err) => {
            println!("File content is not a valid matrix: {err}.");
            None
        }
    }
}

/// Reads one matrix, looping over input methods until one succeeds.
///
/// Returns `None` only on EOF.
pub fn read_matrix(input: &mut impl BufRead, must_be_square: bool) -> Option<Mat> {
    loop {
        match read_fill_method(input)? {
            FillMethod::Random => {
                let (rows, cols) = read_size(input, must_be_square)?;
                let (lo, hi) = read_random_range(input)?;
                let matrix = Mat::random(rows, cols, lo, hi, &mut thread_rng());
                println!("The matrix was generated successfully: ");
                print!("{}", matrica_core::format::render_matrix(&matrix));
                return Some(matrix);
            }
            FillMethod::Keyboard => {
                let (rows, cols) = read_size(input, must_be_square)?;
                let matrix = read_rows(input, rows, cols)?;
                println!("The matrix was entered successfully.");
                return Some(matrix);
            }
            FillMethod::File(name) => {
                if let Some(matrix) = read_from_file(&name, must_be_square) {
                    return Some(matrix);
                }
                // Fall through and re-prompt for an input method.
            }
        }
    }
}
