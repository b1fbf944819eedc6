//! The calculator command loop and one handler per operation.

use std::io::BufRead;

use matrica_core::format::{fmt_value, render_matrix};
use matrica_core::Mat;
use matrica_gauss::{classify, determinant, rref};

use crate::input::{prompt_line, read_matrix, read_scalar};

/// Reads and executes one command. Returns `false` when the session should
/// end (the `exit` command or EOF).
pub fn run_command(input: &mut impl BufRead) -> bool {
    let Some(command) = read_command(input) else {
        return false;
    };
    match command.as_str() {
        "info" => show_info(),
        "trace" => cmd_trace(input),
        // "transponse" is the historical spelling of the command.
        "transponse" | "transpose" => cmd_transpose(input),
        "sum" => cmd_sum(input),
        "diff" => cmd_diff(input),
        "multmatrix" => cmd_mult_matrix(input),
        "multnum" => cmd_mult_number(input),
        "det" => cmd_determinant(input),
        "slae" => cmd_slae(input),
        "exit" => return false,
        _ => unreachable!("read_command only returns known commands"),
    }
    true
}

const COMMANDS: &[&str] = &[
    "info",
    "trace",
    "transponse",
    "transpose",
    "sum",
    "diff",
    "multmatrix",
    "multnum",
    "det",
    "slae",
    "exit",
];

fn read_command(input: &mut impl BufRead) -> Option<String> {
    loop {
        let line = prompt_line(input, "Choose command (to get list of commands enter 'info'): ")?;
        if COMMANDS.contains(&line.as_str()) {
            return Some(line);
        }
        println!("Input command was not recognized!");
    }
}

/// Prints the command reference.
fn show_info() {
    println!("Welcome to the matrix calculator. It supports following operations: ");
    println!("\tTo see info enter 'info';");
    println!("\tTo find trace enter 'trace';");
    println!("\tTo transpose matrix enter 'transponse';");
    println!("\tTo find sum of matrices enter 'sum';");
    println!("\tTo find difference of matrices enter 'diff';");
    println!("\tTo find matrices product enter 'multmatrix';");
    println!("\tTo find product of matrix and number enter 'multnum';");
    println!("\tTo find determinant enter 'det';");
    println!("\tTo get SLAE solution enter 'slae';");
    println!("\tTo exit program enter 'exit'.");
    println!("Remember that accuracy of calculations is no more than 4 digits after comma.");
}

fn cmd_trace(input: &mut impl BufRead) {
    println!("You need to enter one matrix.");
    let Some(matrix) = read_matrix(input, true) else {
        return;
    };
    // read_matrix enforced squareness, so trace cannot fail here.
    if let Ok(trace) = matrix.trace() {
        println!("The trace of matrix: {}.", fmt_value(trace));
    }
}

fn cmd_transpose(input: &mut impl BufRead) {
    println!("You need to enter one matrix.");
    let Some(matrix) = read_matrix(input, false) else {
        return;
    };
    println!("This matrix but transposed: ");
    print!("{}", render_matrix(&matrix.transpose()));
}

/// Reads two matrices, re-prompting as a pair until `compatible` accepts
/// their shapes.
fn read_pair(
    input: &mut impl BufRead,
    compatible: impl Fn(&Mat, &Mat) -> bool,
    mismatch: &str,
) -> Option<(Mat, Mat)> {
    loop {
        let first = read_matrix(input, false)?;
        let second = read_matrix(input, false)?;
        if compatible(&first, &second) {
            return Some((first, second));
        }
        println!("{mismatch}");
    }
}

fn same_shape(a: &Mat, b: &Mat) -> bool {
    a.num_rows() == b.num_rows() && a.num_cols() == b.num_cols()
}

fn cmd_sum(input: &mut impl BufRead) {
    println!("You need to enter 2 matrices.");
    let Some((first, second)) = read_pair(
        input,
        same_shape,
        "Matrices have different sizes! Repeat matrices input.",
    ) else {
        return;
    };
    println!("The sum of matrices: ");
    print!("{}", render_matrix(&(&first + &second)));
}

fn cmd_diff(input: &mut impl BufRead) {
    println!("You need to enter 2 matrices (former - minuend, latter - subtrahend).");
    let Some((first, second)) = read_pair(
        input,
        same_shape,
        "Matrices have different sizes! Repeat matrices input.",
    ) else {
        return;
    };
    println!("Matrices difference: ");
    print!("{}", render_matrix(&(&first - &second)));
}

fn cmd_mult_matrix(input: &mut impl BufRead) {
    println!("You need to enter 2 matrices.");
    let Some((first, second)) = read_pair(
        input,
        |a, b| a.num_cols() == b.num_rows(),
        "Sizes of matrices are such that they can not be multiplied! Repeat matrices input.",
    ) else {
        return;
    };
    if let Ok(product) = first.mm(&second) {
        println!("Product of two matrices: ");
        print!("{}", render_matrix(&product));
    }
}

fn cmd_mult_number(input: &mut impl BufRead) {
    println!("You need to enter matrix and after that number.");
    let Some(matrix) = read_matrix(input, false) else {
        return;
    };
    let Some(multiplier) = read_scalar(input) else {
        return;
    };
    println!("Product of matrix and number: ");
    print!("{}", render_matrix(&matrix.scale(multiplier)));
}

fn cmd_determinant(input: &mut impl BufRead) {
    println!("You need to enter matrix.");
    let Some(matrix) = read_matrix(input, true) else {
        return;
    };
    if let Ok(det) = determinant(&matrix) {
        println!("The determinant of matrix: {}.", fmt_value(det));
    }
}

fn cmd_slae(input: &mut impl BufRead) {
    println!("You need to enter SLAE as matrix.");
    let Some(matrix) = read_matrix(input, false) else {
        return;
    };
    let reduced = rref(&matrix);
    println!("SLAE after reduction:");
    print!("{}", render_matrix(&reduced));
    println!("Solution of SLAE: ");
    print!("{}", classify(&reduced));
}
