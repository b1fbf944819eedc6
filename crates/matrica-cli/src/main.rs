//! Interactive console front-end for the Matrica calculator.
//!
//! A line-oriented REPL: each iteration reads one command, gathers its
//! operands through validation loops, runs the corresponding operation from
//! `matrica-core`/`matrica-gauss`, and prints the result. All numerical work
//! happens in the library crates; this binary is input/output glue.

use std::io;

mod commands;
mod input;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    while commands::run_command(&mut input) {}
}
