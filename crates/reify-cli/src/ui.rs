//! Styled line output. Colors are disabled when stdout isn't a TTY.

use colored::Colorize;

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

pub fn warning(msg: &str) {
    eprintln!("{}", msg.yellow());
}

pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn dim_err(msg: &str) {
    eprintln!("{}", msg.dimmed());
}
