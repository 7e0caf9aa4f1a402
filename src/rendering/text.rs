//! Plain-text rendering of a run for the console driver.
//!
//! Every function returns a `String` (or lines of one) so the driver decides
//! where output goes.

use crate::application::Generation;
use crate::domain::{RuleTable, State, TABLE_LEN, World};

const LABEL_WIDTH: usize = 11;

/// Rule digits from sum 6 down to sum 0
pub fn rule_digits(table: &RuleTable) -> String {
    table
        .entries()
        .iter()
        .rev()
        .map(|s| char::from(b'0' + s.value()))
        .collect()
}

/// `The value array for rule #N is ...`
pub fn rule_summary(table: &RuleTable) -> String {
    format!("The value array for rule #{} is {}", table.code(), rule_digits(table))
}

/// Every (left, self, right) neighbourhood whose statuses add up to `sum`
pub fn neighbourhoods(sum: u8) -> Vec<[State; 3]> {
    let mut found = Vec::new();
    for left in State::ALL.iter().rev() {
        for centre in State::ALL.iter().rev() {
            for right in State::ALL.iter().rev() {
                if left.value() + centre.value() + right.value() == sum {
                    found.push([*left, *centre, *right]);
                }
            }
        }
    }
    found
}

/// Diagram of every neighbourhood composition per local sum, with the
/// status the rule assigns to each sum underneath
pub fn evolution_diagram(table: &RuleTable) -> String {
    let sums: Vec<u8> = (0..TABLE_LEN as u8).rev().collect();
    let columns: Vec<Vec<[State; 3]>> = sums.iter().map(|&s| neighbourhoods(s)).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(height + 3);
    lines.push("The evolution of all possible states are as follows:".to_string());

    let mut header = format!("{:<LABEL_WIDTH$}", "Local Sum:");
    for sum in &sums {
        header.push_str(&format!("  {sum}     "));
    }
    lines.push(header);

    for row in 0..height {
        let label = if row == 0 { "States:" } else { "" };
        let mut line = format!("{label:<LABEL_WIDTH$}");
        for column in &columns {
            match column.get(row) {
                Some([l, c, r]) => {
                    line.push_str(&format!("|{}{}{}|   ", l.symbol(), c.symbol(), r.symbol()))
                }
                None => line.push_str(&" ".repeat(8)),
            }
        }
        lines.push(line);
    }

    let mut status = format!("{:<width$}", "New Status:", width = LABEL_WIDTH + 1);
    for &sum in &sums {
        status.push_str(&format!("|{}|     ", table.next(sum).symbol()));
    }
    lines.push(status);

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row of glyphs followed by the generation's active sum
pub fn generation_row(generation: &Generation) -> String {
    let glyphs: String = generation.states.iter().map(|s| s.symbol()).collect();
    format!("{glyphs} {} ", generation.active_sum)
}

/// Line drawn under the last generation
pub fn separator(width: usize) -> String {
    "_".repeat(width)
}

fn digit(value: u32) -> char {
    char::from(b'0' + (value % 10) as u8)
}

/// Two rows of lifetime counts: tens digits then ones digits.
/// Counts below ten leave the tens row blank, zero counts leave both blank.
pub fn count_rows(world: &World) -> (String, String) {
    let tens = world
        .cells()
        .iter()
        .map(|c| if c.count >= 10 { digit(c.count / 10) } else { ' ' })
        .collect();
    let ones = world
        .cells()
        .iter()
        .map(|c| if c.count > 0 { digit(c.count) } else { ' ' })
        .collect();
    (tens, ones)
}
