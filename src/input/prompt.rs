//! Interactive prompts for the console driver.
//!
//! Each prompt asks, validates the answer against a closed range, and asks
//! again until the answer is accepted. Running out of input is an error.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::application::{parse_generations, parse_seed};
use crate::domain::{RuleTable, Seed};

/// Ask for an integer until `validate` accepts it
pub fn prompt_until<R, W, T, E>(
    input: &mut R,
    output: &mut W,
    message: &str,
    validate: impl Fn(i64) -> Result<T, E>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    E: Display,
{
    let mut line = String::new();
    loop {
        writeln!(output, "{message}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }

        let answer = line.trim();
        match answer.parse::<i64>() {
            Ok(value) => match validate(value) {
                Ok(accepted) => return Ok(accepted),
                Err(err) => log::warn!("rejected {value}: {err}"),
            },
            Err(err) => log::warn!("rejected {answer:?}: {err}"),
        }
    }
}

pub fn prompt_rule<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<RuleTable> {
    prompt_until(input, output, "Enter the rule # (0-2186): ", RuleTable::decode)
}

pub fn prompt_generations<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<u32> {
    prompt_until(input, output, "Enter the number of generations (1-49): ", parse_generations)
}

pub fn prompt_seed<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Seed> {
    prompt_until(
        input,
        output,
        "Enter the value (1 or 2) for the initial active cell: ",
        parse_seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_rule_accepted_first_time() {
        let mut input = Cursor::new("30\n");
        let mut output = Vec::new();
        let table = prompt_rule(&mut input, &mut output).unwrap();
        assert_eq!(table.code(), 30);
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_rule_reprompts_until_valid() {
        let mut input = Cursor::new("-1\n2187\nabc\n\n 2186 \n");
        let mut output = Vec::new();
        let table = prompt_rule(&mut input, &mut output).unwrap();
        assert_eq!(table.code(), 2186);
        let asked = String::from_utf8(output).unwrap();
        assert_eq!(asked.matches("Enter the rule #").count(), 5);
    }

    #[test]
    fn test_generations_bounds() {
        let mut input = Cursor::new("0\n50\n49\n");
        let mut output = Vec::new();
        assert_eq!(prompt_generations(&mut input, &mut output).unwrap(), 49);
    }

    #[test]
    fn test_seed_reprompts() {
        let mut input = Cursor::new("0\n3\n2\n");
        let mut output = Vec::new();
        assert_eq!(prompt_seed(&mut input, &mut output).unwrap(), Seed::High);
    }

    #[test]
    fn test_eof_is_error() {
        let mut input = Cursor::new("9999\n");
        let mut output = Vec::new();
        let err = prompt_rule(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_shared_reader_across_prompts() {
        let mut input = Cursor::new("1\n2\n1\n");
        let mut output = Vec::new();
        let table = prompt_rule(&mut input, &mut output).unwrap();
        let generations = prompt_generations(&mut input, &mut output).unwrap();
        let seed = prompt_seed(&mut input, &mut output).unwrap();
        assert_eq!((table.code(), generations, seed), (1, 2, Seed::Low));
    }
}
