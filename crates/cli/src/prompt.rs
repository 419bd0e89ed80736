//! Numbered-list prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};

pub fn print_choices<W: Write>(out: &mut W, labels: &[String]) -> io::Result<()> {
    for (index, label) in labels.iter().enumerate() {
        writeln!(out, "{}. {label}", index + 1)?;
    }
    Ok(())
}

/// Asks for a 1-indexed choice until one in `1..=count` arrives. Returns the
/// zero-based index, or `None` when input ends first.
pub fn prompt_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    count: usize,
) -> io::Result<Option<usize>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(Some(choice - 1)),
            _ => writeln!(out, "Please choose a number from the list (1 to {count}).")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reprompts_until_a_valid_index() {
        let mut input = Cursor::new("zero\n0\n4\n2\n");
        let mut out = Vec::new();

        let choice = prompt_index(&mut input, &mut out, "Pick: ", 3).expect("io");
        assert_eq!(choice, Some(1));
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Pick: "));
        assert_eq!(text.matches("Please choose a number from the list (1 to 3).").count(), 3);
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut input = Cursor::new("9\n");
        let mut out = Vec::new();
        assert_eq!(prompt_index(&mut input, &mut out, "Pick: ", 2).expect("io"), None);
    }

    #[test]
    fn choices_are_one_indexed() {
        let mut out = Vec::new();
        print_choices(&mut out, &["Normal".to_string(), "Impossible".to_string()]).expect("io");
        assert_eq!(String::from_utf8(out).expect("utf8"), "1. Normal\n2. Impossible\n");
    }
}
