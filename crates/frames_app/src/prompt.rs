use std::io::{self, BufRead, Write};

/// Asks a y/n question. Only `y` or `yes` (any case) counts as consent; EOF is a no.
pub fn confirm<R, W>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question} (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::confirm;
    use std::io::Cursor;

    fn ask(reply: &str) -> (bool, String) {
        let mut input = Cursor::new(reply.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = confirm("Start download?", &mut input, &mut output).unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers_are_accepted() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  y  \n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("yep\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn question_is_written_before_reading() {
        let (_, printed) = ask("n\n");
        assert_eq!(printed, "Start download? (y/n): ");
    }
}
