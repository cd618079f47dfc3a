pub mod instruction;
pub mod program;

pub use {instruction::Instruction, program::Program};

impl From<&str> for Program {
    /// Cleans raw source text into a program: `;` discards the rest of the
    /// line, and spaces and newlines are dropped. Anything else is kept as-is,
    /// including characters outside the instruction alphabet; those are only
    /// rejected when the dispatch loop reaches them.
    fn from(source: &str) -> Self {
        let mut instructions = Vec::with_capacity(source.len());
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            match c {
                ';' => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                ' ' | '\n' => {}
                _ => instructions.push(c),
            }
        }
        Program { instructions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_strips_comments_and_whitespace() {
        let source = "++ ; add two\n> +\n; full-line comment\n[-]";
        assert_eq!(Program::from(source).to_string(), "++>+[-]");
    }

    #[test]
    fn comment_at_end_of_input_needs_no_newline() {
        assert_eq!(Program::from("+. ; done").to_string(), "+.");
    }

    #[test]
    fn only_spaces_and_newlines_are_dropped() {
        // Tabs and carriage returns survive cleaning and are left for the
        // dispatch loop to reject.
        assert_eq!(
            Program::from("+\t+\r\n.").instructions,
            vec!['+', '\t', '+', '\r', '.']
        );
    }
}
