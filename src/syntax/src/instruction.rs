use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Instruction {
    // cell arithmetic
    #[display("+")]
    Increment,
    #[display("-")]
    Decrement,
    // pointer movement
    #[display(">")]
    MoveRight,
    #[display("<")]
    MoveLeft,
    // loops
    #[display("[")]
    LoopOpen,
    #[display("]")]
    LoopClose,
    // I/O
    #[display(".")]
    Output,
    #[display(",")]
    Input,
}

impl TryFrom<char> for Instruction {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        Ok(match c {
            '+' => Instruction::Increment,
            '-' => Instruction::Decrement,
            '>' => Instruction::MoveRight,
            '<' => Instruction::MoveLeft,
            '[' => Instruction::LoopOpen,
            ']' => Instruction::LoopClose,
            '.' => Instruction::Output,
            ',' => Instruction::Input,
            _ => return Err(c),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_round_trips_through_display() {
        for c in "+-><[].,".chars() {
            let instruction = Instruction::try_from(c).unwrap();
            assert_eq!(instruction.to_string(), c.to_string());
        }
    }

    #[test]
    fn non_alphabet_characters_are_rejected() {
        assert_eq!(Instruction::try_from('a'), Err('a'));
        assert_eq!(Instruction::try_from('\t'), Err('\t'));
        assert_eq!(Instruction::try_from(';'), Err(';'));
    }
}
