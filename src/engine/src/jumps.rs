use {
    derive_more::Display,
    std::collections::HashMap,
    syntax::{Instruction, Program},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BuildError {
    /// A `[` was never closed. Reports the most deeply nested unmatched
    /// opener, i.e. the last one still pending when the scan ended.
    #[display("unmatched `[` at position {position}")]
    UnmatchedOpen { position: usize },
    /// A `]` appeared with no opener left to match it.
    #[display("unmatched `]` at position {position}")]
    UnmatchedClose { position: usize },
}

impl std::error::Error for BuildError {}

/// Bidirectional index between matching bracket positions: `forward` maps each
/// `[` to its `]`, `backward` the reverse. The two maps are exact inverses and
/// only bracket positions appear in them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    forward: HashMap<usize, usize>,
    backward: HashMap<usize, usize>,
}

impl JumpTable {
    /// Single left-to-right scan with an explicit stack of pending `[`
    /// positions, so nesting depth is bounded only by memory.
    pub fn build(program: &Program) -> Result<Self, BuildError> {
        let mut table = JumpTable::default();
        let mut pending = Vec::new();
        for (position, &c) in program.instructions.iter().enumerate() {
            match Instruction::try_from(c) {
                Ok(Instruction::LoopOpen) => pending.push(position),
                Ok(Instruction::LoopClose) => {
                    let open = pending
                        .pop()
                        .ok_or(BuildError::UnmatchedClose { position })?;
                    table.forward.insert(open, position);
                    table.backward.insert(position, open);
                }
                _ => {}
            }
        }
        match pending.last() {
            Some(&position) => Err(BuildError::UnmatchedOpen { position }),
            None => Ok(table),
        }
    }

    /// Position of the `]` matching the `[` at `pc`.
    ///
    /// Panics if `pc` has no entry: `build` records every bracket, so a miss
    /// means the table was built for a different program.
    pub fn matching_close(&self, pc: usize) -> usize {
        *self
            .forward
            .get(&pc)
            .unwrap_or_else(|| panic!("no forward jump recorded for position {pc}"))
    }

    /// Position of the `[` matching the `]` at `pc`. Panics on a miss, as
    /// [`Self::matching_close`] does.
    pub fn matching_open(&self, pc: usize) -> usize {
        *self
            .backward
            .get(&pc)
            .unwrap_or_else(|| panic!("no backward jump recorded for position {pc}"))
    }
}
