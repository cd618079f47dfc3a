use {
    crate::jumps::JumpTable,
    derive_more::{Display, From},
    std::io::Write,
    syntax::{Instruction, Program},
};

pub const TAPE_LEN: usize = 30_000;

#[derive(Debug, Display, From)]
pub enum RuntimeError {
    #[display("unknown instruction `{instruction}` at position {position}")]
    UnknownInstruction { instruction: char, position: usize },
    #[display("`,` at position {position}: input is not implemented")]
    UnsupportedInput { position: usize },
    #[display("failed to write output: {_0}")]
    #[from]
    Output(std::io::Error),
}

impl std::error::Error for RuntimeError {}

pub fn run(
    program: &Program,
    jumps: &JumpTable,
    output: &mut impl Write,
) -> Result<(), RuntimeError> {
    run_with_tape_len(program, jumps, TAPE_LEN, output)
}

/// Dispatch loop over `(pc, ptr)` starting at `(0, 0)`.
///
/// Terminates successfully the instant `pc` runs past the program or `ptr`
/// leaves the tape in either direction; walking off the tape is not an error,
/// the program just ends with whatever output it has produced so far. `ptr` is
/// signed so the excursion to -1 is observable instead of wrapping.
pub fn run_with_tape_len(
    program: &Program,
    jumps: &JumpTable,
    tape_len: usize,
    output: &mut impl Write,
) -> Result<(), RuntimeError> {
    let mut tape = vec![0u8; tape_len];
    let mut pc = 0;
    let mut ptr: isize = 0;
    while pc < program.len() && (0..tape_len as isize).contains(&ptr) {
        let c = program.instructions[pc];
        let instruction = Instruction::try_from(c).map_err(|instruction| {
            RuntimeError::UnknownInstruction {
                instruction,
                position: pc,
            }
        })?;
        let cell = &mut tape[ptr as usize];
        match instruction {
            Instruction::Increment => *cell = cell.wrapping_add(1),
            Instruction::Decrement => *cell = cell.wrapping_sub(1),
            Instruction::MoveRight => ptr += 1,
            Instruction::MoveLeft => ptr -= 1,
            // Jump to the matching bracket; the pc increment below then lands
            // just past the loop (for `[`) or back inside it (for `]`).
            Instruction::LoopOpen if *cell == 0 => pc = jumps.matching_close(pc),
            Instruction::LoopClose if *cell != 0 => pc = jumps.matching_open(pc),
            Instruction::LoopOpen | Instruction::LoopClose => {}
            Instruction::Output => output.write_all(&[*cell])?,
            Instruction::Input => {
                return Err(RuntimeError::UnsupportedInput { position: pc })
            }
        }
        pc += 1;
    }
    Ok(())
}
