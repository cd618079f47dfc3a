pub mod jumps;
pub mod vm;

pub use {
    jumps::{BuildError, JumpTable},
    vm::{run, run_with_tape_len, RuntimeError, TAPE_LEN},
};
