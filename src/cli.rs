use {
    crate::common::{debug_println, DEBUG},
    anyhow::Context,
    clap::Parser,
    engine::{vm, JumpTable},
    std::{path::PathBuf, sync::atomic::Ordering},
    syntax::Program,
};

#[derive(Debug, Parser)]
pub struct Cli {
    /// Input source file
    input_path: PathBuf,

    /// Tape length in cells
    #[arg(long, default_value_t = vm::TAPE_LEN)]
    tape_len: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let src = std::fs::read_to_string(&cli.input_path)
        .with_context(|| format!("failed to read {}", cli.input_path.display()))?;
    let program = Program::from(&*src);
    debug_println!("cleaned program: {program}");
    let jumps = JumpTable::build(&program)?;
    debug_println!("jump table: {jumps:#?}");
    let mut stdout = std::io::stdout().lock();
    vm::run_with_tape_len(&program, &jumps, cli.tape_len, &mut stdout)?;
    Ok(())
}
