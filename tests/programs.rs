use {
    engine::{vm, JumpTable},
    rstest::rstest,
    rstest_reuse::{apply, template},
    std::path::PathBuf,
    syntax::Program,
};

#[template]
#[rstest]
fn programs(#[files("test_programs/*.bf")] path: PathBuf) {}

#[apply(programs)]
fn execute(path: PathBuf) {
    let example = ExampleProgram::from(path);
    let jumps = JumpTable::build(&example.program).unwrap();
    let mut output = Vec::new();
    vm::run(&example.program, &jumps, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), example.expected_output);
}

struct ExampleProgram {
    program: Program,
    expected_output: String,
}

impl From<PathBuf> for ExampleProgram {
    fn from(mut path: PathBuf) -> Self {
        let source = std::fs::read_to_string(&path).unwrap();
        let program = Program::from(&*source);

        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        ExampleProgram {
            program,
            expected_output,
        }
    }
}
