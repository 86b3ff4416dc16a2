use std::process::ExitCode;

fn main() -> ExitCode {
    argmap_cli::run()
}
