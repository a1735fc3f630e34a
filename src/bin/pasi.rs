use anyhow::Result;

fn main() -> Result<()> {
    pasi::cli::main::main(std::env::args_os())
}
