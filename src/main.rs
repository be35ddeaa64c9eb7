//! Главный исполняемый файл RustLex

use rustlex::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::init();
    cli.execute()
}
