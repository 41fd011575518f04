mod allocator;

use desalt::cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::init()?.execute()
}
