use std::io::Write;

use security_lines::io;
use security_lines::solution;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut input = io::stdin();
    let mut output = io::stdout();
    solution::run(&mut input, &mut output)?;
    output.flush()?;

    Ok(())
}
