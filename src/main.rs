use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use umbrella_prep::create_files;

/// Tolerance handed to the solver when the last argument is omitted.
const DEFAULT_TOLERANCE: f64 = 1e-12;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 6 || args.len() > 7 {
        bail!(
            "usage: umbrella-prep <data.csv> <save-dir> <win-size> <temperature> \
             <spring-constant N/m> <bin-width nm> [tolerance]"
        );
    }

    let data_path = PathBuf::from(&args[0]);
    let save_path = PathBuf::from(&args[1]);
    let win_size: usize = args[2].parse().context("win-size must be an integer")?;
    let temperature: f64 = args[3].parse().context("temperature must be a number")?;
    let spring_constant: f64 = args[4]
        .parse()
        .context("spring-constant must be a number (N/m)")?;
    let bin_width: f64 = args[5].parse().context("bin-width must be a number (nm)")?;
    let tolerance: f64 = match args.get(6) {
        Some(raw) => raw.parse().context("tolerance must be a number")?,
        None => DEFAULT_TOLERANCE,
    };

    let invocation = create_files(
        &data_path,
        &save_path,
        win_size,
        temperature,
        spring_constant,
        bin_width,
        tolerance,
    )?;

    // The command line is the product; print it for copy-paste in addition
    // to the persisted command.txt.
    println!("{invocation}");
    Ok(())
}
