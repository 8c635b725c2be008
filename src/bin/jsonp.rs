use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use json_presenter::config::{Args, Config};
use json_presenter::pipeline::{present, Outcome};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let input = args.input.clone();
    let output = args.output.clone();
    let config = Config::from_args(args)?;

    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    // Anything short of a full render leaves the document as it was.
    let rendered = match present(&text, &config) {
        Outcome::Rendered(page) => page,
        Outcome::NotJson | Outcome::Invalid | Outcome::TooLarge => text,
    };

    match &output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes()).context("writing stdout")?;
        }
    }

    Ok(())
}
