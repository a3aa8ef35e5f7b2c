use std::io::{self, BufRead, Write};

use anyhow::Context;
use shoesize::predict::{AGE_RANGE, DEFAULT_AGE, DEFAULT_HEIGHT, HEIGHT_RANGE, predict_summary};
use shoesize::{CategoricalEncoder, PredictionInput, ShoeSizeError, load_models};
use tracing_subscriber::EnvFilter;

fn parse_line(line: &str) -> Option<PredictionInput> {
    let mut parts = line.split_whitespace();
    let age = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    let gender = parts.collect::<Vec<_>>().join(" ");
    Some(PredictionInput::new(age, height, gender))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("👟 Shoe Size Prediction");
    let (model, encoder) = match load_models() {
        Ok(handles) => handles,
        Err(err) => {
            let err = ShoeSizeError::from(err);
            eprintln!("❌ {}", err.user_message());
            std::process::exit(1);
        }
    };

    println!(
        "Age {}-{} years, height {}-{} cm, gender one of: {}",
        AGE_RANGE.start(),
        AGE_RANGE.end(),
        HEIGHT_RANGE.start(),
        HEIGHT_RANGE.end(),
        encoder.classes().join(", ")
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter <age> <height> <gender> (e.g. {DEFAULT_AGE} {DEFAULT_HEIGHT} ...) or 'exit': ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading input")?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let Some(input) = parse_line(line) else {
            println!("❌ Age and height must be whole numbers");
            continue;
        };
        match predict_summary(input, &*model, &*encoder) {
            Ok(prediction) => println!("✅ {prediction}"),
            Err(err) => println!("❌ {}", err.user_message()),
        }
    }

    Ok(())
}
