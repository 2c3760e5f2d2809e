//! The `repl` subcommand: interactive language detection loop

use clap::Args;
use langid_model::LanguageModel;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReplOpts {
    /// Model file to load
    #[arg(short, long, default_value = "model/lid.176.bin")]
    pub model: PathBuf,

    /// Number of predictions to show per input
    #[arg(long, default_value = "1")]
    pub top_k: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(opts: ReplOpts) -> anyhow::Result<()> {
    if !opts.model.exists() {
        anyhow::bail!(
            "model file not found: {} (train one with `langid train` or point --model at an existing file)",
            opts.model.display()
        );
    }

    let name = opts
        .model
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());
    let model = LanguageModel::load(name, &opts.model)?;

    println!("--- Model loaded ---");
    println!("   path: {}", opts.model.display());
    println!("--------------------");
    println!("Type text to detect its language ('exit' or 'quit' ends the session):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match model.predict(input, opts.top_k) {
            Ok(predictions) if predictions.is_empty() => {
                println!("   -> no prediction");
            }
            Ok(predictions) => {
                let rendered: Vec<String> = predictions
                    .iter()
                    .map(|p| format!("{} ({:.4})", p.lang_code, p.confidence))
                    .collect();
                println!("   -> {}", rendered.join(", "));
            }
            Err(e) => {
                eprintln!("prediction failed: {e}");
                break;
            }
        }
    }

    println!("Exiting.");
    Ok(())
}
