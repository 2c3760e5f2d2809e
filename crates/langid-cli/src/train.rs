//! The `train` subcommand: CSV corpus -> trained and evaluated model

use clap::Args;
use langid_model::{
    evaluate, load_csv, train_supervised, train_test_split, write_lines, TrainParams,
};
use std::path::PathBuf;
use tracing::info;

/// Texts for the post-training prediction demo.
const SAMPLE_TEXTS: &[&str] = &[
    "人工智能是未来的方向。",
    "The best way to predict the future is to invent it.",
    "La vie est belle.",
];

#[derive(Args, Debug)]
pub struct TrainOpts {
    /// Labelled corpus CSV with `labels` and `text` columns
    #[arg(long, default_value = "data/lang_data.csv")]
    pub csv: PathBuf,

    /// Where to save the trained model
    #[arg(short, long, default_value = "model/lid_model.bin")]
    pub output: PathBuf,

    /// Fraction of the corpus held out for evaluation
    #[arg(long, default_value = "0.1")]
    pub test_size: f64,

    /// Shuffle seed for the train/test split
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Embedding dimension
    #[arg(long, default_value = "50")]
    pub dim: i32,

    /// Training epochs
    #[arg(long, default_value = "25")]
    pub epoch: i32,

    /// Learning rate
    #[arg(long, default_value = "0.1")]
    pub lr: f64,

    /// Minimum character n-gram length
    #[arg(long, default_value = "3")]
    pub minn: i32,

    /// Maximum character n-gram length
    #[arg(long, default_value = "6")]
    pub maxn: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(opts: TrainOpts) -> anyhow::Result<()> {
    println!("1. Loading and converting corpus from {}", opts.csv.display());
    let lines = load_csv(&opts.csv)?;
    let (train_lines, test_lines) = train_test_split(lines, opts.test_size, opts.seed)?;

    // The intermediate fastText-format files only exist for the duration of
    // this run; the tempdir removes them on drop.
    let workdir = tempfile::tempdir()?;
    let train_file = workdir.path().join("lid_train.txt");
    let test_file = workdir.path().join("lid_test.txt");
    write_lines(&train_file, &train_lines)?;
    write_lines(&test_file, &test_lines)?;

    println!("   training examples: {}", train_lines.len());
    println!("   test examples:     {}", test_lines.len());

    println!("\n2. Training model");
    let params = TrainParams::default()
        .with_dim(opts.dim)
        .with_epoch(opts.epoch)
        .with_lr(opts.lr)
        .with_ngrams(opts.minn, opts.maxn);

    let mut model = train_supervised(&train_file, &params)?;
    model.save(&opts.output)?;
    println!("   model saved to {}", opts.output.display());

    println!("\n3. Evaluating on the held-out split");
    let report = evaluate(&model, &test_file)?;
    println!("   examples (N):        {}", report.examples);
    println!("   precision @ 1:       {:.4}", report.precision_at_1);
    println!("   recall @ 1:          {:.4}", report.recall_at_1);

    println!("\n4. Sample predictions");
    for text in SAMPLE_TEXTS {
        match model.predict_one(text)? {
            Some(p) => println!(
                "   '{}' -> {} ({:.4})",
                preview(text),
                p.lang_code,
                p.confidence
            ),
            None => println!("   '{}' -> no prediction", preview(text)),
        }
    }

    info!("training run complete");
    Ok(())
}

/// First 20 characters of a sample, for compact console output.
fn preview(text: &str) -> String {
    text.chars().take(20).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("人工智能是未来的方向。"), "人工智能是未来的方向。");
        assert_eq!(preview(&"x".repeat(50)), "x".repeat(20));
    }
}
