//! End-to-end training tests on a tiny synthetic corpus.
//!
//! These exercise the real fastText library: train, save, reload, predict,
//! and evaluate. The corpus is small, so assertions stay structural rather
//! than demanding accuracy.

use langid_model::{evaluate, train_supervised, write_lines, LanguageModel, TrainParams};

const ENGLISH: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "language identification is a classification problem",
    "please restart the server after the update",
    "we shipped the release on thursday morning",
    "reading the manual before asking saves everyone time",
    "the weather today is cold and windy",
];

const FRENCH: &[&str] = &[
    "le renard brun saute par dessus le chien paresseux",
    "la vie est belle quand le soleil brille",
    "veuillez redemarrer le serveur apres la mise a jour",
    "nous avons publie la version jeudi matin",
    "lire le manuel avant de demander fait gagner du temps",
    "le temps aujourd'hui est froid et venteux",
];

fn corpus() -> Vec<String> {
    let mut lines = Vec::new();
    for round in 0..5 {
        for text in ENGLISH {
            lines.push(format!("__label__en {text} {round}"));
        }
        for text in FRENCH {
            lines.push(format!("__label__fr {text} {round}"));
        }
    }
    lines
}

fn quick_params() -> TrainParams {
    TrainParams::default().with_dim(16).with_epoch(10).with_lr(0.5)
}

#[test]
fn train_save_reload_predict() {
    let dir = tempfile::tempdir().unwrap();
    let train_file = dir.path().join("train.txt");
    write_lines(&train_file, &corpus()).unwrap();

    let mut model = train_supervised(&train_file, &quick_params()).unwrap();

    let prediction = model.predict_one("the server is restarting now").unwrap();
    let prediction = prediction.expect("trained model should emit a label");
    assert!(
        prediction.lang_code == "en" || prediction.lang_code == "fr",
        "unexpected label: {}",
        prediction.lang_code
    );
    assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);

    // Round-trip through disk.
    let model_path = dir.path().join("model").join("lid_test.bin");
    model.save(&model_path).unwrap();

    let reloaded = LanguageModel::load("lid_test", &model_path).unwrap();
    let again = reloaded
        .predict_one("the server is restarting now")
        .unwrap()
        .expect("reloaded model should emit a label");
    assert_eq!(again.lang_code, prediction.lang_code);
}

#[test]
fn predict_top_k_is_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let train_file = dir.path().join("train.txt");
    write_lines(&train_file, &corpus()).unwrap();

    let model = train_supervised(&train_file, &quick_params()).unwrap();
    let predictions = model.predict("bonjour tout le monde", 2).unwrap();

    assert!(!predictions.is_empty());
    for pair in predictions.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn evaluate_reports_consistent_counts() {
    let dir = tempfile::tempdir().unwrap();
    let train_file = dir.path().join("train.txt");
    let test_file = dir.path().join("test.txt");

    write_lines(&train_file, &corpus()).unwrap();
    let held_out = vec![
        "__label__en the update broke the build".to_string(),
        "__label__fr la mise a jour a casse la compilation".to_string(),
    ];
    write_lines(&test_file, &held_out).unwrap();

    let model = train_supervised(&train_file, &quick_params()).unwrap();
    let report = evaluate(&model, &test_file).unwrap();

    assert_eq!(report.examples, 2);
    assert!(report.correct <= report.examples);
    assert!((0.0..=1.0).contains(&report.precision_at_1));
    assert!((0.0..=1.0).contains(&report.recall_at_1));
}
