mod config;
mod quiz;

use std::io;
use std::process;

use config::QuizConfig;
use quiz::{Corpus, QuizEngine, QuizError, QuizResult};

fn main() {
    pretty_env_logger::init();

    let config = QuizConfig::default();
    log::info!("Starting sonnet quiz from {}", config.source.display());

    if let Err(err) = run(&config) {
        log::debug!("Quiz failed: {:?}", err);
        match err {
            QuizError::NotFound { .. } => eprintln!("Error: File Not Found."),
            other => eprintln!("Error: {}", other),
        }
        process::exit(1);
    }
}

fn run(config: &QuizConfig) -> QuizResult<()> {
    let corpus = Corpus::open(&config.source)?;
    let mut engine = QuizEngine::new(corpus)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    engine.play(&mut stdin.lock(), &mut stdout.lock())
}
