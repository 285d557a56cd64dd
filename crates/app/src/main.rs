use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use services::{Clock, QuizService, QuizSettings, QuizState};
use storage::JsonFileSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

use commands::{Command, parse_line};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { raw } => write!(f, "invalid --questions value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug)]
struct Args {
    questions: PathBuf,
    shuffle: bool,
    highlight_correctness: bool,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>] [--no-shuffle] [--seed <n>] [--hide-correctness]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions data/questions_database.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_PATH, QUIZ_NO_SHUFFLE, QUIZ_SEED, RUST_LOG");
}

fn print_help() {
    println!("Commands:");
    println!("  n | next            next question");
    println!("  p | prev            previous question");
    println!("  right | left        arrow-key navigation");
    println!("  j <number>          jump to question number");
    println!("  s <choice>          select/toggle choice number");
    println!("  m <term> <option>   choose option for term (0 clears)");
    println!("  a | answers         show/hide answers");
    println!("  q | quit            leave the quiz");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("QUIZ_QUESTIONS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("data/questions_database.json"), PathBuf::from);
        let mut shuffle = std::env::var_os("QUIZ_NO_SHUFFLE").is_none();
        let mut seed = std::env::var("QUIZ_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());
        let mut highlight_correctness = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath { raw: value });
                    }
                    questions = PathBuf::from(value);
                }
                "--no-shuffle" => shuffle = false,
                "--hide-correctness" => highlight_correctness = false,
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            shuffle,
            highlight_correctness,
            seed,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    tracing::debug!(?parsed, "arguments parsed");

    let settings = QuizSettings::default()
        .with_shuffle(parsed.shuffle)
        .with_highlight_correctness(parsed.highlight_correctness);
    let service = QuizService::new(
        Clock::default_clock(),
        Arc::new(JsonFileSource::new(&parsed.questions)),
    )
    .with_settings(settings)
    .with_seed(parsed.seed);

    let mut state = service.start()?;
    tracing::info!(path = %parsed.questions.display(), "quiz loaded");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    show(&state, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let current = state.session().map(|s| s.current_question());
        match parse_line(&line, current) {
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(),
            Some(Command::Action(action)) => {
                state = state.apply(action);
                show(&state, &mut stdout)?;
            }
            None => println!("unrecognized command, type `help`"),
        }
    }
    Ok(())
}

fn show(state: &QuizState, out: &mut impl Write) -> io::Result<()> {
    match state.view() {
        Some(view) => writeln!(out, "\n{}", render::render(&view)),
        None => writeln!(out, "Loading..."),
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
