use std::fmt;
use std::io::{BufRead, Write};

use services::{QuizService, ResultsCard, builtin_bank, load_bank};
use trivia_core::{Question, Sampler};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play [--bank <path>] [--seed <u64>] [--name <name>]");
    eprintln!("  cargo run -p app -- bank [--bank <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in five-question bank, unseeded selection");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_BANK, TRIVIA_SEED");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Bank,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "bank" => Some(Self::Bank),
            _ => None,
        }
    }
}

struct Args {
    bank_path: Option<String>,
    seed: Option<u64>,
    name: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut bank_path = std::env::var("TRIVIA_BANK").ok().filter(|v| !v.is_empty());
        let mut seed = std::env::var("TRIVIA_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());
        let mut name = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    bank_path = Some(require_value(args, "--bank")?);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--name" => {
                    name = Some(require_value(args, "--name")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            bank_path,
            seed,
            name,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let bank = match &args.bank_path {
        Some(path) => load_bank(path)?,
        None => builtin_bank(),
    };

    match cmd {
        Command::Play => play(bank, args),
        Command::Bank => {
            for question in &bank {
                println!("{:>4}  [{}]  {}", question.id(), question.category(), question.text());
            }
            Ok(())
        }
    }
}

fn play(bank: Vec<Question>, args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let sampler = args.seed.map_or_else(Sampler::default_sampler, Sampler::seeded);
    let mut quiz = QuizService::new(bank).with_sampler(sampler);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();

    let name = match args.name {
        Some(name) => name,
        None => {
            write!(stdout, "Enter your name: ")?;
            stdout.flush()?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            line
        }
    };

    let mut current = quiz.start(&name).cloned();
    println!("Hello, {name}!");

    while let Some(question) = current {
        let progress = quiz.progress();
        println!();
        println!("Correct: {}  Wrong: {}", progress.correct, progress.wrong);
        println!("{}", question.text());
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(answer) = read_line(&mut input)? else {
            println!();
            return Ok(());
        };

        quiz.answer_and_advance(&answer);
        if let Some(card) = ResultsCard::from_session(quiz.session()) {
            println!("Previous question: {}", card.text);
            println!("Answer: {}", card.answer);
            if card.was_correct {
                println!("Correct!");
            } else {
                println!("Try the next question...");
            }
        }

        current = quiz.session().current_question().cloned();
    }

    let progress = quiz.progress();
    println!();
    println!("All questions have been asked. Great job!");
    println!(
        "Final score for {name}: {} correct, {} wrong out of {}.",
        progress.correct, progress.wrong, progress.total
    );
    Ok(())
}

/// Read one line without its terminator; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
