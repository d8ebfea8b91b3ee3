use std::{io, process::ExitCode};

use clap::{ArgAction, Parser};
use env_logger::Env;
use log::error;
use safecalc::{
    clipboard::SystemClipboard,
    evaluate_with,
    frontend::menu::MenuSession,
    interpreter::evaluator::core::{Limits, MAX_DEPTH, MAX_NESTING},
};

/// safecalc is a calculator that evaluates arithmetic expressions without
/// ever running arbitrary code.
///
/// With an expression, prints its value and exits. Without one, starts the
/// interactive menu.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. "(1 + 2) * 3" or "-7 // 2".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Maximum nesting of parentheses, signs and powers.
    #[arg(long, default_value_t = MAX_NESTING)]
    max_nesting: usize,

    /// Maximum depth of the expression tree.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Log more. Once for info, twice for debug, three times for trace.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let limits = Limits { max_nesting: args.max_nesting,
                          max_depth:   args.max_depth, };

    if let Some(expression) = args.expression {
        return match evaluate_with(&expression, limits) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let stdin = io::stdin();
    let mut session = MenuSession::new(stdin.lock(), io::stdout(), SystemClipboard::default())
        .with_limits(limits);

    if let Err(e) = session.run() {
        error!("Terminal I/O failed: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
