use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use monkey_syntax::{
    errors::errors::{ErrorTip, ParseError},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

/// Parse a program and print its canonical, fully parenthesized form.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file to read; stdin when omitted
    path: Option<PathBuf>,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    let source = match read_source(args.path.as_deref()) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read input: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if args.tokens {
        for token in tokenize(&source) {
            print_token(&token);
        }
        return ExitCode::SUCCESS;
    }

    let (program, errors) = parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            display_error(error);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_token(token: &Token) {
    if token.is_one_of_many(&[TokenKind::Identifier, TokenKind::Int, TokenKind::Illegal]) {
        println!("{} ({})", token.kind, token.lexeme);
    } else {
        println!("{}", token.kind);
    }
}

fn display_error(error: &ParseError) {
    /*
        Error: UnexpectedToken: expected next token to be =, got INT instead
          tip: ...
    */
    eprintln!("Error: {}: {}", error.get_error_name(), error);
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("  tip: {}", tip);
    }
}
