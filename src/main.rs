use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use clips::{
    logger,
    repl::{DEFAULT_PROMPT, Repl, run_line},
};

/// clips is a tiny calculator for prefix-notation S-expressions such as
/// `(+ 1 (* 2 3))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells clips to treat the argument as a file and evaluate each of its
    /// lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Suppresses the banner and the prompt.
    #[arg(short, long)]
    quiet: bool,

    /// The prompt printed before each line in interactive mode.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// A single line to evaluate, or a path when `--file` is given. Without
    /// it an interactive session starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logger::init(logger::level_for(args.verbose)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match (&args.contents, args.file) {
        (Some(path), true) => {
            let file = File::open(path).unwrap_or_else(|_| {
                                           eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                           std::process::exit(1);
                                       });
            Repl::new(BufReader::new(file), io::stdout().lock()).quiet(true)
                                                                 .run()
        },
        (Some(line), false) => {
            println!("{}", run_line(line));
            Ok(1)
        },
        (None, _) => Repl::new(io::stdin().lock(), io::stdout().lock()).with_prompt(&args.prompt)
                                                                        .quiet(args.quiet)
                                                                        .run(),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
