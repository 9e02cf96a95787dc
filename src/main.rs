use std::{env, fs::read_to_string, process::exit, time::Instant};

use monkeypl::{display_error, errors::errors::Error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let source = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(source.clone(), Some(String::from(file_name)));

    println!("Tokenized in {:?}", start.elapsed());

    let mut illegal_tokens = 0;
    for token in &tokens {
        token.debug();

        if let Some(error) = Error::from_illegal(token) {
            display_error(&error, &source);
            illegal_tokens += 1;
        }
    }

    if illegal_tokens > 0 {
        println!("Found {} illegal token(s)", illegal_tokens);
        exit(1);
    }
}
