use std::{env, fs::read_to_string, path::Path, path::PathBuf, process, time::Instant};

use halstead::{display_error, metrics::metrics::Halstead, tokenizer::tokenizer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filepath>", args[0]);
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let language = language_for_path(file_path);
    println!("Language: {}", language);

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(file_contents, language, Some(String::from(file_name)));

    println!("Tokenized in {:?}", start.elapsed());

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            // A ruleset lookup failure has no source position to point at.
            if error.get_error_name() == "UnsupportedLanguage" {
                println!("Error: {} ({})", error.get_error_name(), error.get_tip());
            } else {
                display_error(error, PathBuf::from(file_path));
            }
            process::exit(1);
        }
    };

    let metrics = Halstead::from_tokens(&tokens);

    println!("{}", metrics);
}

fn language_for_path(path: &str) -> &str {
    let extension = Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("");

    match extension {
        "cpp" | "cc" | "cxx" | "h" | "hpp" => "cpp",
        "java" => "java",
        "py" => "python",
        other => other,
    }
}
