use std::{env, fs, io::Read, process::ExitCode};

use post_core::{diff, html_to_elements};

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [input] => dump_elements(input),
        [old, new] => dump_ops(old, new),
        _ => {
            eprintln!("usage: postdump <post.html>              print parsed elements as JSON");
            eprintln!("       postdump <old.html> <new.html>    print diff operations as JSON");
            eprintln!("       (use - to read a file from stdin)");
            ExitCode::from(2)
        }
    }
}

fn dump_elements(input: &str) -> ExitCode {
    let Some(html) = read_input(input) else {
        return ExitCode::FAILURE;
    };
    print_json(&html_to_elements(&html))
}

fn dump_ops(old: &str, new: &str) -> ExitCode {
    let Some(old_html) = read_input(old) else {
        return ExitCode::FAILURE;
    };
    let Some(new_html) = read_input(new) else {
        return ExitCode::FAILURE;
    };
    let previous = html_to_elements(&old_html);
    let next = html_to_elements(&new_html);
    print_json(&diff(&previous, &next))
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to encode output: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: &str) -> Option<String> {
    if path == "-" {
        let mut html = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut html) {
            eprintln!("Failed to read stdin: {}", err);
            return None;
        }
        return Some(html);
    }
    match fs::read_to_string(path) {
        Ok(html) => Some(html),
        Err(err) => {
            eprintln!("Failed to read {}: {}", path, err);
            None
        }
    }
}
