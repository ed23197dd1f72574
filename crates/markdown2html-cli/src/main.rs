use anyhow::Result;
use markdown2html_engine::{IoError, convert_file};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{env, process};

const USAGE: &str = "Usage: ./markdown2html.py README.md README.html";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Paths need not be valid UTF-8
    let args: Vec<OsString> = env::args_os().collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let markdown_file = PathBuf::from(&args[1]);
    let html_file = PathBuf::from(&args[2]);
    log::debug!(
        "converting {} to {}",
        markdown_file.display(),
        html_file.display()
    );

    match convert_file(&markdown_file, &html_file) {
        Ok(()) => Ok(()),
        Err(e @ IoError::MissingInput(_)) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
