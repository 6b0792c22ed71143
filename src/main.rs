use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use structopt::StructOpt;

use prefix_tree::{FileFormat, Wordlist};


/// Look words up in a word list and split unbroken text into its words.
#[derive(StructOpt)]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Split each line into columns on this character
    #[structopt(long)]
    delimiter: Option<char>,
    /// Which column holds the word, counting from 0
    #[structopt(long, default_value = "0")]
    column: usize,
    /// Skip lines starting with this character
    #[structopt(long)]
    comment: Option<char>,
    /// Upper-case ASCII letters in both the word list and the queries
    #[structopt(long)]
    uppercase: bool,
    /// Print a single JSON document instead of lines
    #[structopt(long)]
    json: bool,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Whether each word is in the list
    Contains {
        #[structopt(required = true)]
        words: Vec<String>,
    },
    /// Every word starting with a prefix, sorted
    Prefix { prefix: String },
    /// Whether each text splits into words of the list
    CanBreak {
        #[structopt(required = true)]
        texts: Vec<String>,
    },
    /// Every way to split a text into words of the list
    Break { text: String },
}

#[derive(Serialize)]
struct Answer<'a> {
    query: &'a str,
    answer: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    query: &'a str,
    results: Vec<Vec<&'a str>>,
}

fn print_answers(queries: &[String], answers: &[bool], json: bool) -> Result<()> {
    if json {
        let report: Vec<Answer> = queries.iter().zip(answers)
            .map(|(query, answer)| Answer { query, answer: *answer })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (query, answer) in queries.iter().zip(answers) {
            println!("{}\t{}", query, answer);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.column)
        .comment(args.comment)
        .uppercase(args.uppercase)
        .build();

    let wl = Wordlist::from_file(&args.path, &format)
        .with_context(|| format!("loading {}", args.path.display()))?;

    let start = Instant::now();
    match &args.command {
        Command::Contains { words } => {
            let words: Vec<String> = words.iter().map(|x| format.normalize(x)).collect();
            let answers: Vec<bool> = words.iter().map(|x| wl.contains(x)).collect();
            print_answers(&words, &answers, args.json)?;
        }
        Command::Prefix { prefix } => {
            let prefix = format.normalize(prefix);
            let words = wl.words_with_prefix(&prefix);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                words.iter().for_each(|word| println!("{}", word));
            }
        }
        Command::CanBreak { texts } => {
            let texts: Vec<String> = texts.iter().map(|x| format.normalize(x)).collect();
            let answers = wl.can_segment_many(&texts);
            print_answers(&texts, &answers, args.json)?;
        }
        Command::Break { text } => {
            let text = format.normalize(text);
            let results = wl.segment_all(&text);
            if args.json {
                let listing = Listing { query: &text, results };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                results.iter().for_each(|words| println!("{}", words.join(" ")));
            }
        }
    }
    info!("Answered in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}
