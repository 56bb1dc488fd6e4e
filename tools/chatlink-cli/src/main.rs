use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatlink-cli", about = "Decode chatlink tokens", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strictly decode one or more tokens
    Decode {
        /// Tokens in `[&...]` form
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Extract and decode every token found in free text (best effort)
    Extract {
        /// Text to scan; reads stdin when omitted
        text: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { tokens } => {
            let mut failed = false;
            for token in &tokens {
                match chatlink::decode(token) {
                    Ok(link) => println!("{token}: {link:?}"),
                    Err(err) => {
                        eprintln!("{token}: {err}");
                        failed = true;
                    }
                }
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Command::Extract { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                        eprintln!("failed to read stdin: {err}");
                        return ExitCode::FAILURE;
                    }
                    buf
                }
            };
            for link in chatlink::decode_all(&text) {
                println!("{link:?}");
            }
            ExitCode::SUCCESS
        }
    }
}
