use portfolio_cli::config::CliConfig;
use portfolio_cli::context::TerminalContext;
use portfolio_cli::logging;
use std::io::{self, BufRead, Write};
use std::path::Path;

// local repl over the same core the browser widget uses
// usage: portfolio-cli [config.json]
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match CliConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => CliConfig::default(),
    };
    logging::init(config.level_filter());

    let mut ctx = TerminalContext::new(config);
    for entry in &ctx.history {
        if let Some(output) = &entry.output {
            println!("{}\n", output);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ➜ ", ctx.prompt());
        if let Err(e) = stdout.flush() {
            log::error!("stdout closed: {}", e);
            break;
        }
        let input = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let input = input.trim();
        if input == "exit" {
            break;
        }
        match ctx.submit(input).rendered {
            Some(output) => println!("{}", output),
            // only `clear` runs without output
            None if !input.is_empty() => print!("\x1b[2J\x1b[H"),
            None => {}
        }
    }
}
