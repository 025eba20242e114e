use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use simsh::chat::{ChatMessage, ChatTransport};
use simsh::vfs::{FileStore, MemoryStore, SnapshotStore, Vfs};
use simsh::{Interpreter, Outcome, CHAT_PROMPT};

#[derive(Parser)]
#[command(name = "simsh")]
#[command(about = "A simulated shell over a persisted virtual file system")]
#[command(version)]
struct Cli {
    /// Execute a single command and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Persist the file system snapshot to this JSON file
    #[arg(long = "state")]
    state: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let store: Box<dyn SnapshotStore> = match cli.state {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut interp = Interpreter::new(Vfs::new(store));

    if let Some(command) = cli.command {
        let result = interp.execute(&command);
        let text = result.output_text();
        if !text.is_empty() {
            println!("{}", text);
        }
        std::process::exit(if result.is_error() { 1 } else { 0 });
    }

    repl(&mut interp, None);
}

/// Interactive loop. In chat mode, `exit` and `clear` are intercepted here;
/// everything else goes to the transport, when one is configured.
fn repl(interp: &mut Interpreter, mut transport: Option<Box<dyn ChatTransport>>) {
    let stdin = io::stdin();
    let mut chat_mode = false;
    let mut history: Vec<ChatMessage> = Vec::new();

    loop {
        if chat_mode {
            print!("{}", CHAT_PROMPT);
        } else {
            print!("{}", interp.prompt());
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if chat_mode {
            match line.trim() {
                "exit" => {
                    chat_mode = false;
                    history.clear();
                }
                "clear" => clear_screen(),
                "" => {}
                text => chat_turn(text, &mut history, transport.as_deref_mut()),
            }
            continue;
        }

        let result = interp.execute(&line);
        match result.outcome {
            Outcome::Output(text) if !text.is_empty() => println!("{}", text),
            Outcome::Output(_) => {}
            Outcome::Error(message) => println!("{}", message),
            Outcome::ClearScreen => clear_screen(),
            Outcome::EnterChatMode => {
                chat_mode = true;
                println!("Entering chat mode. Type 'exit' to return to the shell.");
            }
        }
    }
}

fn chat_turn(
    text: &str,
    history: &mut Vec<ChatMessage>,
    transport: Option<&mut (dyn ChatTransport + 'static)>,
) {
    history.push(ChatMessage::user(text));

    let Some(transport) = transport else {
        println!("No chat transport configured. Type 'exit' to return to the shell.");
        return;
    };

    match transport.send(history) {
        Ok(stream) => {
            let mut reply = String::new();
            for chunk in stream {
                print!("{}", chunk);
                let _ = io::stdout().flush();
                reply.push_str(&chunk);
            }
            println!();
            history.push(ChatMessage::assistant(reply));
        }
        Err(err) => println!("{}", err),
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}
