use dictionary::Dictionary;
use search::SearchSession;
use utilities::input;

mod display;
mod search;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dict = Dictionary::new();
    let mut session = SearchSession::new();
    display::render(session.state());
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "find" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    lookup(&dict, &mut session, &word).await;
                }
                "random" => {
                    random_word(&dict, &mut session).await;
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

async fn lookup(dict: &Dictionary, session: &mut SearchSession, word: &str) {
    let ticket = session.begin();
    let outcome = dict.get_definition(word).await;
    if session.apply(ticket, word, outcome) {
        display::render(session.state());
    }
}

async fn random_word(dict: &Dictionary, session: &mut SearchSession) {
    match dict.get_random_words(1, None).await {
        Ok(words) => match words.first() {
            Some(word) => {
                println!("Picked the word '{word}'.");
                lookup(dict, session, word).await;
            }
            None => {
                println!("The random word service came back empty.");
            }
        },
        Err(error) => {
            println!("Couldn't pick a random word: {error}");
        }
    }
}
