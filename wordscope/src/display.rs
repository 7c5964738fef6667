use dictionary::{Entry, Report, Severity};

use crate::search::SearchState;

pub fn render(state: &SearchState) {
    match state {
        SearchState::Idle => println!("Type 'define <word>' to look a word up."),
        SearchState::Fetching => println!("Looking it up..."),
        SearchState::Ready(entry) => print_entry(entry),
        SearchState::Failed(report) => print_report(report),
    }
}

fn print_report(report: &Report) {
    let label = match report.severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    println!("[{label}] {}: {}", report.title, report.message);
}

fn print_entry(entry: &Entry) {
    match &entry.phonetic {
        Some(phonetic) => println!("Showing definition for '{}' {phonetic}:", entry.word),
        None => println!("Showing definition for '{}':", entry.word),
    }
    for phonetic in &entry.phonetics {
        match (&phonetic.text, &phonetic.audio) {
            (Some(text), Some(audio)) if !audio.is_empty() => {
                println!("  {text} (audio: {audio})")
            }
            (Some(text), _) => println!("  {text}"),
            (None, Some(audio)) if !audio.is_empty() => println!("  audio: {audio}"),
            _ => {}
        }
    }
    if let Some(origin) = &entry.origin {
        println!("  origin: {origin}");
    }
    for meaning in &entry.meanings {
        println!("    {}:", meaning.part_of_speech);
        for definition in &meaning.definitions {
            println!("        {}", definition.definition);
            if let Some(example) = &definition.example {
                println!("          example: {example}");
            }
            if !definition.synonyms.is_empty() {
                println!("          synonyms: {}", definition.synonyms.join(", "));
            }
            if !definition.antonyms.is_empty() {
                println!("          antonyms: {}", definition.antonyms.join(", "));
            }
        }
        if !meaning.synonyms.is_empty() {
            println!("      synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            println!("      antonyms: {}", meaning.antonyms.join(", "));
        }
    }
    if !entry.license.name.is_empty() {
        println!("  license: {} ({})", entry.license.name, entry.license.url);
    }
    if !entry.source_urls.is_empty() {
        println!("  sources: {}", entry.source_urls.join(", "));
    }
}
