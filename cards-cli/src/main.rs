use std::io::{self, Write};

use cards_core::store::sampler::{known_words, pick_random};
use cards_core::store::word_pair::{Direction, RATING_KNOWN, RATING_PRACTICE, WordId};
use cards_core::store::word_store::{EMBEDDED_DECK, WordStore};

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok();
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_owned()),
    }
}

fn rate(store: &mut WordStore, id: WordId, direction: Direction, answer: &str) {
    match answer {
        "y" => {
            store.update_weight(id, direction, RATING_KNOWN);
            println!("Marked as known.");
        }
        "n" => {
            store.update_weight(id, direction, RATING_PRACTICE);
            println!("Will come up more often.");
        }
        _ => println!("Skipped."),
    }
}

fn list_known(store: &mut WordStore, direction: Direction) {
    // Snapshot ids and texts first: the store cannot be updated while the
    // known-words borrow is alive
    let known: Vec<(WordId, String, String)> = known_words(store.words(), direction)
        .iter()
        .map(|w| (w.id(), w.front(direction).to_owned(), w.back(direction).to_owned()))
        .collect();

    if known.is_empty() {
        println!("No known words yet in this direction.");
        return;
    }

    println!("Known words ({}):", known.len());
    for (i, (_, front, back)) in known.iter().enumerate() {
        println!("  {}: {} = {}", i + 1, front, back);
    }

    // Mirror the review screen: a listed word can be demoted back to practice
    let Some(choice) = prompt("Number to move back to practice, or enter to continue: ") else {
        return;
    };
    if let Ok(i) = choice.parse::<usize>() {
        if i >= 1 && i <= known.len() {
            store.update_weight(known[i - 1].0, direction, RATING_PRACTICE);
            println!("Moved back to practice.");
        }
    }
}

fn main() {
    env_logger::init();

    // The deck location can be overridden, ex. to practice a custom deck
    let mut store = match std::env::args().nth(1) {
        Some(path) => WordStore::open(path, Some(EMBEDDED_DECK)),
        None => WordStore::open_default(Some(EMBEDDED_DECK)),
    };

    // The direction toggle lives here, in the presentation layer; the core
    // takes it as an explicit parameter on every call
    let mut direction = Direction::AToB;

    println!("Loaded {} word pairs from {}.", store.len(), store.data_path().display());
    println!("Commands: enter = reveal, y = known, n = practice, d = flip direction, k = known words, q = quit");

    loop {
        let Some(word) = pick_random(store.words(), direction) else {
            println!("The deck is empty.");
            break;
        };
        let id = word.id();
        let front = word.front(direction).to_owned();
        let back = word.back(direction).to_owned();

        println!();
        let Some(input) = prompt(&format!("  {front}\n> ")) else {
            break;
        };
        match input.as_str() {
            "q" => break,
            "d" => {
                direction = direction.flipped();
                println!("Direction flipped.");
            }
            "k" => list_known(&mut store, direction),
            "y" | "n" => rate(&mut store, id, direction, &input),
            _ => {
                // Flip the card, then ask for the rating
                println!("  {back}");
                let Some(answer) = prompt("Known? [y/n] ") else {
                    break;
                };
                rate(&mut store, id, direction, &answer);
            }
        }
    }
}
