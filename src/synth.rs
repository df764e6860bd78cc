use crate::models::{Flashcard, Sentiment, SentimentResult};
use rand::Rng;

const MAX_DEMO_CARDS: usize = 3;
const MIN_SENTENCE_CHARS: usize = 10;
const MIN_CARD_WORDS: usize = 4;
const FALLBACK_ANSWER_CHARS: usize = 200;

const POSITIVE_CUES: [&str; 8] = [
    "happy", "good", "great", "love", "excited", "wonderful", "amazing", "joy",
];
const NEGATIVE_CUES: [&str; 8] = [
    "sad", "bad", "angry", "hate", "terrible", "awful", "stress", "tired",
];

pub const DEMO_NUTRITION_LINE: &str =
    "Nutrition: Rich in vitamins and minerals. Demo mode - actual recipes require backend.";

pub fn generate_demo_flashcards(text: &str) -> Vec<Flashcard> {
    let mut flashcards: Vec<Flashcard> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .take(MAX_DEMO_CARDS)
        .filter_map(|sentence| {
            let words: Vec<&str> = sentence.split(' ').collect();
            if words.len() <= MIN_CARD_WORDS {
                return None;
            }
            Some(Flashcard {
                question: format!(
                    "What is the main idea about \"{}...\"?",
                    words[..3].join(" ")
                ),
                answer: sentence.to_string(),
            })
        })
        .collect();

    if flashcards.is_empty() {
        flashcards.push(Flashcard {
            question: "What is the main topic of your text?".to_string(),
            answer: truncate_with_ellipsis(text, FALLBACK_ANSWER_CHARS),
        });
    }

    flashcards
}

/// Only the label depends on the text; the score is drawn from `rng` inside
/// the label's band (70-95 for positive/negative, 40-70 for neutral).
pub fn analyze_demo_sentiment<R: Rng + ?Sized>(text: &str, rng: &mut R) -> SentimentResult {
    let lowered = text.to_lowercase();
    let positive = count_cues(&lowered, &POSITIVE_CUES);
    let negative = count_cues(&lowered, &NEGATIVE_CUES);

    let sentiment = if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let (base, span) = match sentiment {
        Sentiment::Positive | Sentiment::Negative => (70.0, 25.0),
        Sentiment::Neutral => (40.0, 30.0),
    };
    let draw: f64 = rng.random();

    SentimentResult {
        sentiment,
        score: round_tenths(base + draw * span),
    }
}

pub fn generate_demo_recipes(ingredients: &str) -> String {
    let items: Vec<&str> = ingredients.split(',').map(str::trim).collect();
    let first = items.first().copied().filter(|item| !item.is_empty()).unwrap_or("Main");
    let second = items.get(1).copied().filter(|item| !item.is_empty()).unwrap_or("Side");

    format!(
        "
Recipe 1: {first} Dish
A simple and delicious dish using {ingredients}
Instructions:
1. Prepare all ingredients
2. Cook with your preferred method
3. Season to taste
4. Serve hot

Recipe 2: {second} Salad
A fresh salad featuring {ingredients}
Instructions:
1. Chop ingredients
2. Mix together
3. Add dressing
4. Serve chilled

{DEMO_NUTRITION_LINE}
"
    )
}

fn count_cues(lowered: &str, cues: &[&str]) -> usize {
    cues.iter().filter(|cue| lowered.contains(*cue)).count()
}

fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
