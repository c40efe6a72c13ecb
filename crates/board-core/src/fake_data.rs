//! Fake data primitives for the board generator
//!
//! Every function draws from the RNG it is handed, so a seeded generator
//! produces the same board on every run.

use chrono::{Duration, NaiveDate};
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carmen", "Dmitri", "Elena", "Felix", "Greta", "Hugo", "Iris", "Jonas",
    "Kira", "Lucas", "Marta", "Nikolai", "Olga", "Pablo", "Rosa", "Stefan", "Tamara", "Ulrich",
    "Vera", "Walter", "Yusuf", "Zelda", "Amelia", "Bernard", "Clara", "Dorian", "Esther", "Floyd",
    "Gloria", "Harvey", "Ines", "Jasper", "Leona", "Milo", "Nadia", "Oscar", "Petra", "Quentin",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barker", "Castillo", "Dawson", "Ellison", "Fletcher", "Gallagher", "Hoffman",
    "Ingram", "Jennings", "Kowalski", "Lindqvist", "Mercer", "Novak", "Ortega", "Pearson",
    "Quigley", "Rasmussen", "Sandoval", "Thornton", "Ueda", "Vasquez", "Whitaker", "Yilmaz",
    "Zimmerman", "Bishop", "Carver", "Dunbar", "Eriksen", "Fontaine",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.gen_range(0..words.len())]
}

pub fn fake_first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

pub fn fake_last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// "First Last"
pub fn fake_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = fake_first_name(rng);
    let last = fake_last_name(rng);
    format!("{} {}", first, last)
}

pub fn lorem_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LOREM_WORDS)
}

/// A lorem sentence of exactly `word_count` words, capitalised and closed
/// with a period. Zero words yields an empty string.
pub fn fake_sentence<R: Rng + ?Sized>(rng: &mut R, word_count: usize) -> String {
    let words: Vec<&str> = (0..word_count).map(|_| lorem_word(rng)).collect();
    if words.is_empty() {
        return String::new();
    }

    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A day in `[start, end)`. Returns `start` when the range is empty.
pub fn fake_date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }

    start + Duration::days(rng.gen_range(0..span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deterministic_generation() {
        let mut a = StdRng::seed_from_u64(12345);
        let mut b = StdRng::seed_from_u64(12345);

        assert_eq!(fake_full_name(&mut a), fake_full_name(&mut b));
        assert_eq!(fake_sentence(&mut a, 8), fake_sentence(&mut b, 8));
    }

    #[test]
    fn test_full_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let name = fake_full_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(FIRST_NAMES.contains(&parts[0]));
            assert!(LAST_NAMES.contains(&parts[1]));
        }
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        for count in 1..=14 {
            let sentence = fake_sentence(&mut rng, count);
            assert!(sentence.ends_with('.'));
            assert!(sentence.chars().next().unwrap().is_uppercase());
            assert_eq!(sentence.split_whitespace().count(), count);
        }
        assert_eq!(fake_sentence(&mut rng, 0), "");
    }

    #[test]
    fn test_date_generation_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();

        for _ in 0..200 {
            let day = fake_date_between(&mut rng, start, end);
            assert!(day >= start);
            assert!(day < end);
        }
    }

    #[test]
    fn test_date_generation_empty_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        assert_eq!(fake_date_between(&mut rng, start, start), start);
    }
}
