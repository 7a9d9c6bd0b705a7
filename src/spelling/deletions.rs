//! Deletion-only misprint generation.
//!
//! A misprint of distance `k` is any string obtained by deleting exactly `k`
//! characters from a word, where no two deleted characters were neighbours.
//! Both the dictionary (at add time) and the query (at correction time) are
//! expanded with the same primitive.

use crate::error::{MisprintError, Result};

/// Maximum number of non-adjacent deletions a word of `length` characters can
/// take, optionally capped by `cap`.
///
/// `k` deletions need `k` characters plus `k - 1` gaps between them, so the
/// word must be at least `2k - 1` long.
pub fn max_deletions(length: usize, cap: Option<usize>) -> usize {
    let possible = (length + 1) / 2;
    match cap {
        Some(cap) => possible.min(cap),
        None => possible,
    }
}

/// Number of variants [`generate_deletions`] yields for a word of `length`
/// characters, i.e. `C(length - deletions + 1, deletions)`.
///
/// Returns 0 when the word cannot support that many deletions.
pub fn deletion_count(length: usize, deletions: usize) -> usize {
    if deletions > max_deletions(length, None) {
        return 0;
    }
    let n = length + 1 - deletions;
    let k = deletions.min(n - deletions);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// Generate every lower-cased string reachable from `word` by deleting exactly
/// `deletions` non-adjacent characters.
///
/// Variants come out in lexicographic order of the deleted position tuple.
/// Words with repeated letters yield duplicate strings; they are kept.
pub fn generate_deletions(word: &str, deletions: usize) -> Result<Vec<String>> {
    if word.is_empty() {
        return Err(MisprintError::invalid_argument(
            "cannot generate deletions of an empty word",
        ));
    }

    let chars: Vec<char> = word.to_lowercase().chars().collect();
    if deletions > max_deletions(chars.len(), None) {
        return Err(MisprintError::invalid_argument(format!(
            "'{word}' is too short for {deletions} non-adjacent deletions"
        )));
    }

    if deletions == 0 {
        return Ok(vec![chars.into_iter().collect()]);
    }

    let mut variants = Vec::with_capacity(deletion_count(chars.len(), deletions));
    let mut cursors: Vec<usize> = (0..deletions).map(|i| i * 2).collect();
    let last = deletions - 1;

    loop {
        variants.push(remove_positions(&chars, &cursors));

        if cursors[last] < chars.len() - 1 {
            cursors[last] += 1;
            continue;
        }

        match closest_shiftable_cursor(&cursors) {
            Some(pos) => {
                cursors[pos] += 1;
                for next in pos + 1..cursors.len() {
                    cursors[next] = cursors[next - 1] + 2;
                }
            }
            None => return Ok(variants),
        }
    }
}

/// Finds the rightmost cursor (excluding the last one) that can move right
/// while keeping a gap to its right neighbour.
fn closest_shiftable_cursor(cursors: &[usize]) -> Option<usize> {
    (0..cursors.len().saturating_sub(1))
        .rev()
        .find(|&i| cursors[i] + 2 < cursors[i + 1])
}

fn remove_positions(chars: &[char], positions: &[usize]) -> String {
    let mut skip = positions.iter().peekable();
    let mut result = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if skip.peek() == Some(&&i) {
            skip.next();
        } else {
            result.push(c);
        }
    }
    result
}

/// Greedy check that `candidate` can be produced from `correct` by exactly
/// `deletions` non-adjacent deletions.
///
/// Scans `correct` left to right and deletes wherever it diverges from
/// `candidate`. Before deleting, it steps back over a run of identical
/// characters (unless the previous deletion sits right there) so the deleted
/// letter leaves the most room for later deletions.
///
/// This is a single pass, not a search. [`generate_deletions`] remains the
/// reference behaviour; see `DESIGN.md` for the known divergence.
pub fn is_possible_misprint(correct: &str, candidate: &str, deletions: usize) -> Result<bool> {
    if deletions < 1 {
        return Err(MisprintError::invalid_argument(
            "a misprint needs at least one deletion",
        ));
    }
    if correct.is_empty() {
        return Err(MisprintError::invalid_argument("correct word is empty"));
    }

    let mut word: Vec<char> = correct.to_lowercase().chars().collect();
    let target: Vec<char> = candidate.to_lowercase().chars().collect();

    if deletions > max_deletions(word.len(), None) || word.len() != target.len() + deletions {
        return Ok(false);
    }

    let mut removed = 0;
    let mut last_removed: Option<usize> = None;
    let mut pos = 0;
    while pos < word.len() {
        if target.get(pos) != Some(&word[pos]) {
            while pos > 0 && word[pos] == word[pos - 1] && last_removed != Some(pos - 1) {
                pos -= 1;
            }
            word.remove(pos);
            last_removed = Some(pos);
            removed += 1;
            if removed == deletions {
                break;
            }
        }
        pos += 1;
    }

    Ok(word == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_max_deletions() {
        assert_eq!(max_deletions(0, Some(5)), 0);
        assert_eq!(max_deletions(1, Some(2)), 1);
        assert_eq!(max_deletions(5, Some(10)), 3);
        assert_eq!(max_deletions(5, Some(2)), 2);
        assert_eq!(max_deletions(10, None), 5);
        assert_eq!(max_deletions(4, Some(0)), 0);
    }

    #[test]
    fn test_zero_deletions_lowercases() {
        assert_eq!(generate_deletions("Orange", 0).unwrap(), vec!["orange"]);
    }

    #[test]
    fn test_one_deletion() {
        let generated = generate_deletions("orange", 1).unwrap();
        assert_eq!(
            generated,
            vec!["range", "oange", "ornge", "orage", "orane", "orang"]
        );
    }

    #[test]
    fn test_two_deletions() {
        let generated = generate_deletions("orange", 2).unwrap();
        let expected = vec![
            "rnge", "rage", "rane", "rang", "oage", "oane", "oang", "orne", "orng", "orag",
        ];
        assert_eq!(generated, expected);
    }

    #[test]
    fn test_three_deletions() {
        let generated = generate_deletions("oranges", 3).unwrap();
        let expected: Vec<String> = [
            "rnes", "rngs", "rnge", "rags", "rage", "rane", "oags", "oage", "oane", "orne",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(sorted(generated), sorted(expected));
    }

    #[test]
    fn test_single_character_word() {
        assert_eq!(generate_deletions("a", 1).unwrap(), vec![""]);
    }

    #[test]
    fn test_doubled_letters_yield_duplicates() {
        let generated = generate_deletions("miss", 1).unwrap();
        assert_eq!(generated, vec!["iss", "mss", "mis", "mis"]);
    }

    #[test]
    fn test_variant_count_and_length() {
        for word in ["a", "ab", "abc", "abcdefg", "abcdefghij"] {
            let len = word.chars().count();
            for k in 1..=max_deletions(len, None) {
                let generated = generate_deletions(word, k).unwrap();
                assert_eq!(generated.len(), deletion_count(len, k), "{word} k={k}");
                assert!(generated.iter().all(|v| v.chars().count() == len - k));
            }
        }
        assert_eq!(deletion_count(6, 2), 10);
        assert_eq!(deletion_count(7, 3), 10);
        assert_eq!(deletion_count(4, 3), 0);
    }

    #[test]
    fn test_too_many_deletions_fails() {
        let err = generate_deletions("cats", 3).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(generate_deletions("", 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_non_ascii_word() {
        let generated = generate_deletions("Äpfel", 1).unwrap();
        assert_eq!(generated[0], "pfel");
        assert_eq!(generated[1], "äfel");
    }

    #[test]
    fn test_is_possible_misprint() {
        assert!(is_possible_misprint("Hello", "hllo", 1).unwrap());
        assert!(is_possible_misprint("Hello", "hlo", 2).unwrap());
        assert!(!is_possible_misprint("Hello", "heo", 2).unwrap());
        assert!(is_possible_misprint("hello", "ello", 1).unwrap());
        assert!(is_possible_misprint("hello", "hell", 1).unwrap());
    }

    #[test]
    fn test_is_possible_misprint_repeated_letters() {
        assert!(is_possible_misprint("helll", "hel", 2).unwrap());
        assert!(!is_possible_misprint("hellll", "hel", 3).unwrap());
        assert!(!is_possible_misprint("hhhhelo", "helo", 3).unwrap());
    }

    #[test]
    fn test_greedy_check_misses_some_repeated_letter_misprints() {
        for (word, variant) in [("aaba", "aa"), ("bbab", "bb"), ("aabab", "aab")] {
            assert!(generate_deletions(word, 2)
                .unwrap()
                .contains(&variant.to_string()));
            assert!(!is_possible_misprint(word, variant, 2).unwrap());
        }
    }

    #[test]
    fn test_is_possible_misprint_length_mismatch() {
        assert!(!is_possible_misprint("hello", "hel", 1).unwrap());
        assert!(!is_possible_misprint("ab", "", 2).unwrap());
        assert!(is_possible_misprint("a", "", 1).unwrap());
    }

    #[test]
    fn test_is_possible_misprint_invalid_arguments() {
        assert!(is_possible_misprint("hello", "hello", 0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(is_possible_misprint("", "", 1)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_greedy_check_agrees_on_distinct_letters() {
        for word in ["orange", "oranges", "plaint"] {
            for k in 1..=max_deletions(word.len(), None) {
                for variant in generate_deletions(word, k).unwrap() {
                    assert!(
                        is_possible_misprint(word, &variant, k).unwrap(),
                        "{word} -> {variant} ({k})"
                    );
                }
            }
        }
    }
}
