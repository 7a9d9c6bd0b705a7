//! Correcting free text one word at a time.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::spelling::corrector::Corrector;
use crate::spelling::index::MisprintIndex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Iterate over the words of a line, as the corrector sees them.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(line).map(|m| m.as_str())
}

/// Replace every word in `line` with its correction, leaving punctuation and
/// whitespace untouched.
pub fn correct_line<I: MisprintIndex>(corrector: &Corrector<I>, line: &str) -> Result<String> {
    let mut failure = None;
    let corrected = WORD.replace_all(line, |caps: &Captures<'_>| {
        match corrector.get_corrected_word(&caps[0]) {
            Ok(word) => word,
            Err(e) => {
                failure.get_or_insert(e);
                caps[0].to_string()
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(corrected.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> Corrector {
        let mut corrector = Corrector::default();
        for word in "rain spain plain plaint pain main mainly the in on fall falls his was".split(' ')
        {
            corrector.add_word(word).unwrap();
        }
        corrector
    }

    #[test]
    fn test_correct_line() {
        let corrector = corrector();
        let line = "hte rame in pain fells mainy oon teh lain was hints pliant";
        assert_eq!(
            correct_line(&corrector, line).unwrap(),
            "the {rame?} in pain falls {main mainly} on the plain was {hints?} plaint"
        );
    }

    #[test]
    fn test_punctuation_is_preserved() {
        let corrector = corrector();
        assert_eq!(
            correct_line(&corrector, "  Rain, pai!  (zain)").unwrap(),
            "  Rain, pain!  ({rain pain main})"
        );
        assert_eq!(correct_line(&corrector, "").unwrap(), "");
        assert_eq!(correct_line(&corrector, "... ---").unwrap(), "... ---");
    }

    #[test]
    fn test_words() {
        let found: Vec<&str> = words("one, two;three  four").collect();
        assert_eq!(found, vec!["one", "two", "three", "four"]);
    }
}
