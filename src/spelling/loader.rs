//! Building a dictionary from a line-oriented word source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::spelling::corrector::Corrector;
use crate::spelling::index::MisprintIndex;

/// Line that ends interactive input.
pub const TERMINATOR: &str = "===";

/// Add every whitespace-delimited token of `line` as a word.
///
/// Returns how many of them were new.
pub fn add_line<I: MisprintIndex>(corrector: &mut Corrector<I>, line: &str) -> Result<usize> {
    let mut added = 0;
    for word in line.split_whitespace() {
        if corrector.add_word(word)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Read lines until end of input or, if given, a line equal to `terminator`.
///
/// Returns the number of new words.
pub fn load_words<I, R>(
    corrector: &mut Corrector<I>,
    reader: R,
    terminator: Option<&str>,
) -> Result<usize>
where
    I: MisprintIndex,
    R: BufRead,
{
    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        if terminator == Some(line.as_str()) {
            break;
        }
        added += add_line(corrector, &line)?;
    }
    Ok(added)
}

/// Load a UTF-8 word list file, one or more words per line.
pub fn load_from_file<I, P>(corrector: &mut Corrector<I>, path: P) -> Result<usize>
where
    I: MisprintIndex,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let added = load_words(corrector, BufReader::new(file), None)?;
    info!(
        "loaded {} words from {} ({} total)",
        added,
        path.display(),
        corrector.words_count()
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_add_line_skips_blanks_and_duplicates() {
        let mut corrector = Corrector::default();
        assert_eq!(add_line(&mut corrector, "  rain\tspain  Rain ").unwrap(), 2);
        assert_eq!(add_line(&mut corrector, "   ").unwrap(), 0);
        assert_eq!(corrector.words_count(), 2);
    }

    #[test]
    fn test_load_words_stops_at_terminator() {
        let mut corrector = Corrector::default();
        let input = Cursor::new("rain spain\nplain\n===\nmain\n");
        let added = load_words(&mut corrector, input, Some(TERMINATOR)).unwrap();
        assert_eq!(added, 3);
        assert_eq!(corrector.words_count(), 3);
        assert!(!corrector.correct("main").unwrap().is_exact());
    }

    #[test]
    fn test_load_words_without_terminator_reads_everything() {
        let mut corrector = Corrector::default();
        let input = Cursor::new("rain\n===\nmain");
        assert_eq!(load_words(&mut corrector, input, None).unwrap(), 3);
        assert!(corrector.correct("===").unwrap().is_exact());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "rain spain plain").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "Mainly main").unwrap();
        temp_file.flush().unwrap();

        let mut corrector = Corrector::default();
        assert_eq!(load_from_file(&mut corrector, temp_file.path()).unwrap(), 5);
        assert_eq!(corrector.get_corrected_word("mainy").unwrap(), "{Mainly main}");
    }

    #[test]
    fn test_load_missing_file() {
        let mut corrector = Corrector::default();
        let err = load_from_file(&mut corrector, "/nonexistent/dictionary.txt").unwrap_err();
        assert!(matches!(err, crate::error::MisprintError::Io(_)));
    }
}
