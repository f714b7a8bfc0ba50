//! Integration tests for the full stop-word filtering pipeline.

use std::io::Write;

use sieva::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

#[test]
fn test_file_to_terms_pipeline() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let stop_words = write_file(&dir, "stopwords.txt", "the\na\nand\nof\n");
    let text = write_file(
        &dir,
        "input.txt",
        "The war, AND the peace of a long winter.",
    );

    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_words(&stop_words)?;

    let file = std::fs::File::open(&text).unwrap();
    let terms: Result<Vec<String>> = analyzer.terms(file).collect();

    assert_eq!(terms?, vec!["war", "peace", "long", "winter"]);
    Ok(())
}

#[test]
fn test_every_stop_word_is_recognized() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let words = ["a", "an", "and", "are", "as", "at", "be", "but", "by", "the"];
    let stop_words = write_file(&dir, "stopwords.txt", &words.join("\n"));

    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_words(&stop_words)?;

    for word in words {
        assert!(
            analyzer.dfa().accepts(word.as_bytes()),
            "automaton should accept {word:?}"
        );
        assert!(
            analyzer.analyze(word)?.is_empty(),
            "tokenizer should suppress {word:?}"
        );
    }

    // Near-misses pass through.
    for word in ["ax", "ann", "thee", "buts"] {
        assert_eq!(analyzer.analyze(word)?, vec![word]);
    }
    Ok(())
}

#[test]
fn test_reordered_and_duplicated_list_is_equivalent() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let plain = write_file(&dir, "plain.txt", "alpha\nbeta\ngamma\n");
    let noisy = write_file(
        &dir,
        "noisy.txt",
        "gamma\nbeta\n\nalpha\nbeta\n\ngamma\nalpha\n",
    );

    let mut a = LexicalAnalyzer::new();
    a.set_stop_words(&plain)?;
    let mut b = LexicalAnalyzer::new();
    b.set_stop_words(&noisy)?;

    let text = "alpha beat beta gamma gamut delta";
    assert_eq!(a.analyze(text)?, b.analyze(text)?);
    assert_eq!(a.analyze(text)?, vec!["beat", "gamut", "delta"]);
    Ok(())
}

#[test]
fn test_idempotent_rebuild_from_same_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let stop_words = write_file(&dir, "stopwords.txt", "the\nquick\n");

    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_words(&stop_words)?;
    let first = analyzer.analyze("the quick brown fox")?;

    analyzer.set_stop_words(&stop_words)?;
    let second = analyzer.analyze("the quick brown fox")?;

    assert_eq!(first, second);
    assert_eq!(first, vec!["brown", "fox"]);
    Ok(())
}

#[test]
fn test_empty_stop_word_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let stop_words = write_file(&dir, "empty.txt", "");

    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_words(&stop_words)?;

    assert_eq!(
        analyzer.analyze("Every Single word Survives")?,
        vec!["every", "single", "word", "survives"]
    );
    Ok(())
}

#[test]
fn test_all_stop_words_input_yields_end_of_stream() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let stop_words = write_file(&dir, "stopwords.txt", "a\nthe\n");

    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_words(&stop_words)?;

    let mut reader = CharReader::new(&b"a the a"[..]);
    assert_eq!(analyzer.next_term(&mut reader)?, None);
    Ok(())
}

#[test]
fn test_spec_example_sequence() -> Result<()> {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.set_stop_word_list(["the"]);

    let mut reader = CharReader::new(&b"The Quick fox"[..]);
    assert_eq!(analyzer.next_term(&mut reader)?.as_deref(), Some("quick"));
    assert_eq!(analyzer.next_term(&mut reader)?.as_deref(), Some("fox"));
    assert_eq!(analyzer.next_term(&mut reader)?, None);
    Ok(())
}

#[test]
fn test_oversized_term_surfaces_error_and_recovers() {
    let mut analyzer = LexicalAnalyzer::new().with_max_term_len(12);
    analyzer.set_stop_word_list(["the"]);

    let mut reader = CharReader::new(&b"the reasonable incomprehensibilities end"[..]);

    assert_eq!(
        analyzer.next_term(&mut reader).unwrap().as_deref(),
        Some("reasonable")
    );

    match analyzer.next_term(&mut reader) {
        Err(SievaError::TermTooLong { len, max }) => {
            assert_eq!(len, "incomprehensibilities".len());
            assert_eq!(max, 12);
        }
        other => panic!("expected TermTooLong, got {other:?}"),
    }

    assert_eq!(analyzer.next_term(&mut reader).unwrap().as_deref(), Some("end"));
    assert_eq!(analyzer.next_term(&mut reader).unwrap(), None);
}
