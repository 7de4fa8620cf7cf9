use crate::parser::slug::create_slug;
use crate::services::loader;

#[test]
fn test_create_slug_basic() {
    assert_eq!(create_slug("Hello World!"), "hello-world");
    assert_eq!(create_slug("Two Sum"), "two-sum");
    assert_eq!(create_slug("LRU Cache (146)"), "lru-cache-146");
}

// runs of punctuation and whitespace collapse into one hyphen, and the edges are trimmed
#[test]
fn test_create_slug_collapses_and_trims() {
    assert_eq!(create_slug("  --Rust   &&  Go--  "), "rust-go");
    assert_eq!(create_slug("a...b___c"), "a-b-c");
    assert_eq!(create_slug("!!!"), "");
    assert_eq!(create_slug(""), "");
}

// non-ascii letters are outside [a-z0-9] and act as separators
#[test]
fn test_create_slug_non_ascii() {
    assert_eq!(create_slug("Café Notes"), "caf-notes");
    assert_eq!(create_slug("日本語 intro"), "intro");
}

#[test]
fn test_create_slug_output_alphabet_and_determinism() {
    let titles = [
        "Hello World!",
        "System Design: Rate Limiter",
        "  leading and trailing  ",
        "Ünïcödé -- mixed 42",
        "---",
        "Merkle Trees & Proofs (Part 2)",
    ];

    for title in titles {
        let slug = create_slug(title);
        assert_eq!(slug, create_slug(title));
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}

// the loader re-exports the same function, so both sides always agree
#[test]
fn test_loader_slug_matches_builder_slug() {
    let title = "Consensus: Raft vs. Paxos";
    assert_eq!(loader::create_slug(title), create_slug(title));
}
