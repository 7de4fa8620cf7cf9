use crate::domain::{EntriesIndex, EntryMetadata};
use crate::parser::markdown::{compile_markdown_to_html, resolve_entry_link};

fn index_with(entries: &[(&str, &str)]) -> EntriesIndex {
    EntriesIndex {
        entries: entries
            .iter()
            .enumerate()
            .map(|(i, (filename, slug))| EntryMetadata {
                id: (i + 1).to_string(),
                slug: slug.to_string(),
                title: slug.to_string(),
                excerpt: String::new(),
                category: None,
                date: String::new(),
                tags: Vec::new(),
                filename: filename.to_string(),
            })
            .collect(),
        last_updated: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

#[test]
fn test_compile_markdown_basic() {
    let html = compile_markdown_to_html("# Title\nThis is a [link](test.md)", |link| {
        link.to_string()
    });

    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains(r#"<a href="test.md">link</a>"#));
}

#[test]
fn test_compile_markdown_tables_and_strikethrough() {
    let html = compile_markdown_to_html(
        "| n | time |\n|---|------|\n| 1 | O(n) |\n\n~~slow~~",
        |link| link.to_string(),
    );

    assert!(html.contains("<table>"));
    assert!(html.contains("<td>O(n)</td>"));
    assert!(html.contains("<del>slow</del>"));
}

#[test]
fn test_compile_markdown_passes_links_through_resolver() {
    let mut seen = Vec::new();
    let html = compile_markdown_to_html("[a](one.md) and [b](https://example.com)", |link| {
        seen.push(link.to_string());
        format!("/resolved/{}", seen.len())
    });

    assert_eq!(seen, vec!["one.md", "https://example.com"]);
    assert!(html.contains(r#"href="/resolved/1""#));
    assert!(html.contains(r#"href="/resolved/2""#));
}

#[test]
fn test_resolve_entry_link_to_known_entry() {
    let index = index_with(&[("two-sum.md", "two-sum"), ("raft.md", "raft-notes")]);

    assert_eq!(
        resolve_entry_link("two-sum.md", &index, "/journal-y"),
        "/journal-y/entry/two-sum"
    );
    assert_eq!(
        resolve_entry_link("./raft.md#election", &index, "/journal-y/"),
        "/journal-y/entry/raft-notes#election"
    );
    assert_eq!(resolve_entry_link("raft.md", &index, ""), "/entry/raft-notes");
}

#[test]
fn test_resolve_entry_link_leaves_others_untouched() {
    let index = index_with(&[("two-sum.md", "two-sum")]);

    for link in [
        "https://leetcode.com/problems/two-sum",
        "http://example.com/two-sum.md",
        "mailto:me@example.com",
        "#complexity",
        "void.md",
        "../two-sum.md",
    ] {
        assert_eq!(resolve_entry_link(link, &index, "/journal-y"), link);
    }
}

// end to end: a sibling link inside a body lands on the entry route
#[test]
fn test_compile_with_entry_resolver() {
    let index = index_with(&[("two-sum.md", "two-sum")]);
    let html = compile_markdown_to_html("See [Two Sum](./two-sum.md).", |link| {
        resolve_entry_link(link, &index, "/journal-y")
    });

    assert!(html.contains(r#"<a href="/journal-y/entry/two-sum">Two Sum</a>"#));
}
