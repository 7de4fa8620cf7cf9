use crate::domain::EntriesIndex;
use pulldown_cmark::{html, Event, Options, Parser, Tag};

fn render_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

// renders an entry body to HTML, passing every link destination through `resolver`
pub fn compile_markdown_to_html<F>(markdown: &str, mut resolver: F) -> String
where
    F: FnMut(&str) -> String,
{
    let events = Parser::new_ext(markdown, render_options()).map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: resolver(&dest_url).into(),
            title,
            id,
        }),
        other => other,
    });

    let mut html_content = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_content, events);
    html_content
}

// `./other.md#section` -> `<base_path>/entry/<slug>#section`; anything else comes back unchanged
pub fn resolve_entry_link(link: &str, index: &EntriesIndex, base_path: &str) -> String {
    if link.starts_with("http://")
        || link.starts_with("https://")
        || link.starts_with("mailto:")
        || link.starts_with('#')
    {
        return link.to_string();
    }

    let (target, fragment) = match link.split_once('#') {
        Some((target, fragment)) => (target, format!("#{}", fragment)),
        None => (link, String::new()),
    };
    let filename = target.trim_start_matches("./");

    match index.find_by_filename(filename) {
        Some(entry) => format!(
            "{}/entry/{}{}",
            base_path.trim_end_matches('/'),
            entry.slug,
            fragment
        ),
        None => link.to_string(),
    }
}
