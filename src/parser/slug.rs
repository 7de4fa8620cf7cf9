/// Derives the URL slug for a title.
///
/// The title is lower-cased, every run of characters outside `[a-z0-9]` collapses into a single
/// hyphen, and leading/trailing hyphens are dropped. `"Hello World!"` becomes `"hello-world"`.
pub fn create_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // only emit the separator once something follows it, which also trims the tail
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
