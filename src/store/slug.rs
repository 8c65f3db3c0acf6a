//! URL slugs for news posts.

/// Turn a title into a lowercase, hyphen-separated slug.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing) becomes a single
/// hyphen, and a hyphen at either end is dropped:
/// - `"STEM Bootcamp 2024!"` → `"stem-bootcamp-2024"`
/// - `"  ---Weird__Title--- "` → `"weird-title"`
/// - `""` → `""`
///
/// No uniqueness is enforced; two titles may share a slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_separator = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }

    let trimmed = slug.strip_prefix('-').unwrap_or(&slug);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}
