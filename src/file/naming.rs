/// Punctuation allowed in filenames besides ASCII letters and digits
const SAFE_PUNCTUATION: &[char] = &['_', '@', '.', '-'];

/// Trimmed from both ends after substitution (spaces have become `_` by then)
const TRIM_CHAR: char = '_';

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&c)
}

/// Make an arbitrary string safe to use as a filename.
///
/// Every character outside `[A-Za-z0-9_@.-]` is replaced by exactly one `_`
/// (runs are not merged), then leading and trailing `_` are trimmed.
/// Non-ASCII letters count as unsafe.
pub fn clean_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_safe(c) { c } else { '_' })
        .collect();

    replaced.trim_matches(TRIM_CHAR).to_string()
}
