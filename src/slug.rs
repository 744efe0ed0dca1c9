//! Slug generation for book names.

use unicode_normalization::UnicodeNormalization;

/// Numbered book prefixes whose separator is dropped, applied in this order.
const ORDINAL_FIXUPS: [(&str, &str); 3] = [("1-", "1"), ("2-", "2"), ("3-", "3")];

/// Converts a book name into the file stem used for its JSON file.
///
/// The name is decomposed (NFKD) and every character without an ASCII
/// form is dropped, so accents fall off their base letter while scripts
/// with no Latin fallback vanish entirely. The result is lowercased,
/// spaces become hyphens, and the hyphen after a leading `1`, `2` or `3`
/// is removed. The three fixups run one after another, each rewriting
/// every match in the output of the previous one.
///
/// Other punctuation is kept as is and the result may be empty.
///
/// # Examples
///
/// ```
/// use bible_structure::slugify;
///
/// assert_eq!(slugify("1 Samuel"), "1samuel");
/// assert_eq!(slugify("Song of Songs"), "song-of-songs");
/// assert_eq!(slugify("Gênesis"), "genesis");
/// ```
pub fn slugify(name: &str) -> String {
    let ascii = name.nfkd().filter(char::is_ascii).collect::<String>();
    let mut slug = ascii.to_lowercase().replace(' ', "-");
    for (from, to) in ORDINAL_FIXUPS {
        slug = slug.replace(from, to);
    }
    slug
}
