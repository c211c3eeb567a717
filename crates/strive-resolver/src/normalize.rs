//! Name normalization for substring matching.
//!
//! Filenames are typed by hand on Turkish keyboards, so the same word shows
//! up both with and without its Turkish letters. Both sides of every
//! comparison are normalized: Turkish letters are folded to their closest
//! Latin letter, then the text is lowercased.

/// Fold one Turkish letter to its closest Latin letter.
///
/// Letters outside the Turkish set are returned unchanged.
pub fn fold_turkish(c: char) -> char {
    match c {
        'ı' => 'i',
        'İ' => 'I',
        'ç' => 'c',
        'Ç' => 'C',
        'ğ' => 'g',
        'Ğ' => 'G',
        'ö' => 'o',
        'Ö' => 'O',
        'ş' => 's',
        'Ş' => 'S',
        'ü' => 'u',
        'Ü' => 'U',
        other => other,
    }
}

/// Combining marks that spell Turkish letters in decomposed (NFD) text.
///
/// Cedilla (ç, ş), breve (ğ), diaeresis (ö, ü) and dot above (İ). Dropping
/// them leaves the base letter, which is what [`fold_turkish`] yields for the
/// precomposed form.
pub fn is_turkish_combining_mark(c: char) -> bool {
    matches!(c, '\u{0327}' | '\u{0306}' | '\u{0308}' | '\u{0307}')
}

/// Normalize text for matching.
///
/// Folding happens before lowercasing: `'İ'.to_lowercase()` would otherwise
/// produce `i` followed by a combining dot. Decomposed filenames, as macOS
/// stores them, fold the same way as precomposed ones. Other accents are
/// kept.
///
/// # Examples
///
/// ```
/// use strive_resolver::normalize::normalize;
///
/// assert_eq!(normalize("kırmızı"), normalize("kirmizi"));
/// assert_eq!(normalize("ÇADIR_Ön"), "cadir_on");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !is_turkish_combining_mark(*c))
        .map(fold_turkish)
        .flat_map(char::to_lowercase)
        .collect()
}
