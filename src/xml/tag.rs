const SEPARATORS: [char; 4] = ['_', '.', '-', ' '];

/// Rewrite a tag name into its canonical camel-case token.
///
/// Words are split at runs of `_ . - space`, at a lower-case letter or digit
/// followed by an upper-case letter, and before the last capital of an
/// upper-case run that continues in lower case (`IBUMethod` -> `ibu`, `Method`).
/// The first word is lower-cased, every later word is capitalized.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (i, word) in split_words(name).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        if SEPARATORS.contains(&c) {
            if let Some(s) = start.take() {
                words.push(&name[s..idx]);
            }
            continue;
        }

        if let Some(s) = start {
            let prev = chars[pos - 1].1;
            let next = chars.get(pos + 1).map(|&(_, n)| n);
            let lower_to_upper = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.map_or(false, |n| n.is_lowercase());

            if lower_to_upper || acronym_end {
                words.push(&name[s..idx]);
                start = Some(idx);
            }
        } else {
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        words.push(&name[s..]);
    }

    words
}
