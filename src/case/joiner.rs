use unicode_segmentation::UnicodeSegmentation;

/// Upper-case the first grapheme cluster and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_uppercase();
            result.push_str(&graphemes.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

pub fn camel<S: AsRef<str>>(words: &[S]) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(&word.as_ref().to_lowercase());
        } else {
            result.push_str(&capitalize(word.as_ref()));
        }
    }
    result
}

pub fn pascal<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(|w| capitalize(w.as_ref())).collect()
}

/// Lower-case every word and join with `sep`
pub fn separated<S: AsRef<str>>(words: &[S], sep: char) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push(sep);
        }
        result.push_str(&word.as_ref().to_lowercase());
    }
    result
}
