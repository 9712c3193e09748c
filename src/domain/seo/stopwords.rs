//! English and Hindi stopword sets.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static EN_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "the a an and or but if then else when while of for to in on at from by with without as is \
     are was were be been being"
        .split_whitespace()
        .collect()
});

static HI_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "के की का हैं है और या यह था थी थे तथा लेकिन पर से में हो होना रहे रही अगर तो भी लिए तक उन \
     उस वही वहीँ एवं क्योंकि जैसे जैसेकि द्वारा नहीं बिना सभी उनका उनकी उनके कभी हमेशा आदि प्रति \
     गए गई गया करें करेगा करेंगी करना करने करनेवाला करता करती करते जिसमें जिससे जिसके जिन जिसे \
     जितना जितनी जितने"
        .split_whitespace()
        .collect()
});

/// True when the (lowercased) word is an English stopword.
pub fn is_en_stopword(word: &str) -> bool {
    EN_STOPWORDS.contains(word)
}

/// True when the word is an English or Hindi stopword.
pub fn is_stopword(word: &str) -> bool {
    EN_STOPWORDS.contains(word) || HI_STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_stopwords_match() {
        assert!(is_en_stopword("the"));
        assert!(is_en_stopword("with"));
        assert!(!is_en_stopword("minister"));
    }

    #[test]
    fn hindi_stopwords_match() {
        assert!(is_stopword("के"));
        assert!(is_stopword("लेकिन"));
        assert!(!is_stopword("कांग्रेस"));
    }

    #[test]
    fn hindi_words_are_not_english_stopwords() {
        assert!(!is_en_stopword("के"));
    }
}
