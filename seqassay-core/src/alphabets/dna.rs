use crate::alphabets::Alphabet;

/// Strict DNA alphabet: the four bases, uppercase only.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn lowercase_is_no_word() {
        assert!(!alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn ambiguity_code_is_no_word() {
        assert!(!alphabet().is_word(b"ACGTN"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }
}
