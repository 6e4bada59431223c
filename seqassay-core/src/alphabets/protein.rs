use crate::alphabets::Alphabet;

/// Strict protein alphabet: the 20 standard one-letter amino-acid codes.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACDEFGHIKLMNPQRSTVWY")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"MKWVTFISLL"));
    }

    #[test]
    fn ambiguity_codes_are_no_word() {
        assert!(!alphabet().is_word(b"MKX"));
        assert!(!alphabet().is_word(b"MKB"));
        assert!(!alphabet().is_word(b"MKZ"));
    }

    #[test]
    fn stop_symbol_is_no_word() {
        assert!(!alphabet().is_word(b"MK*"));
    }
}
