use crate::alphabets::Alphabet;

/// Strict RNA alphabet: the four bases with uracil in place of thymine.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGU")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GAUUACA"));
    }

    #[test]
    fn thymine_is_no_word() {
        assert!(!alphabet().is_word(b"ACGT"));
    }

    #[test]
    fn number_is_no_word() {
        assert!(!alphabet().is_word(b"42"));
    }
}
