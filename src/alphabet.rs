/// Trims surrounding whitespace and optionally upper-cases ASCII letters.
/// Anything else, including non-ASCII case, is left alone.
pub fn normalize(s: &str, uppercase: bool) -> String {
    let s = s.trim();
    if uppercase {
        s.to_ascii_uppercase()
    } else {
        s.to_string()
    }
}


#[cfg(test)]
mod tests {
    use crate::alphabet::normalize;

    #[test]
    fn trims_and_folds_ascii_only() {
        assert_eq!(normalize("  cat\t", false), "cat");
        assert_eq!(normalize(" Café ", true), "CAFé");
        assert_eq!(normalize("\r\n", true), "");
    }
}
