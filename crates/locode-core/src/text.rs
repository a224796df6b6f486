// crates/locode-core/src/text.rs

/// Title-cases a string: a letter following a non-letter starts a word and is
/// upper-cased, every other letter is lower-cased.
///
/// ```rust
/// use locode_core::text::title_case;
///
/// assert_eq!(title_case("FRANCE"), "France");
/// assert_eq!(title_case("CÔTE D'IVOIRE"), "Côte D'Ivoire");
/// assert_eq!(title_case("KOREA, REPUBLIC OF"), "Korea, Republic Of");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn words_split_on_any_non_letter() {
        assert_eq!(title_case("BOSNIA AND HERZEGOVINA"), "Bosnia And Herzegovina");
        assert_eq!(title_case("GUINEA-BISSAU"), "Guinea-Bissau");
        assert_eq!(title_case("saint helena"), "Saint Helena");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn digits_break_words() {
        assert_eq!(title_case("abc1def"), "Abc1Def");
    }
}
