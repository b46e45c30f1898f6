const INVISIBLE: [char; 4] = ['\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}'];

/// Strips byte-order marks and zero-width characters, then collapses whitespace.
/// Case is preserved: attribute codes are case-sensitive.
pub(crate) fn normalize_header(value: &str) -> String {
    collapse(&value.replace(INVISIBLE, ""))
}

pub(crate) fn normalize_player_name(value: &str) -> String {
    collapse(&value.replace(INVISIBLE, ""))
}

pub(crate) fn is_name_header(header: &str) -> bool {
    header.eq_ignore_ascii_case("name")
}

fn collapse(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_loses_bom_and_padding_but_keeps_case() {
        assert_eq!(normalize_header("\u{feff} Name "), "Name");
        assert_eq!(normalize_header("OtB\u{200b}"), "OtB");
        assert!(is_name_header(&normalize_header("\u{feff}NAME")));
    }

    #[test]
    fn player_names_collapse_inner_whitespace() {
        assert_eq!(normalize_player_name("  Luis   Díaz "), "Luis Díaz");
    }
}
