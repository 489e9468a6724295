//! Settings import strings
//!
//! The app's settings page exports a layout as one string of configuration
//! lines joined by `"; "`. Each piece is sent back to the app as its own
//! line; a piece that gets lost leaves the rest applied.

/// Separator between lines in an exported settings string
pub const SETTINGS_SEPARATOR: &str = "; ";

/// Split an exported settings string into the lines to send
///
/// Each line keeps the `;` that ends it; only the space after it is the
/// separator. Empty pieces are skipped.
pub fn split_settings(data: &str) -> impl Iterator<Item = &str> {
    data.split_inclusive(SETTINGS_SEPARATOR)
        .filter_map(|piece| match piece.strip_suffix(SETTINGS_SEPARATOR) {
            Some("") => None,
            // Drop the trailing space, keep the `;`
            Some(line) => Some(&piece[..line.len() + 1]),
            None if piece.is_empty() => None,
            None => Some(piece),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_lines() {
        let mut lines = split_settings("vc;init; vc;b;2;1;0;0;");
        assert_eq!(lines.next(), Some("vc;init;"));
        assert_eq!(lines.next(), Some("vc;b;2;1;0;0;"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_trailing_empty_field_is_kept() {
        // "1;;" ends in an empty field, only "; " separates lines
        let mut lines = split_settings("vc;sl;1;-2;2;1;1;0;1;; vc;il;1;");
        assert_eq!(lines.next(), Some("vc;sl;1;-2;2;1;1;0;1;;"));
        assert_eq!(lines.next(), Some("vc;il;1;"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_pieces_skipped() {
        let mut lines = split_settings("; vc;init; ; vc;il;1;");
        assert_eq!(lines.next(), Some("vc;init;"));
        assert_eq!(lines.next(), Some("vc;il;1;"));
        assert_eq!(lines.next(), None);
        assert_eq!(split_settings("; ; ").count(), 0);
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut lines = split_settings("vc;init; vc;il;1");
        assert_eq!(lines.next(), Some("vc;init;"));
        assert_eq!(lines.next(), Some("vc;il;1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_settings("").count(), 0);
    }

    #[test]
    fn test_markup_label_survives() {
        let data = "vc;b;3;1;0;<i class=\"fa-solid fa-house\"></i>; vc;show;sl,sr;";
        let mut lines = split_settings(data);
        assert_eq!(
            lines.next(),
            Some("vc;b;3;1;0;<i class=\"fa-solid fa-house\"></i>;")
        );
        assert_eq!(lines.next(), Some("vc;show;sl,sr;"));
    }
}
