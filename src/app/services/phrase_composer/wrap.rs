//! Line wrapping for narrative products

/// Break text into lines of at most `width` characters at spaces
///
/// Existing line breaks are kept. A single word longer than `width` stays
/// whole on its own line. Trailing spaces at a break are dropped.
pub fn insert_new_lines(text: &str, width: usize) -> String {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut rest = paragraph.trim_end();

        while rest.chars().count() > width {
            let within = rest
                .char_indices()
                .take(width + 1)
                .filter(|(_, ch)| *ch == ' ')
                .map(|(index, _)| index)
                .filter(|index| *index > 0)
                .last();
            let Some(cut) = within.or_else(|| rest.find(' ')) else {
                break;
            };

            lines.push(rest[..cut].trim_end().to_string());
            rest = rest[cut..].trim_start();
        }

        lines.push(rest.to_string());
    }

    lines.join("\n")
}
