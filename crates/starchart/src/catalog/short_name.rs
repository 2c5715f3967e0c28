/// Derives the short display name of a catalog system name.
///
/// The name is cut at its first `(`, every `glyph` is removed along with
/// bracketed citation markers such as `[a]` or `[12]`, and whitespace is
/// collapsed and trimmed. Short names are the keys for labels and links.
///
/// # Examples
///
/// ```
/// # use starchart::catalog::short_name;
/// assert_eq!(short_name("Proxima Centauri (V645 Centauri)", "§"), "Proxima Centauri");
/// assert_eq!(short_name("§ Luhman 16 A[12]", "§"), "Luhman 16 A");
/// ```
pub fn short_name(system_name: &str, glyph: &str) -> String {
    let head = system_name
        .split_once('(')
        .map_or(system_name, |(head, _)| head);

    let without_glyph = if glyph.is_empty() {
        head.to_string()
    } else {
        head.replace(glyph, " ")
    };

    let mut stripped = String::with_capacity(without_glyph.len());
    let mut bracket_depth = 0usize;
    for c in without_glyph.chars() {
        match c {
            '[' => bracket_depth += 1,
            ']' if bracket_depth > 0 => bracket_depth -= 1,
            _ if bracket_depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
