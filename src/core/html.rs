// src/core/html.rs

// Tolerant hand-rolled scanning. The catalog page is big, machine-generated
// and full of noise; all we ever need from it is anchor targets, so there is
// no DOM, just a walk over tag openers.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Collect the `href` of every `<a …>` opener, in document order.
/// Handles single/double/unquoted values, uppercase tags, and `&amp;`.
pub fn anchor_hrefs(doc: &str) -> Vec<String> {
    let bytes = doc.as_bytes();
    let n = bytes.len();
    let mut i = 0usize;
    let mut out: Vec<String> = Vec::new();

    let next_char_pos = |from: usize, ch: u8| -> Option<usize> {
        bytes.get(from..)?.iter().position(|&c| c == ch).map(|off| from + off)
    };

    while i < n {
        // find next '<'
        let lt = match next_char_pos(i, b'<') { Some(p) => p, None => break };
        if lt + 1 >= n { break; }

        // find matching '>'
        let gt = match next_char_pos(lt + 1, b'>') { Some(p) => p, None => break };

        // opener text
        let tag_text = doc[(lt + 1)..gt].trim();

        // parse tag name
        let mut name_end = 0usize;
        for (idx, ch) in tag_text.bytes().enumerate() {
            if ch.is_ascii_alphabetic() || ch == b'/' { name_end = idx + 1; } else { break; }
        }
        let tag_name = &tag_text[..name_end]; // "a", "/a", "abbr", ...
        let (is_close, name) = if tag_name.starts_with('/') {
            (true, &tag_name[1..])
        } else {
            (false, tag_name)
        };

        if !is_close && name.eq_ignore_ascii_case("a") {
            let rest = &tag_text[name.len()..];
            if let Some(href) = attr_value(rest, "href") {
                out.push(decode_entities(&href));
            }
        }

        i = gt + 1;
    }

    out
}

/// Extract an attribute value from the remainder of a tag opener.
/// Starts after the tag name, so `data-href=` must not match `href=`.
pub fn attr_value(rest: &str, attr: &str) -> Option<String> {
    let rest_lc = to_lower(rest);
    let needle = join!(attr, "=");

    let mut from = 0usize;
    while let Some(rel) = rest_lc[from..].find(&needle) {
        let at = from + rel;
        let boundary = at == 0 || {
            let b = rest_lc.as_bytes()[at - 1];
            !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        };
        if !boundary {
            from = at + needle.len();
            continue;
        }

        let val = rest[at + needle.len()..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[start_off..].find(quote).map(|e| start_off + e)
        } else {
            // unquoted: end at first whitespace
            val.find(|c: char| c.is_ascii_whitespace())
        }.unwrap_or(val.len());

        return Some(val[start_off..end].to_string());
    }
    None
}

/// URLs in attributes arrive entity-encoded.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&").replace("&#38;", "&").replace("&nbsp;", " ")
}
