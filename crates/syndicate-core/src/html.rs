//! Text escaping shared by every markup producer.

/// Escapes `raw` for element content or a quoted attribute value.
///
/// Uses [`ammonia::clean_text`], then restores plain spaces: a space is
/// inert in both contexts and `&#32;` only bloats the fragment. Input that
/// already spells `&#32;` keeps its `&` escaped, so it is never touched.
pub fn escape(raw: &str) -> String {
    ammonia::clean_text(raw).replace("&#32;", " ")
}
