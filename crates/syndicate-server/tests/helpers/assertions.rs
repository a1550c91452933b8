//! Custom assertions para tests.

/// Verifica que el fragmento sea el comentario de error inline.
pub fn assert_error_comment(html: &str) {
    assert!(
        html.starts_with("<!-- syndicate:"),
        "Expected an inline error comment but got: {}",
        html
    );
}

/// Verifica que el fragmento venga envuelto para el modo dado.
pub fn assert_wrapped(html: &str, mode: &str) {
    let marker = format!("<!-- syndicate output: {mode} -->");
    assert!(
        html.starts_with(&marker),
        "Expected output marker for '{}' but got: {}",
        mode,
        html
    );
    if mode != "json" {
        let class = format!("syndicate-wrapper syndicate-{mode}");
        assert!(html.contains(&class), "Missing wrapper class '{}'", class);
    }
}

/// Verifica que `needles` aparezcan en ese orden.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{}' missing or out of order in: {}", needle, html),
        }
    }
}
