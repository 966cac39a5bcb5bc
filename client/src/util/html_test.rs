use super::*;

#[test]
fn escape_replaces_markup_characters() {
    assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
}

#[test]
fn escape_leaves_plain_text_alone() {
    assert_eq!(escape("Café 中文"), "Café 中文");
}

#[test]
fn attr_selector_quotes_value() {
    assert_eq!(attr_selector("data-tip-id", "tip-1"), r#"[data-tip-id="tip-1"]"#);
    assert_eq!(attr_selector("data-tip-id", r#"a"b\c"#), r#"[data-tip-id="a\"b\\c"]"#);
}
