use super::*;

#[test]
fn page_names_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_name(page.name()), Some(page));
    }
}

#[test]
fn index_and_html_suffix_map_to_pages() {
    assert_eq!(Page::from_name("index"), Some(Page::Home));
    assert_eq!(Page::from_name("index.html"), Some(Page::Home));
    assert_eq!(Page::from_name("tip-detail.html"), Some(Page::TipDetail));
    assert_eq!(Page::from_name("admin"), None);
}
