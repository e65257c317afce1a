//! Footer year stamp.

use web_sys::Document;

/// Write the current year into `#id`. Returns `false` if the element is absent.
pub fn stamp(document: &Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let year = js_sys::Date::new_0().get_full_year();
    target.set_text_content(Some(&year.to_string()));
    true
}
