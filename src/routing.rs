//! Localized path mapping.
//!
//! Portuguese pages live at the site root; English and Spanish pages live
//! under a `/<code>/` prefix. These functions convert between the two
//! representations and decide whether a language selection needs a
//! redirect at all. They are pure: the active language is always passed
//! in, never read from ambient state.

use crate::i18n::Language;

/// Page the contact form redirects to after a successful send.
const CONFIRMATION_PAGE: &str = "sobre.html";

/// Page served when a path has no final segment.
const INDEX_PAGE: &str = "index.html";

/// Site path for `page` in `lang`. The canonical locale is unprefixed.
pub fn localized_path(lang: Language, page: &str) -> String {
    if lang.is_canonical() {
        format!("/{page}")
    } else {
        format!("/{}/{}", lang.code(), page)
    }
}

/// Split a site path into its locale and base page name.
///
/// Unprefixed paths are Portuguese. A prefix only counts when it is a
/// whole segment, so `/essays.html` stays Portuguese while `/es/says.html`
/// is Spanish.
pub fn split_path(path: &str) -> (Language, &str) {
    let trimmed = path.trim_start_matches('/');
    for lang in Language::ALL {
        if lang.is_canonical() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix(lang.code()) {
            if let Some(rest) = rest.strip_prefix('/') {
                return (lang, final_segment(rest));
            }
        }
    }
    (Language::default(), final_segment(trimmed))
}

/// Base page name of `path`: the final segment with any locale prefix
/// removed. Paths ending in a directory resolve to the index page.
pub fn base_page(path: &str) -> &str {
    split_path(path).1
}

/// Where a selection of `lang` made on `current_path` should navigate,
/// or `None` when the path already matches. The `None` case is the guard
/// against redirect loops on same-language re-selection.
pub fn redirect_target(lang: Language, current_path: &str) -> Option<String> {
    let target = localized_path(lang, base_page(current_path));
    (target != current_path).then_some(target)
}

/// Post-submission confirmation page for `lang`.
pub fn confirmation_path(lang: Language) -> String {
    format!("{}?success=1", localized_path(lang, CONFIRMATION_PAGE))
}

fn final_segment(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    if segment.is_empty() {
        INDEX_PAGE
    } else {
        segment
    }
}
