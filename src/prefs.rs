//! The visitor's stored language preference.
//!
//! The preference is a single cookie named `language`, written only when
//! the visitor explicitly picks a locale and read wherever a request needs
//! one. Missing or unrecognized values fall back to Portuguese, so reads
//! never fail.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

use crate::i18n::Language;

/// Cookie key, shared with the site's markup.
pub const LANGUAGE_COOKIE: &str = "language";

/// Stored preference from `jar`, defaulting to Portuguese.
pub fn preferred_language(jar: &CookieJar) -> Language {
    jar.get(LANGUAGE_COOKIE)
        .map(|cookie| Language::from_code_or_default(cookie.value()))
        .unwrap_or_default()
}

/// Persist `lang` as the preference, returning the updated jar.
///
/// The cookie is marked permanent; the preference only changes on an
/// explicit re-selection.
pub fn remember(jar: CookieJar, lang: Language) -> CookieJar {
    let cookie = Cookie::build((LANGUAGE_COOKIE, lang.code()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build();
    jar.add(cookie)
}

/// One entry of the language selector.
#[derive(Debug, Clone, Serialize)]
pub struct SelectorOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub active: bool,
}

/// Selector state for the stored preference: every supported locale, with
/// exactly the current one marked active.
pub fn selector_options(current: Language) -> Vec<SelectorOption> {
    Language::ALL
        .iter()
        .map(|lang| SelectorOption {
            code: lang.code(),
            native_name: lang.native_name(),
            active: *lang == current,
        })
        .collect()
}
