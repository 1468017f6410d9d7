use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::Lazy;

const NAVBAR_LOGO: Asset = asset!("/assets/brand/iso-white.svg");

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: String,
}

/// Navigation entries in display order. Labels come from the string catalog.
pub static NAV_ENTRIES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    i18n::init();
    vec![
        NavEntry {
            path: "/",
            label: t!("nav-home"),
        },
        NavEntry {
            path: "/data-visualization",
            label: t!("nav-data-visualization"),
        },
        NavEntry {
            path: "/supervised-learning",
            label: t!("nav-supervised-learning"),
        },
    ]
});

/// Exact match only: no prefix matching, no trailing-slash or case folding.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

fn link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// `aria-current` value; the attribute is omitted for inactive links.
fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}

/// Top navigation. `current_path` is the router's current location.
#[component]
pub fn NavBar(current_path: String) -> Element {
    i18n::init();

    #[cfg(debug_assertions)]
    {
        dioxus::logger::tracing::debug!("[nav] render current_path={current_path}");
    }

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    img {
                        class: "navbar__logo",
                        src: NAVBAR_LOGO,
                        alt: t!("nav-logo-alt"),
                    }
                }

                nav { class: "navbar__links",
                    for entry in NAV_ENTRIES.iter() {
                        {
                            let active = is_active(&current_path, entry.path);
                            rsx! {
                                Link {
                                    key: "{entry.path}",
                                    class: "{link_class(active)}",
                                    aria_current: aria_current(active),
                                    to: entry.path,
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::LESSONS;

    #[test]
    fn active_only_on_exact_match() {
        assert!(is_active("/data-visualization", "/data-visualization"));
        assert!(!is_active("/", "/data-visualization"));
        assert!(!is_active("/data-visualization/", "/data-visualization"));
        assert!(!is_active("/data-visualization", "/"));
        assert!(!is_active("/Data-Visualization", "/data-visualization"));
    }

    #[test]
    fn exactly_one_entry_active_for_each_known_path() {
        for current in ["/", "/data-visualization", "/supervised-learning"] {
            let active = NAV_ENTRIES
                .iter()
                .filter(|entry| is_active(current, entry.path))
                .count();
            assert_eq!(active, 1, "path {current}");
        }
    }

    #[test]
    fn lesson_entries_follow_landing_order() {
        let lesson_paths: Vec<String> = LESSONS.iter().map(|lesson| lesson.path()).collect();
        let nav_paths: Vec<String> = NAV_ENTRIES
            .iter()
            .skip(1)
            .map(|entry| entry.path.to_string())
            .collect();
        assert_eq!(nav_paths, lesson_paths);
    }

    #[test]
    fn labels_come_from_catalog() {
        assert_eq!(NAV_ENTRIES[0].label, "🏠 Home");
        assert_eq!(NAV_ENTRIES[1].label, "📊 Visualização de Dados");
    }

    #[test]
    fn active_class_marks_current_entry() {
        assert_eq!(link_class(true), "navbar__link navbar__link--active");
        assert_eq!(link_class(false), "navbar__link");
    }

    #[test]
    fn only_the_active_link_is_the_current_page() {
        assert_eq!(aria_current(true), Some("page"));
        assert_eq!(aria_current(false), None);
    }
}
