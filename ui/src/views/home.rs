use dioxus::prelude::*;

use crate::lessons::{LessonDescriptor, LESSONS};
use crate::t;

/// Landing page: hero, one card per lesson in the order of [`LESSONS`], the
/// two info cards and the footer.
#[component]
pub fn Home() -> Element {
    crate::i18n::init();

    #[cfg(debug_assertions)]
    {
        dioxus::logger::tracing::debug!("[home] render {} lesson cards", LESSONS.len());
    }

    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero",
                h1 { {t!("home-hero-title")} }
            }

            ul { class: "page-home__lessons",
                for lesson in LESSONS.iter() {
                    LessonCard { key: "{lesson.identifier}", lesson: *lesson }
                }
            }

            div { class: "page-home__info",
                div { class: "info-card",
                    h3 { {t!("home-about-title")} }
                    p { {t!("home-about-body")} }
                }
                div { class: "info-card",
                    h3 { {t!("home-tools-title")} }
                    p { {t!("home-tools-body")} }
                }
            }
        }

        footer { class: "site-footer",
            p { {t!("footer-text")} }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonDescriptor) -> Element {
    let path = lesson.path();

    rsx! {
        li { class: "lesson-card", "data-lesson": lesson.identifier,
            div { class: "lesson-card__icon", "{lesson.icon}" }
            h3 { class: "lesson-card__title", "{lesson.title}" }
            p { class: "lesson-card__description", "{lesson.description}" }

            div { class: "lesson-card__topics",
                for topic in lesson.topics.iter() {
                    span { key: "{topic}", class: "lesson-card__topic", "{topic}" }
                }
            }

            Link { class: "button button--primary lesson-card__cta", to: path, {t!("home-card-cta")} }
        }
    }
}
