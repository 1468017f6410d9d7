//! Slide building blocks shared by both decks.

use dioxus::prelude::*;

use crate::t;

const DECK_LOGO: Asset = asset!("/assets/brand/logo.svg");

/// Line of an agenda slide: icon, bold heading and an optional remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

/// Card of an analysis overview slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartKind {
    pub icon: &'static str,
    pub title: &'static str,
    pub examples: &'static str,
}

#[component]
pub fn DeckLogo(#[props(default)] class: String) -> Element {
    rsx! {
        img {
            class: "slide__logo {class}",
            src: DECK_LOGO,
            alt: t!("deck-logo-alt"),
        }
    }
}

/// Opening slide. The supervised-learning deck shows the logo above the title.
#[component]
pub fn TitleSlide(
    title: String,
    subtitle: String,
    #[props(default)] logo_first: bool,
) -> Element {
    rsx! {
        section { class: "slide slide--title", "data-background": "#fff",
            div { class: "slide__title-block",
                if logo_first {
                    DeckLogo {}
                }
                h1 { class: "slide__heading", "{title}" }
                h3 { class: "slide__subtitle", "{subtitle}" }
                if !logo_first {
                    DeckLogo {}
                }
            }
        }
    }
}

#[component]
pub fn AgendaSlide(items: &'static [AgendaItem]) -> Element {
    rsx! {
        section { class: "slide slide--agenda",
            h2 { class: "slide__title", "Agenda da Aula" }
            ol { class: "slide__agenda",
                for item in items.iter() {
                    li { key: "{item.title}",
                        "{item.icon} "
                        strong { "{item.title}" }
                        if let Some(detail) = item.detail {
                            " - {detail}"
                        }
                    }
                }
            }
        }
    }
}

/// Section opener listing the chart families covered next.
#[component]
pub fn OverviewSlide(title: String, lead: String, kinds: &'static [ChartKind]) -> Element {
    rsx! {
        section { class: "slide slide--overview",
            h2 { class: "slide__title", "{title}" }
            p { class: "slide__lead", "{lead}" }
            div { class: "slide__chart-kinds",
                for kind in kinds.iter() {
                    div { key: "{kind.title}", class: "chart-kind",
                        div { class: "chart-kind__icon", "{kind.icon}" }
                        h3 { "{kind.title}" }
                        p { "{kind.examples}" }
                    }
                }
            }
        }
    }
}

/// Explanation on the left, reference image on the right.
#[component]
pub fn AnalysisSlide(
    title: String,
    image_url: &'static str,
    image_caption: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "slide slide--analysis",
            h2 { class: "slide__title", "{title}" }
            div { class: "analysis",
                div { class: "analysis__text", {children} }
                figure { class: "analysis__figure",
                    img { src: image_url, alt: "{title} visualization" }
                    if let Some(caption) = image_caption {
                        figcaption { class: "slide__source", "{caption}" }
                    }
                }
            }
        }
    }
}

/// Python listing next to the area where its plot is shown in class.
#[component]
pub fn ChartSlide(title: String, code: &'static str, caption: Option<&'static str>) -> Element {
    rsx! {
        section { class: "slide slide--chart",
            h2 { class: "slide__title", "{title}" }
            div { class: "chart-slide",
                pre { class: "chart-slide__code",
                    code { class: "language-python", "data-trim": "true", "{code.trim()}" }
                }
                div { class: "chart-slide__result",
                    div { class: "chart-slide__placeholder",
                        p { "Resultado da visualização aparecerá aqui" }
                    }
                    if let Some(caption) = caption {
                        p { class: "slide__source", "{caption}" }
                    }
                }
            }
        }
    }
}

/// Labelled bullet list used by the analysis slides.
#[component]
pub fn BulletBlock(heading: String, items: &'static [&'static str]) -> Element {
    rsx! {
        h4 { class: "analysis__heading", "{heading}" }
        ul { class: "analysis__bullets",
            for item in items.iter() {
                li { key: "{item}", "• {item}" }
            }
        }
    }
}
