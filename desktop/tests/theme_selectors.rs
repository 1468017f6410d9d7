#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop binary inlines `ui/assets/theme/main.css` with `include_str!`.
These checks keep the classes emitted by the landing page, the slide
fragments and the quiz card present in that file and in the navbar
stylesheet.

If you rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors the shared theme must define.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".button--primary",
    // Landing
    ".page-home__hero",
    ".page-home__lessons",
    ".lesson-card {",
    ".lesson-card__icon",
    ".lesson-card__topic {",
    ".lesson-card__cta",
    ".info-card {",
    ".site-footer {",
    // Deck pages
    ".deck-page {",
    ".deck-page__reveal",
    ".deck-page__back",
    ".slide__logo",
    ".slide__agenda",
    ".slide__card,",
    ".slide__band {",
    ".slide__table",
    ".slide__chart-kinds",
    ".analysis {",
    ".analysis__bullets",
    ".chart-slide {",
    ".chart-slide__placeholder",
    // Quiz
    ".quiz {",
    ".quiz__option {",
    ".quiz__option--selected",
    ".quiz__feedback--correct",
    ".quiz__feedback--incorrect",
    // Responsive block
    "@media (max-width: 720px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__logo",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__link--active",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_styles_cover_active_link() {
    let missing = missing(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "Missing navbar selectors: {missing:?}");
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn palette_uses_brand_blues() {
    for token in ["--color-primary: #42a4ff", "--color-primary-strong: #0e6cbe"] {
        assert!(THEME_CSS.contains(token), "missing palette entry `{token}`");
    }
}

#[test]
fn quiz_feedback_variants_are_paired() {
    let has_correct = THEME_CSS.contains(".quiz__feedback--correct");
    let has_incorrect = THEME_CSS.contains(".quiz__feedback--incorrect");
    assert!(
        has_correct && has_incorrect,
        "Quiz feedback selectors missing (correct: {has_correct}, incorrect: {has_incorrect})"
    );
}
