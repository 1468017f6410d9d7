#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::NavBar;
use ui::views::{DataVisualization, Home, SupervisedLearning};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/data-visualization")]
    DataVisualization {},
    #[route("/supervised-learning")]
    SupervisedLearning {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

const REVEAL_VERSION: &str = "5.1.0";

/// reveal.js and its highlight plugin, loaded before the app mounts so the
/// deck adapter finds `Reveal` and `RevealHighlight` on `window`.
fn reveal_head() -> String {
    let base = format!("https://cdn.jsdelivr.net/npm/reveal.js@{REVEAL_VERSION}");
    format!(
        r#"<link rel="stylesheet" href="{base}/dist/reveal.css">
<link rel="stylesheet" href="{base}/dist/theme/white.css">
<link rel="stylesheet" href="{base}/plugin/highlight/monokai.css">
<script src="{base}/dist/reveal.js"></script>
<script src="{base}/plugin/highlight/highlight.js"></script>"#
    )
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Aulas – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_custom_head(reveal_head()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Navbar layout; only the landing route is wrapped in it.
#[component]
fn DesktopNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        NavBar { current_path: route.to_string() }

        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn desktop_routes_match_web_paths() {
        for (path, route) in [
            ("/", Route::Home {}),
            ("/data-visualization", Route::DataVisualization {}),
            ("/supervised-learning", Route::SupervisedLearning {}),
        ] {
            assert_eq!(Route::from_str(path).ok(), Some(route.clone()));
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn reveal_head_loads_core_and_highlight_plugin() {
        let head = reveal_head();
        assert!(head.contains("reveal.js@5.1.0/dist/reveal.js"));
        assert!(head.contains("plugin/highlight/highlight.js"));
        assert!(head.contains("dist/reveal.css"));
    }

    #[test]
    fn reveal_head_uses_light_theme_and_monokai_code() {
        let head = reveal_head();
        assert!(head.contains("dist/theme/white.css"));
        assert!(head.contains("plugin/highlight/monokai.css"));
    }
}
