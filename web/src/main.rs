use dioxus::prelude::*;

use ui::components::NavBar;
use ui::views::{DataVisualization, Home, SupervisedLearning};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/data-visualization")]
    DataVisualization {},
    #[route("/supervised-learning")]
    SupervisedLearning {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Navbar layout; only the landing route is wrapped in it.
#[component]
fn WebNavbar() -> Element {
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
    use ui::lessons::LESSONS;

    #[test]
    fn three_literal_paths_map_to_three_views() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(
            Route::from_str("/data-visualization").ok(),
            Some(Route::DataVisualization {})
        );
        assert_eq!(
            Route::from_str("/supervised-learning").ok(),
            Some(Route::SupervisedLearning {})
        );
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::DataVisualization {}.to_string(), "/data-visualization");
        assert_eq!(Route::SupervisedLearning {}.to_string(), "/supervised-learning");
    }

    #[test]
    fn second_lesson_card_leads_to_supervised_learning() {
        assert_eq!(LESSONS.len(), 2);
        let target = LESSONS[1].path();
        assert_eq!(Route::from_str(&target).ok(), Some(Route::SupervisedLearning {}));
    }

    #[test]
    fn every_lesson_card_targets_a_declared_route() {
        for lesson in LESSONS {
            assert!(Route::from_str(&lesson.path()).is_ok(), "{}", lesson.identifier);
        }
    }
}
