use serde::Serialize;

/// reveal.js options passed on construction. Serialized with the camelCase
/// keys reveal.js reads; plugins are resolved to JS globals by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    /// Mirror the current slide in the URL fragment.
    pub hash: bool,
    pub controls: bool,
    pub progress: bool,
    pub center: bool,
    pub transition: &'static str,
    pub background_transition: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    /// Fraction of the viewport kept empty around the slide.
    pub margin: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub keyboard: bool,
    pub overview: bool,
    pub touch: bool,
    pub embedded: bool,
    #[serde(skip)]
    pub plugins: Vec<DeckPlugin>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            hash: true,
            controls: true,
            progress: true,
            center: true,
            transition: "slide",
            background_transition: "fade",
            width: "100%",
            height: "100%",
            margin: 0.04,
            min_scale: 0.2,
            max_scale: 1.5,
            keyboard: true,
            overview: true,
            touch: true,
            embedded: false,
            plugins: vec![DeckPlugin::Highlight],
        }
    }
}

impl DeckConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Extension modules loaded by the page alongside reveal.js.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPlugin {
    Highlight,
}

impl DeckPlugin {
    /// Name of the global the plugin script registers.
    pub fn global_name(self) -> &'static str {
        match self {
            DeckPlugin::Highlight => "RevealHighlight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn default_config_serializes_with_reveal_keys() {
        let value: Value = serde_json::from_str(&DeckConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "hash": true,
                "controls": true,
                "progress": true,
                "center": true,
                "transition": "slide",
                "backgroundTransition": "fade",
                "width": "100%",
                "height": "100%",
                "margin": 0.04,
                "minScale": 0.2,
                "maxScale": 1.5,
                "keyboard": true,
                "overview": true,
                "touch": true,
                "embedded": false,
            })
        );
    }

    #[test]
    fn slides_can_scale_to_the_viewport() {
        let config = DeckConfig::default();
        assert!(config.min_scale < 1.0 && config.max_scale > 1.0);
        assert!(config.margin > 0.0 && config.margin < 0.1);
    }

    #[test]
    fn highlight_is_the_only_plugin() {
        let config = DeckConfig::default();
        assert_eq!(config.plugins, vec![DeckPlugin::Highlight]);
        assert_eq!(config.plugins[0].global_name(), "RevealHighlight");
    }
}
