// Flair color palette
use std::collections::HashMap;

/// Fallback color for flairs with no palette entry.
pub const DEFAULT_FLAIR_COLOR: &str = "#d4d4d4";

/// Immutable mapping from flair label to display color. Unknown flairs get
/// a visible default color rather than erroring.
#[derive(Debug, Clone)]
pub struct FlairPalette {
    colors: HashMap<String, String>,
    default_color: String,
}

impl FlairPalette {
    pub fn new(colors: HashMap<String, String>, default_color: String) -> Self {
        Self {
            colors,
            default_color,
        }
    }

    /// The palette shipped with the dataset this crate grew around.
    pub fn builtin() -> Self {
        let colors = [
            ("Support", "#0000a4"),
            ("Discussion", "#cac0d9"),
            ("Questions", "#c0adde"),
            ("Firsthand Account", "#512ed7"),
            ("News", "#7951e2"),
            ("NA", "#d4d4d4"),
            ("Trigger Warning", "#8a63e4"),
            ("Resources", "#9a75e4"),
            ("Good News", "#a888e3"),
            ("Misinformation - debunked", "#b49ae1"),
            ("Misleading and incorrect title", "#391dcd"),
            ("Deperate mod", "#0a3262"),
            ("The answer is NO.", "#1c0abe"),
        ]
        .into_iter()
        .map(|(flair, color)| (flair.to_string(), color.to_string()))
        .collect();

        Self::new(colors, DEFAULT_FLAIR_COLOR.to_string())
    }

    pub fn color_of(&self, flair: &str) -> &str {
        self.colors
            .get(flair)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    pub fn contains(&self, flair: &str) -> bool {
        self.colors.contains_key(flair)
    }

    /// Merge overrides on top of this palette, replacing the default color
    /// when one is given.
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (String, String)>,
        default_color: Option<String>,
    ) -> Self {
        for (flair, color) in overrides {
            self.colors.insert(flair, color);
        }
        if let Some(color) = default_color {
            self.default_color = color;
        }
        self
    }
}
