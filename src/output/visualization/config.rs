//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors for multi-profile plots (one per profile)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use diffuse_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("After 5000 steps");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
///
/// assert_eq!(config.xlabel, "x");
/// assert_eq!(config.ylabel, "C");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "C")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-profile plots
    ///
    /// If None, uses the default palette: [BLUE, RED, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "C".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// ```rust
/// use diffuse_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::profile(NO_TITLE);
/// assert_eq!(config.title, "Concentration Profile");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for a single C(x) profile
    ///
    /// Title defaults to "Concentration Profile".
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Concentration Profile".to_string()),
            ..Self::default()
        }
    }

    /// Config for several C(x) snapshots on the same axes
    ///
    /// Title defaults to "Profile Evolution".
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Profile Evolution".to_string()),
            ..Self::default()
        }
    }

    /// Config with custom colors for multi-profile plots
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        Self { series_colors: Some(colors), ..Self::default() }
    }

    /// Color for series `index`
    ///
    /// Uses custom colors if provided, otherwise falls back to the default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && let Some(color) = colors.get(index)
        {
            return *color;
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "x");
        assert_eq!(config.ylabel, "C");
        assert!(config.show_grid);
    }

    #[test]
    fn test_profile_config_titles() {
        assert_eq!(PlotConfig::profile(NO_TITLE).title, "Concentration Profile");
        assert_eq!(PlotConfig::profile("Initial profile").title, "Initial profile");
        assert_eq!(PlotConfig::profile(format!("t = {}", 6.25)).title, "t = 6.25");
    }

    #[test]
    fn test_evolution_config_default() {
        let config = PlotConfig::evolution(NO_TITLE);
        assert_eq!(config.title, "Profile Evolution");
        assert_eq!(config.xlabel, "x");
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), BLUE);
        assert_eq!(config.series_color(1), RED);
        assert_eq!(config.series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_series_color_custom_then_fallback() {
        let config = PlotConfig::series_colors(vec![GREEN, BLACK]);
        assert_eq!(config.series_color(0), GREEN);
        assert_eq!(config.series_color(1), BLACK);
        assert_eq!(config.series_color(2), GREEN); // palette index 2
    }
}
