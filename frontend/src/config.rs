//! Build-time configuration.
//!
//! Values come from environment variables at compile time (Trunk passes the
//! build environment through), so a deployment is configured by rebuilding.

pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.moneo-web.com/api/form";

/// Desktop layout starts at this viewport width, in CSS pixels.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

pub fn get_form_endpoint() -> &'static str {
    non_empty(option_env!("MONEO_FORM_ENDPOINT")).unwrap_or(DEFAULT_FORM_ENDPOINT)
}

pub fn get_ga_measurement_id() -> Option<&'static str> {
    non_empty(option_env!("MONEO_GA_MEASUREMENT_ID"))
}

pub fn get_gtm_id() -> Option<&'static str> {
    non_empty(option_env!("MONEO_GTM_ID"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Tuning for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u32,
    /// Horizontal drag distance, in pixels, past which a drag navigates.
    pub drag_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            drag_threshold: 100.0,
        }
    }
}

impl CarouselConfig {
    /// Testimonials rotate more slowly than screenshots.
    pub fn testimonials() -> Self {
        Self {
            autoplay_interval_ms: 8000,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert_eq!(config.drag_threshold, 100.0);
        assert_eq!(CarouselConfig::testimonials().autoplay_interval_ms, 8000);
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" G-123 ")), Some("G-123"));
    }

    #[test]
    fn form_endpoint_is_always_set() {
        assert!(get_form_endpoint().starts_with("http"));
    }
}
