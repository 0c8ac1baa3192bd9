//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Accent color for titles and active controls (indigo)
    pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);

    /// Category badge text color (teal)
    pub const BADGE: Color32 = Color32::from_rgb(13, 148, 136);
}
