//! Renders the configured presets as a table.

use crate::config::Preset;

/// Table rendering for a slice of [`Preset`]s.
pub trait PresetExt {
    /// Renders the presets with the columns `NAME`, `VERSION`, `IMAGE` and
    /// `ELASTICSEARCH URL`. The preset named `default_preset` is marked with
    /// `*`.
    fn render_table(&self, default_preset: &str) -> String;
}

impl PresetExt for [Preset] {
    fn render_table(&self, default_preset: &str) -> String {
        let rows = self.iter().map(|preset| {
            let name = if preset.name == default_preset {
                format!("{} *", preset.name)
            } else {
                preset.name.clone()
            };
            [
                name,
                preset.params.version.clone(),
                preset.params.image(),
                preset.params.elasticsearch_url.clone(),
            ]
        });

        super::new_table(["NAME", "VERSION", "IMAGE", "ELASTICSEARCH URL"], rows)
    }
}
