use async_trait::async_trait;
use geoweather_core::{
    History, HistoryPanel, MapBackend, MapError, MapOptions, MapState, Region, Screen, View,
    validate::{FieldMark, InputMarks},
};

/// Collects output in a [`Screen`] and prints it on request.
#[derive(Debug, Default)]
pub struct TerminalView {
    screen: Screen,
}

impl TerminalView {
    pub fn print_report(&self) {
        for region in Region::all() {
            if let Some(text) = self.screen.text(*region) {
                println!("{:<15} {text}", region.label());
            }
        }
        if let Some(icon) = &self.screen.icon {
            println!("{:<15} {icon}", "Icon");
        }
    }
}

impl View for TerminalView {
    fn render(&mut self, region: Region, text: String) {
        self.screen.render(region, text);
    }

    fn set_icon(&mut self, url: String) {
        self.screen.set_icon(url);
    }

    fn mark_inputs(&mut self, marks: &InputMarks) {
        if marks.latitude == FieldMark::Invalid {
            println!("Latitude must be within -90..90");
        } else if marks.longitude == FieldMark::Invalid {
            println!("Longitude must be within -180..180");
        }
        self.screen.mark_inputs(marks);
    }

    fn show_history(&mut self, history: &History, panel: &HistoryPanel) {
        self.screen.show_history(history, panel);
        if !panel.is_open() {
            return;
        }

        println!("History:");
        for entry in history.iter() {
            println!("  {}  lat {}  lon {}", entry.timestamp, entry.latitude, entry.longitude);
        }
    }
}

/// A map rendered as an OpenStreetMap link.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLink {
    pub url: String,
}

#[derive(Debug, Default)]
pub struct LinkMap;

#[async_trait]
impl MapBackend for LinkMap {
    type Instance = MapLink;

    async fn ready(&self) -> Result<(), MapError> {
        Ok(())
    }

    fn create(
        &mut self,
        container: &str,
        state: &MapState,
        _options: &MapOptions,
    ) -> Result<MapLink, MapError> {
        let (lat, lon) = (state.center.latitude, state.center.longitude);
        let url = format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={}/{lat}/{lon}",
            state.zoom
        );
        tracing::debug!(container, %url, "map created");
        println!("{:<15} {url}", "Map");
        Ok(MapLink { url })
    }

    fn destroy(&mut self, instance: MapLink) {
        tracing::debug!(url = %instance.url, "map destroyed");
    }
}
