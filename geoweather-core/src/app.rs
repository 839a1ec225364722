//! Controller that wires validation, fetching, the map and history together.

use chrono::Timelike;

use crate::{
    Coordinate,
    error::AppError,
    format::{
        UNKNOWN_PLACE, WIND_DIRECTION_TEXT, humidity_text, icon_url, pressure_text,
        temperature_text, wind_text,
    },
    history::{History, HistoryPanel},
    map::{MapAdapter, MapBackend},
    provider::{TimeSource, WeatherSource},
    time::local_time,
    validate::{InputMarks, check_input_validity},
    view::{Region, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Input failed range validation; nothing was fetched.
    Rejected,
    /// Map and history were updated. Display regions are only refreshed
    /// when the fetches themselves succeeded.
    Completed,
}

/// Owns all per-session state: input marks, history, the history panel and
/// the map handle. Lookups take `&mut self`, so one controller runs one
/// lookup at a time.
#[derive(Debug)]
pub struct App<W, T, M: MapBackend, V> {
    weather: W,
    time: T,
    view: V,
    icon_base: String,
    marks: InputMarks,
    history: History,
    panel: HistoryPanel,
    map: MapAdapter<M>,
}

impl<W, T, M, V> App<W, T, M, V>
where
    W: WeatherSource,
    T: TimeSource,
    M: MapBackend,
    V: View,
{
    pub fn new(weather: W, time: T, map: M, view: V, icon_base: impl Into<String>) -> Self {
        Self {
            weather,
            time,
            view,
            icon_base: icon_base.into(),
            marks: InputMarks::default(),
            history: History::new(),
            panel: HistoryPanel::default(),
            map: MapAdapter::new(map),
        }
    }

    /// Handles one "get weather" action for raw input text.
    pub async fn get_weather(
        &mut self,
        latitude: &str,
        longitude: &str,
    ) -> Result<LookupOutcome, AppError> {
        let coordinate = Coordinate::parse(latitude, longitude);

        let has_error =
            check_input_validity(&mut self.marks, coordinate.latitude, coordinate.longitude);
        self.view.mark_inputs(&self.marks);
        if has_error {
            tracing::warn!(latitude, longitude, "coordinate out of range");
            return Ok(LookupOutcome::Rejected);
        }

        self.show_weather(&coordinate).await;

        self.map.show(coordinate).await.map_err(AppError::ShowWeather)?;

        self.history.add(latitude, longitude);
        self.panel.fit(&self.history);
        self.view.show_history(&self.history, &self.panel);

        Ok(LookupOutcome::Completed)
    }

    /// Opens or closes the history panel.
    pub fn toggle_history(&mut self) {
        self.panel.toggle(&self.history);
        self.view.show_history(&self.history, &self.panel);
    }

    async fn show_weather(&mut self, coordinate: &Coordinate) {
        let reading = match self.weather.current(coordinate).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::error!(error = %e, "weather fetch failed");
                return;
            }
        };

        self.view.render(Region::Temperature, temperature_text(reading.temperature_c));
        self.view.render(Region::FeelsLike, temperature_text(reading.feels_like_c));
        self.view.render(Region::Pressure, pressure_text(reading.pressure_hpa));
        self.view.render(Region::Humidity, humidity_text(reading.humidity_pct));
        self.view.render(Region::WindSpeed, wind_text(reading.wind_speed_kmh));
        self.view.render(Region::WindDirection, WIND_DIRECTION_TEXT.to_string());

        let place = reading.place.unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        self.view.render(Region::Place, place);

        self.show_time(reading.timezone_offset_s).await;

        self.view.set_icon(icon_url(&self.icon_base, &reading.icon));
    }

    async fn show_time(&mut self, offset_seconds: i64) {
        let now = match self.time.utc_now().await {
            Ok(now) => now,
            Err(e) => {
                tracing::error!(error = %e, "time fetch failed");
                return;
            }
        };

        let local = local_time(now.hour(), now.minute(), offset_seconds);
        self.view.render(Region::Time, local.clock());
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn marks(&self) -> &InputMarks {
        &self.marks
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn panel(&self) -> &HistoryPanel {
        &self.panel
    }

    pub fn map(&self) -> &MapAdapter<M> {
        &self.map
    }
}
