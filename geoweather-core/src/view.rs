//! Output surface the controller renders into.
//!
//! A [`View`] is a fixed layout of named regions plus an icon slot, input
//! marks and the history panel. [`Screen`] keeps everything in memory.

use std::collections::BTreeMap;

use crate::{
    history::{History, HistoryEntry, HistoryPanel},
    validate::InputMarks,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Temperature,
    FeelsLike,
    Pressure,
    Humidity,
    WindSpeed,
    WindDirection,
    Place,
    Time,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::Temperature => "Temperature",
            Region::FeelsLike => "Feels like",
            Region::Pressure => "Pressure",
            Region::Humidity => "Humidity",
            Region::WindSpeed => "Wind speed",
            Region::WindDirection => "Wind direction",
            Region::Place => "Place",
            Region::Time => "Local time",
        }
    }

    pub const fn all() -> &'static [Region] {
        &[
            Region::Place,
            Region::Time,
            Region::Temperature,
            Region::FeelsLike,
            Region::Pressure,
            Region::Humidity,
            Region::WindSpeed,
            Region::WindDirection,
        ]
    }
}

pub trait View: Send {
    fn render(&mut self, region: Region, text: String);

    fn set_icon(&mut self, url: String);

    fn mark_inputs(&mut self, marks: &InputMarks);

    fn show_history(&mut self, history: &History, panel: &HistoryPanel);
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub regions: BTreeMap<Region, String>,
    pub icon: Option<String>,
    pub marks: InputMarks,
    pub history: Vec<HistoryEntry>,
    pub panel: HistoryPanel,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }
}

impl View for Screen {
    fn render(&mut self, region: Region, text: String) {
        self.regions.insert(region, text);
    }

    fn set_icon(&mut self, url: String) {
        self.icon = Some(url);
    }

    fn mark_inputs(&mut self, marks: &InputMarks) {
        self.marks = *marks;
    }

    fn show_history(&mut self, history: &History, panel: &HistoryPanel) {
        self.history = history.iter().cloned().collect();
        self.panel = *panel;
    }
}
