//! Single-instance map widget handling.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Coordinate, error::MapError};

pub const DEFAULT_ZOOM: u8 = 8;
pub const MAP_CONTAINER: &str = "map";
pub const SEARCH_CONTROL_PROVIDER: &str = "yandex#search";

/// Initial state of a map instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapState {
    pub center: Coordinate,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    pub search_control_provider: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self { search_control_provider: SEARCH_CONTROL_PROVIDER.to_string() }
    }
}

/// A third-party interactive map library.
#[async_trait]
pub trait MapBackend: Send + Sync + Debug {
    type Instance: Send + Debug;

    /// Resolves once the library is loaded.
    async fn ready(&self) -> Result<(), MapError>;

    fn create(
        &mut self,
        container: &str,
        state: &MapState,
        options: &MapOptions,
    ) -> Result<Self::Instance, MapError>;

    fn destroy(&mut self, instance: Self::Instance);
}

/// Keeps zero or one live map. Re-centering destroys the current instance
/// and builds a fresh one.
#[derive(Debug)]
pub struct MapAdapter<B: MapBackend> {
    backend: B,
    options: MapOptions,
    current: Option<B::Instance>,
}

impl<B: MapBackend> MapAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, options: MapOptions::default(), current: None }
    }

    pub async fn show(&mut self, center: Coordinate) -> Result<&B::Instance, MapError> {
        self.backend.ready().await?;

        if let Some(old) = self.current.take() {
            tracing::debug!("destroying previous map instance");
            self.backend.destroy(old);
        }

        let state = MapState { center, zoom: DEFAULT_ZOOM };
        let instance = self.backend.create(MAP_CONTAINER, &state, &self.options)?;

        Ok(self.current.insert(instance))
    }

    pub fn is_shown(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&B::Instance> {
        self.current.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingBackend {
        next_id: u32,
        live: Vec<u32>,
        fail_ready: bool,
    }

    #[async_trait]
    impl MapBackend for CountingBackend {
        type Instance = (u32, MapState);

        async fn ready(&self) -> Result<(), MapError> {
            if self.fail_ready {
                return Err(MapError::NotReady("script blocked".into()));
            }
            Ok(())
        }

        fn create(
            &mut self,
            container: &str,
            state: &MapState,
            options: &MapOptions,
        ) -> Result<Self::Instance, MapError> {
            assert_eq!(container, MAP_CONTAINER);
            assert_eq!(options.search_control_provider, SEARCH_CONTROL_PROVIDER);
            self.next_id += 1;
            self.live.push(self.next_id);
            Ok((self.next_id, *state))
        }

        fn destroy(&mut self, instance: Self::Instance) {
            self.live.retain(|id| *id != instance.0);
        }
    }

    #[tokio::test]
    async fn second_show_replaces_first() {
        let mut adapter = MapAdapter::new(CountingBackend::default());

        adapter.show(Coordinate::new(55.75, 37.61)).await.unwrap();
        let (id, state) = *adapter.show(Coordinate::new(59.93, 30.31)).await.unwrap();

        assert_eq!(id, 2);
        assert_eq!(state.zoom, DEFAULT_ZOOM);
        assert_eq!(state.center, Coordinate::new(59.93, 30.31));
        assert_eq!(adapter.backend().live, vec![2]);
        assert_eq!(adapter.current().map(|(id, _)| *id), Some(2));
    }

    #[tokio::test]
    async fn not_ready_leaves_no_instance() {
        let mut adapter =
            MapAdapter::new(CountingBackend { fail_ready: true, ..Default::default() });

        assert!(adapter.show(Coordinate::new(0.0, 0.0)).await.is_err());
        assert!(!adapter.is_shown());
        assert!(adapter.current().is_none());
        assert!(adapter.backend().live.is_empty());
    }
}
