use std::sync::Arc;

use crate::api::{self, FetchOutcome};
use crate::fetch::FetchCoordinator;
use crate::picker::Picker;

type Fetcher = Arc<dyn Fn() -> FetchOutcome + Send + Sync>;

/// Picker plus fetch lifecycle for one window instance.
pub struct CountryWindow {
    picker: Picker,
    coordinator: FetchCoordinator,
    fetcher: Fetcher,
    visible: bool,
}

#[derive(Default)]
pub struct CountryWindowBuilder {
    preselect: Option<String>,
    fetcher: Option<Fetcher>,
}

impl CountryWindowBuilder {
    pub fn preselect(mut self, country: Option<String>) -> Self {
        self.preselect = country;
        self
    }

    pub fn fetcher<F>(mut self, fetcher: F) -> Self
    where
        F: Fn() -> FetchOutcome + Send + Sync + 'static,
    {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    pub fn build(self) -> CountryWindow {
        CountryWindow {
            picker: Picker::new(self.preselect),
            coordinator: FetchCoordinator::new(),
            fetcher: self
                .fetcher
                .unwrap_or_else(|| Arc::new(api::fetch_countries) as Fetcher),
            visible: false,
        }
    }
}

impl CountryWindow {
    pub fn builder() -> CountryWindowBuilder {
        CountryWindowBuilder::default()
    }

    pub fn set_visible(&mut self, visible: bool) {
        let shown = visible && !self.visible;
        self.visible = visible;
        if !shown {
            return;
        }

        self.picker.on_shown();
        let fetcher = Arc::clone(&self.fetcher);
        self.coordinator.start_once(move || fetcher());
    }

    /// Applies a finished fetch to the picker. Returns true if one arrived.
    pub fn pump(&mut self) -> bool {
        match self.coordinator.poll() {
            Some(outcome) => {
                self.picker.apply(outcome);
                true
            }
            None => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.coordinator.in_flight()
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut Picker {
        &mut self.picker
    }
}
