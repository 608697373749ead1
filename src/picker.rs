use crate::api::FetchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Disabled,
    Loading,
    Populated,
    Errored,
}

/// Dropdown options, selection and status label for one window.
///
/// Option 0 is always the empty choice once populated.
pub struct Picker {
    state: PickerState,
    options: Vec<String>,
    selected: usize,
    status_label: String,
    preselect: Option<String>,
    error: Option<String>,
}

impl Picker {
    pub fn new(preselect: Option<String>) -> Self {
        Self {
            state: PickerState::Disabled,
            options: Vec::new(),
            selected: 0,
            status_label: String::new(),
            preselect,
            error: None,
        }
    }

    pub fn on_shown(&mut self) {
        if self.state == PickerState::Disabled {
            tracing::debug!("picker loading");
            self.state = PickerState::Loading;
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        if self.state != PickerState::Loading {
            tracing::warn!(state = ?self.state, "ignoring fetch outcome outside of loading");
            return;
        }

        match outcome {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "loaded countries");
                self.options = std::iter::once(String::new()).chain(countries).collect();
                self.state = PickerState::Populated;
                self.apply_preselection();
            }
            Err(err) => {
                tracing::error!(error = %err, "country fetch failed");
                self.error = Some(err.to_string());
                self.state = PickerState::Errored;
            }
        }
    }

    fn apply_preselection(&mut self) {
        let Some(wanted) = self.preselect.as_deref() else {
            return;
        };
        let wanted = wanted.to_lowercase();

        match self
            .options
            .iter()
            .position(|option| option.to_lowercase() == wanted)
        {
            Some(idx) => {
                self.select(idx);
            }
            None => tracing::info!(preselect = %wanted, "preselected country not found"),
        }
    }

    /// Returns true when the selection actually changed.
    pub fn select(&mut self, idx: usize) -> bool {
        if !self.is_interactive() || idx >= self.options.len() || idx == self.selected {
            return false;
        }
        self.selected = idx;
        self.on_selection_changed();
        true
    }

    fn on_selection_changed(&mut self) {
        let current = &self.options[self.selected];
        if current.is_empty() {
            self.status_label.clear();
        } else {
            self.status_label = format!("Selected: {}", current);
        }
        tracing::info!(country = %current, "selection changed");
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    pub fn is_interactive(&self) -> bool {
        self.state == PickerState::Populated
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Closes the error notification. The picker stays disabled.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
