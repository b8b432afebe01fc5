//! The interactive search session.

use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use tracing::error;

use wsearch_core::{Config, SearchRequest, Unit, WeatherBackend};

use crate::screen;
use crate::state::{SearchEvent, UiState};

/// One entry in the session menu.
#[derive(Debug, Clone)]
enum Action {
    Search,
    Preset(String),
    ChangeUnit(Unit),
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search => f.write_str(screen::SEARCH_LABEL),
            Action::Preset(city) => write!(f, "Quick search: {city}"),
            Action::ChangeUnit(unit) => write!(f, "Unit: {unit}"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Owns the UI surface and the backend handle, and turns user actions into
/// search cycles.
pub struct SearchController {
    backend: Box<dyn WeatherBackend>,
    preset_cities: Vec<String>,
    unit: Unit,
    city_input: String,
    state: UiState,
}

impl SearchController {
    pub fn new(config: &Config, backend: Box<dyn WeatherBackend>) -> Self {
        Self {
            backend,
            preset_cities: config.preset_cities.clone(),
            unit: config.default_unit,
            city_input: String::new(),
            state: UiState::Idle,
        }
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Run the session until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let Some(action) = self.next_action()? else {
                return Ok(());
            };

            match action {
                Action::Search => {
                    if let Some(city) = self.prompt_city()? {
                        self.city_input = city;
                        self.execute_search().await;
                    }
                }
                Action::Preset(city) => self.search_preset(city).await,
                Action::ChangeUnit(_) => self.prompt_unit()?,
                Action::Quit => return Ok(()),
            }
        }
    }

    /// One search cycle for a one-shot invocation.
    pub async fn search_once(&mut self, city: &str) -> Result<()> {
        self.city_input = city.to_string();
        self.execute_search().await;
        Ok(())
    }

    /// A preset is copied into the input buffer first, so the buffer reflects
    /// what was searched.
    async fn search_preset(&mut self, city: String) {
        self.city_input = city;
        self.execute_search().await;
    }

    /// One full search cycle: validate, call the endpoint, render the outcome.
    async fn execute_search(&mut self) {
        let request = match SearchRequest::new(&self.city_input, self.unit) {
            Ok(request) => request,
            Err(err) => {
                // Empty input never reaches the network.
                self.apply(SearchEvent::Failed(err.user_message().to_string()));
                return;
            }
        };

        self.apply(SearchEvent::Started);
        let spinner = screen::loading_spinner();

        // The only suspension point. No prompt is shown while this is
        // pending, which is what keeps the trigger disabled.
        let outcome = self.backend.search(&request).await;

        spinner.finish_and_clear();

        match outcome {
            Ok(report) => self.apply(SearchEvent::Succeeded(report)),
            Err(err) => {
                if err.is_connectivity() {
                    error!(error = %err, city = %request.city, "weather search failed");
                }
                self.apply(SearchEvent::Failed(err.user_message().to_string()));
            }
        }
    }

    /// Single place where the mode changes and panels are drawn.
    fn apply(&mut self, event: SearchEvent) {
        self.state.apply(event);

        match &self.state {
            UiState::Result(report) => println!("{}", screen::render_result(report)),
            UiState::Error(message) => println!("{}", screen::render_error(message)),
            UiState::Idle | UiState::Loading => {}
        }
    }

    fn next_action(&self) -> Result<Option<Action>> {
        let mut options = vec![Action::Search];
        options.extend(self.preset_cities.iter().cloned().map(Action::Preset));
        options.push(Action::ChangeUnit(self.unit));
        options.push(Action::Quit);

        match Select::new("wsearch:", options).prompt() {
            Ok(action) => Ok(Some(action)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn prompt_city(&self) -> Result<Option<String>> {
        match Text::new("City name:").with_initial_value(&self.city_input).prompt() {
            Ok(city) => Ok(Some(city)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn prompt_unit(&mut self) -> Result<()> {
        let units = Unit::all().to_vec();
        let start = units.iter().position(|unit| *unit == self.unit).unwrap_or(0);

        match Select::new("Unit:", units).with_starting_cursor(start).prompt() {
            Ok(unit) => {
                self.unit = unit;
                Ok(())
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
