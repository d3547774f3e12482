// src/state/mod.rs
use std::path::Path;
use std::rc::Rc;

use tracing::{error, info};

use crate::clock::{Clock, SystemClock};
use crate::data::CaseStudyData;
use crate::file;
use crate::settings::{HostMode, Settings};

pub mod analysis_state;
pub mod application_state;
pub mod deck_state;

pub use analysis_state::{AnalysisPanel, AnalysisStatus, AnalysisTab};
pub use application_state::ApplicationProvider;
pub use deck_state::{SlideDeck, SlideId, SlideProgress};

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Case study figures
    pub data: CaseStudyData,

    // Controllers
    pub deck: SlideDeck,
    pub application: ApplicationProvider,
    pub analysis: AnalysisPanel,

    pub host_mode: HostMode,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(data: CaseStudyData, settings: &Settings) -> Self {
        Self::with_clock(data, settings, Rc::new(SystemClock))
    }

    pub fn with_clock(data: CaseStudyData, settings: &Settings, clock: Rc<dyn Clock>) -> Self {
        let mut deck = SlideDeck::case_study();
        deck.jump_to(settings.initial_slide.min(deck.len() - 1));

        Self {
            application: ApplicationProvider::new(
                data.application.clone(),
                settings.application_submitted,
            ),
            analysis: AnalysisPanel::new(
                data.traffic_light.clone(),
                settings.analysis_delay(),
                clock,
            ),
            deck,
            data,
            host_mode: settings.host_mode,
            error_message: None,
        }
    }

    /// Replaces the case study figures with those in `path`. On failure the
    /// current figures stay and the error is kept for display.
    pub fn load_fixtures(&mut self, path: &Path) {
        match file::load_case_study(Some(path)) {
            Ok(data) => self.replace_data(data),
            Err(e) => {
                error!("{:#}", e);
                self.error_message = Some(format!("Error loading fixtures: {:#}", e));
            }
        }
    }

    pub fn export_fixtures(&mut self, path: &Path) {
        if let Err(e) = file::export_case_study(&self.data, path) {
            error!("{:#}", e);
            self.error_message = Some(format!("Error exporting fixtures: {:#}", e));
        }
    }

    fn replace_data(&mut self, data: CaseStudyData) {
        self.analysis.cancel_pending();
        self.analysis.reset_analysis();
        self.analysis.set_payload(data.traffic_light.clone());
        let submitted = self.application.is_present();
        self.application = ApplicationProvider::new(data.application.clone(), submitted);
        self.data = data;
    }

    /// Back to the first slide with a fresh analysis panel.
    pub fn restart(&mut self) {
        info!("case study restarted");
        self.analysis.cancel_pending();
        self.analysis.reset_analysis();
        self.analysis.select_tab(AnalysisTab::default());
        self.deck.first();
    }

    pub fn analysis_status(&self) -> AnalysisStatus {
        self.analysis.status(self.application.is_present())
    }

    pub fn run_analysis(&mut self) -> bool {
        self.analysis.run_analysis(self.application.is_present())
    }

    pub fn show_standalone_chrome(&self) -> bool {
        self.host_mode == HostMode::Standalone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::time::Duration;

    fn state_with(settings: Settings) -> (AppState, ManualClock) {
        let clock = ManualClock::new();
        let state = AppState::with_clock(CaseStudyData::default(), &settings, Rc::new(clock.clone()));
        (state, clock)
    }

    #[test]
    fn initial_slide_is_clamped() {
        let (state, _) = state_with(Settings { initial_slide: 40, ..Settings::default() });
        assert_eq!(state.deck.cursor(), 5);

        let (state, _) = state_with(Settings { initial_slide: 2, ..Settings::default() });
        assert_eq!(state.deck.current().id, SlideId::SuburbAnalysis);
    }

    #[test]
    fn unsubmitted_application_gates_the_analysis() {
        let (mut state, _) = state_with(Settings { application_submitted: false, ..Settings::default() });
        assert_eq!(state.analysis_status(), AnalysisStatus::NoApplication);
        assert!(!state.run_analysis());

        state.application.submit();
        assert_eq!(state.analysis_status(), AnalysisStatus::ReadyToAnalyze);
        assert!(state.run_analysis());
    }

    #[test]
    fn restart_discards_a_pending_run() {
        let (mut state, clock) = state_with(Settings::default());
        state.deck.jump_to(3);
        state.run_analysis();
        state.analysis.select_tab(AnalysisTab::Metrics);

        state.restart();
        clock.advance(Duration::from_secs(5));
        state.analysis.poll();

        assert_eq!(state.deck.cursor(), 0);
        assert_eq!(state.analysis_status(), AnalysisStatus::ReadyToAnalyze);
        assert_eq!(state.analysis.selected_tab(), AnalysisTab::Overview);
        assert!(state.analysis.suburb_data().is_none());
    }

    #[test]
    fn failed_load_keeps_current_data() {
        let (mut state, _) = state_with(Settings::default());
        let dir = tempfile::tempdir().unwrap();
        state.load_fixtures(&dir.path().join("missing.ron"));

        assert_eq!(state.data, CaseStudyData::default());
        assert!(state.error_message.as_deref().unwrap_or("").contains("missing.ron"));
    }

    #[test]
    fn loaded_fixtures_feed_the_next_run() {
        let (mut state, clock) = state_with(Settings::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.ron");

        let mut data = CaseStudyData::default();
        data.traffic_light.risk_score = 40;
        file::export_case_study(&data, &path).unwrap();

        state.load_fixtures(&path);
        assert!(state.error_message.is_none());
        assert!(state.run_analysis());
        clock.advance(Duration::from_secs(2));
        state.analysis.poll();
        assert_eq!(state.analysis.suburb_data().map(|d| d.risk_score), Some(40));
    }
}
