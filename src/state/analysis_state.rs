// src/state/analysis_state.rs
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::data::SuburbData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    NoApplication,
    ReadyToAnalyze,
    Analyzing,
    Analyzed,
}

// Traffic light view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisTab {
    #[default]
    Overview,
    Metrics,
    Forecast,
    MlDecision,
    DecisionEngine,
    Pipeline,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 6] = [
        AnalysisTab::Overview,
        AnalysisTab::Metrics,
        AnalysisTab::Forecast,
        AnalysisTab::MlDecision,
        AnalysisTab::DecisionEngine,
        AnalysisTab::Pipeline,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AnalysisTab::Overview => "overview",
            AnalysisTab::Metrics => "metrics",
            AnalysisTab::Forecast => "forecast",
            AnalysisTab::MlDecision => "ml-decision",
            AnalysisTab::DecisionEngine => "decision-engine",
            AnalysisTab::Pipeline => "pipeline",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisTab::Overview => "Overview",
            AnalysisTab::Metrics => "Metrics",
            AnalysisTab::Forecast => "Forecast",
            AnalysisTab::MlDecision => "ML Decision",
            AnalysisTab::DecisionEngine => "Decision Engine",
            AnalysisTab::Pipeline => "Pipeline",
        }
    }
}

/// A scheduled completion. The id is the only handle that can complete it;
/// replacing or dropping the phase revokes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRun {
    pub run_id: Uuid,
    pub due: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Analyzing(PendingRun),
    Analyzed,
}

#[derive(Debug)]
pub struct AnalysisPanel {
    phase: Phase,
    suburb_data: Option<SuburbData>,
    payload: SuburbData,
    delay: Duration,
    clock: Rc<dyn Clock>,
    selected_tab: AnalysisTab,
}

impl AnalysisPanel {
    pub fn new(payload: SuburbData, delay: Duration, clock: Rc<dyn Clock>) -> Self {
        Self {
            phase: Phase::Idle,
            suburb_data: None,
            payload,
            delay,
            clock,
            selected_tab: AnalysisTab::default(),
        }
    }

    /// Application presence is re-read on every call, so the panel leaves
    /// `NoApplication` as soon as one is supplied.
    pub fn status(&self, application_present: bool) -> AnalysisStatus {
        if !application_present {
            return AnalysisStatus::NoApplication;
        }
        match self.phase {
            Phase::Idle => AnalysisStatus::ReadyToAnalyze,
            Phase::Analyzing(_) => AnalysisStatus::Analyzing,
            Phase::Analyzed => AnalysisStatus::Analyzed,
        }
    }

    /// Starts a run when the panel is ready. Returns false, and changes
    /// nothing, from any other state.
    pub fn run_analysis(&mut self, application_present: bool) -> bool {
        let status = self.status(application_present);
        if status != AnalysisStatus::ReadyToAnalyze {
            debug!(?status, "analysis request ignored");
            return false;
        }

        let run = PendingRun {
            run_id: Uuid::new_v4(),
            due: self.clock.now() + self.delay,
        };
        info!(run_id = %run.run_id, delay_ms = self.delay.as_millis() as u64, "analysis started");
        self.phase = Phase::Analyzing(run);
        true
    }

    /// Completes a due run. While one is still pending, returns how long
    /// until it is due.
    pub fn poll(&mut self) -> Option<Duration> {
        let Phase::Analyzing(run) = self.phase else {
            return None;
        };

        let now = self.clock.now();
        if now < run.due {
            return Some(run.due - now);
        }

        self.suburb_data = Some(self.payload.clone());
        self.phase = Phase::Analyzed;
        info!(run_id = %run.run_id, zone = self.payload.zone.label(), "analysis complete");
        None
    }

    pub fn reset_analysis(&mut self) {
        if let Phase::Analyzing(run) = self.phase {
            info!(run_id = %run.run_id, "pending analysis revoked by reset");
        }
        self.phase = Phase::Idle;
        self.suburb_data = None;
        info!("analysis reset");
    }

    /// Revokes an in-flight run. A completed result is left alone.
    pub fn cancel_pending(&mut self) -> bool {
        match self.phase {
            Phase::Analyzing(run) => {
                info!(run_id = %run.run_id, "pending analysis cancelled");
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn select_tab(&mut self, tab: AnalysisTab) {
        self.selected_tab = tab;
    }

    /// Swaps the result record used by later runs. Any shown result stays
    /// until the next reset.
    pub fn set_payload(&mut self, payload: SuburbData) {
        self.payload = payload;
    }

    pub fn suburb_data(&self) -> Option<&SuburbData> {
        self.suburb_data.as_ref()
    }

    pub fn selected_tab(&self) -> AnalysisTab {
        self.selected_tab
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing(_))
    }

    pub fn is_analyzed(&self) -> bool {
        self.phase == Phase::Analyzed
    }

    pub fn pending_run(&self) -> Option<PendingRun> {
        match self.phase {
            Phase::Analyzing(run) => Some(run),
            _ => None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const DELAY: Duration = Duration::from_millis(2000);

    fn panel() -> (AnalysisPanel, ManualClock) {
        let clock = ManualClock::new();
        let panel = AnalysisPanel::new(SuburbData::default(), DELAY, Rc::new(clock.clone()));
        (panel, clock)
    }

    fn assert_invariants(panel: &AnalysisPanel) {
        assert!(!(panel.is_analyzing() && panel.is_analyzed()));
        if panel.is_analyzed() {
            assert!(panel.suburb_data().is_some());
        }
    }

    #[test]
    fn initial_status_follows_the_application() {
        let (panel, _) = panel();
        assert_eq!(panel.status(false), AnalysisStatus::NoApplication);
        assert_eq!(panel.status(true), AnalysisStatus::ReadyToAnalyze);
    }

    #[test]
    fn no_application_cannot_start_a_run() {
        let (mut panel, _) = panel();
        assert!(!panel.run_analysis(false));
        assert_eq!(panel.status(false), AnalysisStatus::NoApplication);
        assert!(!panel.is_analyzing());
    }

    #[test]
    fn run_completes_after_the_delay() {
        let (mut panel, clock) = panel();

        assert!(panel.run_analysis(true));
        assert_eq!(panel.status(true), AnalysisStatus::Analyzing);
        assert!(panel.suburb_data().is_none());
        assert_invariants(&panel);

        clock.advance(Duration::from_millis(1500));
        assert_eq!(panel.poll(), Some(Duration::from_millis(500)));
        assert_eq!(panel.status(true), AnalysisStatus::Analyzing);

        clock.advance(Duration::from_millis(500));
        assert_eq!(panel.poll(), None);
        assert_eq!(panel.status(true), AnalysisStatus::Analyzed);
        assert_eq!(panel.suburb_data(), Some(&SuburbData::default()));
        assert_invariants(&panel);
    }

    #[test]
    fn reset_clears_the_result_for_good() {
        let (mut panel, clock) = panel();
        panel.run_analysis(true);
        clock.advance(DELAY);
        panel.poll();
        assert!(panel.is_analyzed());

        panel.reset_analysis();
        assert_eq!(panel.status(true), AnalysisStatus::ReadyToAnalyze);
        assert!(panel.suburb_data().is_none());

        clock.advance(DELAY * 3);
        assert_eq!(panel.poll(), None);
        assert!(panel.suburb_data().is_none());
        assert_eq!(panel.status(true), AnalysisStatus::ReadyToAnalyze);
    }

    #[test]
    fn reset_mid_run_revokes_the_pending_completion() {
        let (mut panel, clock) = panel();
        panel.run_analysis(true);
        clock.advance(Duration::from_millis(100));
        panel.reset_analysis();

        clock.advance(DELAY);
        assert_eq!(panel.poll(), None);
        assert!(panel.suburb_data().is_none());
        assert!(!panel.is_analyzed());
    }

    #[test]
    fn second_run_while_analyzing_is_ignored() {
        let (mut panel, clock) = panel();
        assert!(panel.run_analysis(true));
        let first = panel.pending_run();

        clock.advance(Duration::from_millis(1000));
        assert!(!panel.run_analysis(true));
        assert_eq!(panel.pending_run(), first);

        // completion stays anchored to the first request
        clock.advance(Duration::from_millis(1000));
        assert_eq!(panel.poll(), None);
        assert!(panel.is_analyzed());
        assert!(!panel.run_analysis(true));
    }

    #[test]
    fn cancel_only_touches_pending_runs() {
        let (mut panel, clock) = panel();
        assert!(!panel.cancel_pending());

        panel.run_analysis(true);
        assert!(panel.cancel_pending());
        clock.advance(DELAY);
        panel.poll();
        assert!(panel.suburb_data().is_none());

        panel.run_analysis(true);
        clock.advance(DELAY);
        panel.poll();
        assert!(!panel.cancel_pending());
        assert!(panel.is_analyzed());
    }

    #[test]
    fn losing_the_application_hides_every_state() {
        let (mut panel, clock) = panel();
        panel.run_analysis(true);
        assert_eq!(panel.status(false), AnalysisStatus::NoApplication);
        clock.advance(DELAY);
        panel.poll();
        assert_eq!(panel.status(false), AnalysisStatus::NoApplication);
        assert_eq!(panel.status(true), AnalysisStatus::Analyzed);
    }

    #[test]
    fn tab_selection_leaves_analysis_alone() {
        let (mut panel, _) = panel();
        assert_eq!(panel.selected_tab(), AnalysisTab::Overview);

        panel.run_analysis(true);
        panel.select_tab(AnalysisTab::Forecast);
        panel.select_tab(AnalysisTab::Pipeline);
        assert_eq!(panel.selected_tab(), AnalysisTab::Pipeline);
        assert_eq!(panel.status(true), AnalysisStatus::Analyzing);
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in AnalysisTab::ALL {
            assert_eq!(AnalysisTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(AnalysisTab::from_id("ml-decision"), Some(AnalysisTab::MlDecision));
        assert_eq!(AnalysisTab::from_id("summary"), None);
    }
}
