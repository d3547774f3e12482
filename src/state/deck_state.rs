// src/state/deck_state.rs
use std::collections::HashSet;

use anyhow::{bail, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideId {
    Application,
    PropertyAnalysis,
    SuburbAnalysis,
    PortfolioAnalysis,
    UnderwritingDecision,
    FinancialProjections,
}

impl SlideId {
    pub fn id(&self) -> &'static str {
        match self {
            SlideId::Application => "application",
            SlideId::PropertyAnalysis => "property-analysis",
            SlideId::SuburbAnalysis => "suburb-analysis",
            SlideId::PortfolioAnalysis => "portfolio-analysis",
            SlideId::UnderwritingDecision => "underwriting-decision",
            SlideId::FinancialProjections => "financial-projections",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideIcon {
    File,
    Home,
    MapPin,
    BarChart,
    CheckCircle,
    Dollar,
}

impl SlideIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SlideIcon::File => "📄",
            SlideIcon::Home => "🏠",
            SlideIcon::MapPin => "📍",
            SlideIcon::BarChart => "📊",
            SlideIcon::CheckCircle => "✔",
            SlideIcon::Dollar => "💲",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub subtitle: String,
    pub icon: SlideIcon,
}

impl Slide {
    pub fn new(id: SlideId, title: &str, subtitle: &str, icon: SlideIcon) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideProgress {
    Completed,
    Active,
    Upcoming,
}

/// Ordered slides and the index of the one on screen. The cursor is always a
/// valid index; navigation clamps at both ends.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    cursor: usize,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            bail!("A slide deck needs at least one slide");
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                bail!("Duplicate slide id: {}", slide.id.id());
            }
        }

        Ok(Self { slides, cursor: 0 })
    }

    pub fn case_study() -> Self {
        Self {
            slides: vec![
                Slide::new(SlideId::Application, "Loan Application", "Thomas & Sabrina - Mosman Property", SlideIcon::File),
                Slide::new(SlideId::PropertyAnalysis, "Property Analysis", "Unit-Level Risk Assessment", SlideIcon::Home),
                Slide::new(SlideId::SuburbAnalysis, "Suburb Analysis", "Mosman Traffic Light Classification", SlideIcon::MapPin),
                Slide::new(SlideId::PortfolioAnalysis, "Portfolio Analysis", "Portfolio Fit & Allocation", SlideIcon::BarChart),
                Slide::new(SlideId::UnderwritingDecision, "Underwriting Decision", "AI Scoring & IC Memo", SlideIcon::CheckCircle),
                Slide::new(SlideId::FinancialProjections, "Financial Projections", "Return Modeling & Scenarios", SlideIcon::Dollar),
            ],
            cursor: 0,
        }
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.slides.len() {
            self.set_cursor(self.cursor + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.cursor > 0 {
            self.set_cursor(self.cursor - 1);
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            warn!(index, len = self.slides.len(), "ignoring jump past the end of the deck");
            return;
        }
        self.set_cursor(index);
    }

    pub fn first(&mut self) {
        self.jump_to(0);
    }

    pub fn last(&mut self) {
        self.jump_to(self.slides.len() - 1);
    }

    fn set_cursor(&mut self, index: usize) {
        if index != self.cursor {
            debug!(from = self.cursor, to = index, slide = self.slides[index].id.id(), "slide changed");
        }
        self.cursor = index;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.cursor]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.slides.len()
    }

    pub fn progress(&self, index: usize) -> SlideProgress {
        if index < self.cursor {
            SlideProgress::Completed
        } else if index == self.cursor {
            SlideProgress::Active
        } else {
            SlideProgress::Upcoming
        }
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.cursor + 1, self.slides.len())
    }

    pub fn progress_fraction(&self) -> f32 {
        (self.cursor + 1) as f32 / self.slides.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> SlideDeck {
        let ids = [
            SlideId::Application,
            SlideId::PropertyAnalysis,
            SlideId::SuburbAnalysis,
            SlideId::PortfolioAnalysis,
            SlideId::UnderwritingDecision,
            SlideId::FinancialProjections,
        ];
        let slides = ids[..n]
            .iter()
            .map(|id| Slide::new(*id, id.id(), "", SlideIcon::File))
            .collect();
        SlideDeck::new(slides).unwrap()
    }

    #[test]
    fn next_stops_at_the_last_slide() {
        for n in 1..=6 {
            let mut deck = deck_of(n);
            for _ in 0..n - 1 {
                deck.next();
            }
            assert_eq!(deck.cursor(), n - 1);
            deck.next();
            assert_eq!(deck.cursor(), n - 1);
            assert!(deck.is_last());
        }
    }

    #[test]
    fn previous_stops_at_the_first_slide() {
        let mut deck = SlideDeck::case_study();
        deck.previous();
        assert_eq!(deck.cursor(), 0);
        assert!(deck.is_first());
    }

    #[test]
    fn jump_sets_the_cursor_from_anywhere() {
        let mut deck = SlideDeck::case_study();
        for start in 0..deck.len() {
            for target in 0..deck.len() {
                deck.jump_to(start);
                deck.jump_to(target);
                assert_eq!(deck.cursor(), target);
                deck.jump_to(target);
                assert_eq!(deck.cursor(), target);
            }
        }
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut deck = SlideDeck::case_study();
        deck.jump_to(2);
        deck.jump_to(6);
        assert_eq!(deck.cursor(), 2);
    }

    #[test]
    fn three_steps_reach_the_fourth_slide() {
        let mut deck = SlideDeck::case_study();
        assert_eq!(deck.len(), 6);
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.cursor(), 3);
        assert_eq!(deck.current().id, SlideId::PortfolioAnalysis);
        assert_eq!(deck.progress_label(), "Step 4 of 6");
    }

    #[test]
    fn progress_marks_slides_around_the_cursor() {
        let mut deck = SlideDeck::case_study();
        deck.jump_to(2);
        assert_eq!(deck.progress(0), SlideProgress::Completed);
        assert_eq!(deck.progress(2), SlideProgress::Active);
        assert_eq!(deck.progress(5), SlideProgress::Upcoming);
        assert_eq!(deck.progress_fraction(), 0.5);
    }

    #[test]
    fn first_and_last() {
        let mut deck = SlideDeck::case_study();
        deck.last();
        assert_eq!(deck.current().id, SlideId::FinancialProjections);
        deck.first();
        assert_eq!(deck.current().id, SlideId::Application);
    }

    #[test]
    fn rejects_empty_and_duplicate_decks() {
        assert!(SlideDeck::new(Vec::new()).is_err());

        let slide = Slide::new(SlideId::Application, "A", "", SlideIcon::File);
        assert!(SlideDeck::new(vec![slide.clone(), slide]).is_err());
    }

    #[test]
    fn case_study_ids_are_unique_and_ordered() {
        let deck = SlideDeck::case_study();
        let ids: Vec<_> = deck.slides().iter().map(|s| s.id.id()).collect();
        assert_eq!(ids, vec![
            "application",
            "property-analysis",
            "suburb-analysis",
            "portfolio-analysis",
            "underwriting-decision",
            "financial-projections",
        ]);
        assert!(SlideDeck::new(deck.slides().to_vec()).is_ok());
    }
}
