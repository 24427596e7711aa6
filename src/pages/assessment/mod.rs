//! Eight-question career assessment.
//!
//! One question at a time; an answer is required before moving on. The
//! last "next" completes the assessment and redirects to the dashboard.

pub mod actions;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::flow::steps::StepOutcome;
use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, PageResponse, Route};

use actions::*;
use state::{AssessmentState, QUESTIONS};

pub struct AssessmentPage {
    pub state: AssessmentState,
}

impl AssessmentPage {
    pub fn new() -> Self {
        Self {
            state: AssessmentState::new(),
        }
    }

    fn select(&mut self, option: usize) -> PageResponse {
        if option >= self.state.question().options.len() {
            return PageResponse::Ignored;
        }
        self.state.answers.answer(self.state.steps.current(), option);
        self.state.notice = None;
        PageResponse::Consumed
    }

    fn next(&mut self) -> PageResponse {
        let answered = self.state.answers.is_answered(self.state.steps.current());
        match self.state.steps.advance(answered) {
            StepOutcome::Blocked => {
                if !self.state.steps.is_completed() {
                    self.state.notice = Some("Select an answer to continue");
                }
                PageResponse::Consumed
            }
            StepOutcome::Moved => {
                self.state.notice = None;
                PageResponse::Consumed
            }
            StepOutcome::Completed => {
                log::info!(
                    "assessment completed with {} answers",
                    self.state.answers.len()
                );
                for (question, option) in self.state.answers.iter() {
                    log::debug!("q{} -> option {}", QUESTIONS[question].id, option + 1);
                }
                PageResponse::Navigate(Route::Dashboard)
            }
        }
    }

    fn previous(&mut self) -> PageResponse {
        self.state.steps.retreat();
        self.state.notice = None;
        PageResponse::Consumed
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        match action_id {
            NEXT => self.next(),
            PREVIOUS => self.previous(),
            id if (OPTION_BASE..OPTION_BASE + 4).contains(&id) => {
                self.select((id - OPTION_BASE) as usize)
            }
            _ => PageResponse::Ignored,
        }
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        match key {
            '1'..='4' => self.select(key as usize - '1' as usize),
            'n' => self.next(),
            'p' => self.previous(),
            _ => PageResponse::Ignored,
        }
    }
}

impl Page for AssessmentPage {
    fn route(&self) -> Route {
        Route::Assessment
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter => self.next(),
            InputEvent::Backspace => self.previous(),
            InputEvent::Click(id) => self.handle_click(*id),
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, _delta_ticks: u32) -> Option<Route> {
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
