//! Profile page: basics, interests and experience, one section at a time.
//!
//! Sections can be visited in any order with next/previous; the whole draft
//! is validated only when leaving the last section. A valid profile
//! continues to the assessment.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::flow::steps::StepOutcome;
use crate::forms::apply_edit;
use crate::input::{ClickState, InputEvent};
use crate::pages::{handle_scroll, Page, PageContext, PageResponse, Route};
use crate::widgets::ScrollState;

use actions::*;
use state::{ProfileState, Section, TEXT_FIELDS};

pub struct ProfilePage {
    pub state: ProfileState,
    pub scroll: ScrollState,
}

impl ProfilePage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            state: ProfileState::new(ctx.settings.min_interests),
            scroll: ScrollState::new(),
        }
    }

    fn next(&mut self) -> PageResponse {
        let outcome = logic::next(&mut self.state);
        if outcome == StepOutcome::Moved {
            self.scroll.reset();
        }
        match outcome {
            StepOutcome::Completed => PageResponse::Navigate(Route::Assessment),
            _ => PageResponse::Consumed,
        }
    }

    fn previous(&mut self) -> PageResponse {
        if self.state.steps.is_first() {
            return PageResponse::Navigate(Route::Signup);
        }
        self.state.focus.blur();
        if self.state.steps.retreat() {
            self.scroll.reset();
        }
        PageResponse::Consumed
    }

    fn handle_click(&mut self, action_id: u16) -> PageResponse {
        let s = &mut self.state;
        let section = s.section();
        let handled = match action_id {
            NEXT => return self.next(),
            PREVIOUS => return self.previous(),
            id if section == Section::Basics
                && (FIELD_BASE..FIELD_BASE + TEXT_FIELDS.len() as u16).contains(&id) =>
            {
                s.focus.focus(TEXT_FIELDS[(id - FIELD_BASE) as usize]);
                true
            }
            id if section == Section::Basics && (EDUCATION_BASE..SKILL_BASE).contains(&id) => {
                logic::choose_education(s, (id - EDUCATION_BASE) as usize)
            }
            id if section == Section::Experience && (SKILL_BASE..INTEREST_BASE).contains(&id) => {
                logic::choose_skill(s, (id - SKILL_BASE) as usize)
            }
            id if section == Section::Interests && id >= INTEREST_BASE => {
                logic::toggle_interest(s, (id - INTEREST_BASE) as usize)
            }
            _ => false,
        };
        handled.into()
    }

    fn handle_key(&mut self, key: char) -> PageResponse {
        let s = &mut self.state;
        let handled = match (s.section(), key) {
            (_, 'n') => return self.next(),
            (_, 'p') => return self.previous(),
            (Section::Basics, '1'..='6') => logic::choose_education(s, key as usize - '1' as usize),
            (Section::Experience, '1'..='3') => logic::choose_skill(s, key as usize - '1' as usize),
            (Section::Interests, ' ' | 'x') => {
                let cursor = s.cursor;
                logic::toggle_interest(s, cursor)
            }
            _ => false,
        };
        handled.into()
    }
}

impl Page for ProfilePage {
    fn route(&self) -> Route {
        Route::Profile
    }

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse {
        let section = self.state.section();
        if section == Section::Basics && self.state.focus.handle_nav(event) {
            return PageResponse::Consumed;
        }
        if let InputEvent::Click(id) = event {
            return self.handle_click(*id);
        }
        if let Some(field) = self.state.focus.focused() {
            if *event == InputEvent::Enter {
                return self.next();
            }
            if let Some(text) = self.state.field_mut(field) {
                if apply_edit(text, event) {
                    return PageResponse::Consumed;
                }
            }
        }
        if section == Section::Interests {
            match event {
                InputEvent::Up => {
                    logic::move_cursor(&mut self.state, false);
                    return PageResponse::Consumed;
                }
                InputEvent::Down => {
                    logic::move_cursor(&mut self.state, true);
                    return PageResponse::Consumed;
                }
                _ => {}
            }
        }
        if handle_scroll(&mut self.scroll, event) {
            return PageResponse::Consumed;
        }
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter => self.next(),
            InputEvent::Backspace => self.previous(),
            _ => PageResponse::Ignored,
        }
    }

    fn tick(&mut self, _delta_ticks: u32) -> Option<Route> {
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }

    fn captures_text(&self) -> bool {
        self.state.focus.focused().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldError;
    use state::{EducationLevel, ProfileField, SkillLevel, INTERESTS};

    fn page() -> ProfilePage {
        ProfilePage::new(&PageContext::for_tests())
    }

    #[test]
    fn back_from_first_section_returns_to_signup() {
        let mut p = page();
        assert_eq!(
            p.handle_input(&InputEvent::Key('p')),
            PageResponse::Navigate(Route::Signup)
        );
    }

    #[test]
    fn basics_accepts_typing_and_education_keys() {
        let mut p = page();
        p.handle_input(&InputEvent::Tab);
        for c in "2n".chars() {
            p.handle_input(&InputEvent::Key(c));
        }
        // 'n' went into the age field, not to "next".
        assert_eq!(p.state.age.value(), "2n");
        assert_eq!(p.state.section(), Section::Basics);
        p.handle_input(&InputEvent::Esc);
        p.handle_input(&InputEvent::Key('3'));
        assert_eq!(p.state.education, Some(EducationLevel::Bachelor));
    }

    #[test]
    fn sections_move_freely_until_submit() {
        let mut p = page();
        assert_eq!(p.handle_input(&InputEvent::Key('n')), PageResponse::Consumed);
        assert_eq!(p.state.section(), Section::Interests);
        p.handle_input(&InputEvent::Key('n'));
        assert_eq!(p.state.section(), Section::Experience);
        assert!(p.state.errors.is_ok());

        // Submitting an empty draft flags every section.
        assert_eq!(p.handle_input(&InputEvent::Enter), PageResponse::Consumed);
        assert_eq!(p.state.section(), Section::Experience);
        assert!(p.state.section_has_errors(Section::Basics));
        assert!(p.state.section_has_errors(Section::Interests));
        assert_eq!(
            p.state.errors.for_field(ProfileField::SkillLevel),
            Some(&FieldError::NotSelected)
        );
    }

    #[test]
    fn interests_toggle_by_cursor_and_click() {
        let mut p = page();
        p.handle_input(&InputEvent::Key('n'));
        p.handle_input(&InputEvent::Down);
        p.handle_input(&InputEvent::Key(' '));
        p.handle_input(&InputEvent::Click(INTEREST_BASE + 12));
        p.handle_input(&InputEvent::Click(INTEREST_BASE));
        assert_eq!(
            p.state.interests.items(),
            &[INTERESTS[1], INTERESTS[12], INTERESTS[0]]
        );
        p.handle_input(&InputEvent::Click(INTEREST_BASE + 12));
        assert_eq!(p.state.interests.len(), 2);
        assert_eq!(p.state.cursor, 12);
    }

    #[test]
    fn choices_only_apply_on_their_section() {
        let mut p = page();
        assert_eq!(p.handle_input(&InputEvent::Click(SKILL_BASE)), PageResponse::Ignored);
        assert_eq!(p.handle_input(&InputEvent::Click(INTEREST_BASE)), PageResponse::Ignored);
        assert!(p.state.skill_level.is_none());
        assert!(p.state.interests.is_empty());
    }

    #[test]
    fn complete_profile_goes_to_assessment() {
        let mut p = page();
        p.handle_input(&InputEvent::Click(EDUCATION_BASE + 4));
        p.handle_input(&InputEvent::Click(NEXT));
        for i in 0..3 {
            p.handle_input(&InputEvent::Click(INTEREST_BASE + i));
        }
        p.handle_input(&InputEvent::Click(NEXT));
        p.handle_input(&InputEvent::Key('2'));
        assert_eq!(p.state.skill_level, Some(SkillLevel::Intermediate));
        assert_eq!(
            p.handle_input(&InputEvent::Key('n')),
            PageResponse::Navigate(Route::Assessment)
        );
    }

    #[test]
    fn previous_walks_back_a_section() {
        let mut p = page();
        p.handle_input(&InputEvent::Key('n'));
        assert_eq!(p.handle_input(&InputEvent::Click(PREVIOUS)), PageResponse::Consumed);
        assert_eq!(p.state.section(), Section::Basics);
    }
}
