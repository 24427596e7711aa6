//! Profile validation, section navigation and the interests picker.

use crate::flow::steps::StepOutcome;
use crate::forms::{parse_optional_in_range, require_choice, FieldError, Validation};

use super::state::{
    ProfileDraft, ProfileField, ProfileState, EDUCATION_LEVELS, INTERESTS, MAX_AGE, MIN_AGE,
    SKILL_LEVELS,
};

/// Check the whole draft. Each field gets at most one message.
pub fn validate(state: &ProfileState) -> Validation<ProfileField> {
    let mut v = Validation::new();
    v.check(
        ProfileField::Age,
        parse_optional_in_range(state.age.value(), MIN_AGE, MAX_AGE).map(|_| ()),
    );
    v.check(ProfileField::Education, require_choice(&state.education));
    if !state.interests.can_submit() {
        v.check(
            ProfileField::Interests,
            Err(FieldError::TooFewInterests {
                min: state.interests.min(),
                got: state.interests.len(),
            }),
        );
    }
    v.check(ProfileField::SkillLevel, require_choice(&state.skill_level));
    v
}

/// Build the draft if it validates.
pub fn draft(state: &ProfileState) -> Result<ProfileDraft, Validation<ProfileField>> {
    let v = validate(state);
    let age = parse_optional_in_range(state.age.value(), MIN_AGE, MAX_AGE);
    match (age, state.education, state.skill_level) {
        (Ok(age), Some(education), Some(skill_level)) if v.is_ok() => Ok(ProfileDraft {
            age: age.and_then(|a| u8::try_from(a).ok()),
            education,
            current_role: Some(state.role.value().trim().to_string()).filter(|r| !r.is_empty()),
            interests: state.interests.items().iter().map(|i| i.to_string()).collect(),
            skill_level,
        }),
        _ => Err(v),
    }
}

/// Next section, or validate and finish on the last one.
pub fn next(state: &mut ProfileState) -> StepOutcome {
    state.focus.blur();
    if !state.steps.is_last() {
        return state.steps.advance(true);
    }
    match draft(state) {
        Ok(profile) => {
            state.errors = Validation::new();
            let outcome = state.steps.advance(true);
            if outcome == StepOutcome::Completed {
                log::info!(
                    "profile saved: education={} skill={} interests={}",
                    profile.education.label(),
                    profile.skill_level.label(),
                    profile.interests.join(", ")
                );
            }
            outcome
        }
        Err(v) => {
            log::debug!("profile rejected: {} field errors", v.len());
            state.errors = v;
            StepOutcome::Blocked
        }
    }
}

pub fn choose_education(state: &mut ProfileState, index: usize) -> bool {
    let Some(level) = EDUCATION_LEVELS.get(index) else {
        return false;
    };
    state.education = Some(*level);
    true
}

pub fn choose_skill(state: &mut ProfileState, index: usize) -> bool {
    let Some(level) = SKILL_LEVELS.get(index) else {
        return false;
    };
    state.skill_level = Some(*level);
    true
}

pub fn toggle_interest(state: &mut ProfileState, index: usize) -> bool {
    let Some(interest) = INTERESTS.get(index) else {
        return false;
    };
    state.interests.toggle(*interest);
    state.cursor = index;
    true
}

pub fn move_cursor(state: &mut ProfileState, down: bool) {
    state.cursor = if down {
        (state.cursor + 1).min(INTERESTS.len() - 1)
    } else {
        state.cursor.saturating_sub(1)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::profile::state::{EducationLevel, SkillLevel};

    fn complete(min: usize) -> ProfileState {
        let mut s = ProfileState::new(min);
        s.education = Some(EducationLevel::Bachelor);
        s.skill_level = Some(SkillLevel::Intermediate);
        for i in 0..min {
            toggle_interest(&mut s, i);
        }
        s
    }

    #[test]
    fn blank_age_is_fine() {
        assert!(validate(&complete(3)).is_ok());
    }

    #[test]
    fn age_bounds() {
        let mut s = complete(3);
        for c in "15".chars() {
            s.age.insert(c);
        }
        assert_eq!(
            validate(&s).for_field(ProfileField::Age),
            Some(&FieldError::OutOfRange { min: 16, max: 70 })
        );
        s.age.clear();
        for c in "70".chars() {
            s.age.insert(c);
        }
        assert!(validate(&s).is_ok());
    }

    // Three interests is the current onboarding rule; it comes from config.
    #[test]
    fn too_few_interests() {
        let mut s = complete(3);
        toggle_interest(&mut s, 0);
        assert_eq!(
            validate(&s).for_field(ProfileField::Interests),
            Some(&FieldError::TooFewInterests { min: 3, got: 2 })
        );
    }

    #[test]
    fn missing_choices_are_reported() {
        let s = ProfileState::new(1);
        let v = validate(&s);
        assert_eq!(v.for_field(ProfileField::Education), Some(&FieldError::NotSelected));
        assert_eq!(v.for_field(ProfileField::SkillLevel), Some(&FieldError::NotSelected));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn draft_keeps_selection_order_and_trims_role() {
        let mut s = complete(0);
        toggle_interest(&mut s, 4);
        toggle_interest(&mut s, 1);
        for c in " Student ".chars() {
            s.role.insert(c);
        }
        for c in "22".chars() {
            s.age.insert(c);
        }
        let d = draft(&s).expect("valid draft");
        assert_eq!(d.interests, vec!["Healthcare", "Design"]);
        assert_eq!(d.current_role.as_deref(), Some("Student"));
        assert_eq!(d.age, Some(22));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = ProfileState::new(3);
        move_cursor(&mut s, false);
        assert_eq!(s.cursor, 0);
        for _ in 0..40 {
            move_cursor(&mut s, true);
        }
        assert_eq!(s.cursor, INTERESTS.len() - 1);
    }

    #[test]
    fn out_of_range_choices_are_rejected() {
        let mut s = ProfileState::new(3);
        assert!(!choose_education(&mut s, 6));
        assert!(!choose_skill(&mut s, 3));
        assert!(!toggle_interest(&mut s, INTERESTS.len()));
        assert_eq!(s.education, None);
    }
}
