//! Page-independent state machines shared by the onboarding and browsing
//! pages: step navigation, answers, multi-select, filtering, debounce and
//! bookmarks. Nothing in here knows about rendering or input.

pub mod answers;
pub mod bookmarks;
pub mod debounce;
pub mod filter;
pub mod selection;
pub mod steps;
