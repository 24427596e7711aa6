//! Page trait, route table and page construction.
//!
//! One module per route. A page owns every piece of state it mutates and is
//! dropped when the app navigates away, which also cancels anything it had
//! in flight.

pub mod about;
pub mod assessment;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod learning;
pub mod login;
pub mod profile;
pub mod signup;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::auth::{AuthGateway, StubAuthGateway};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::input::{ClickState, InputEvent};
use crate::widgets::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Contact,
    Login,
    Signup,
    Profile,
    Assessment,
    Dashboard,
    Learning,
}

pub const ALL_ROUTES: [Route; 9] = [
    Route::Home,
    Route::About,
    Route::Dashboard,
    Route::Learning,
    Route::Contact,
    Route::Login,
    Route::Signup,
    Route::Profile,
    Route::Assessment,
];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Profile => "/profile",
            Route::Assessment => "/assessment",
            Route::Dashboard => "/dashboard",
            Route::Learning => "/learning",
        }
    }

    /// Parse a location path. Trailing slashes and case are ignored;
    /// anything unknown is the home page.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/').to_ascii_lowercase();
        ALL_ROUTES
            .into_iter()
            .find(|r| r.path().trim_end_matches('/') == trimmed)
            .unwrap_or(Route::Home)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Profile => "Profile",
            Route::Assessment => "Assessment",
            Route::Dashboard => "Dashboard",
            Route::Learning => "Learning",
        }
    }
}

/// What a page did with an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageResponse {
    /// Not for this page; the app shell may use it.
    Ignored,
    Consumed,
    Navigate(Route),
}

impl From<bool> for PageResponse {
    fn from(consumed: bool) -> Self {
        if consumed {
            PageResponse::Consumed
        } else {
            PageResponse::Ignored
        }
    }
}

/// Trait that all pages implement.
pub trait Page {
    fn route(&self) -> Route;

    fn handle_input(&mut self, event: &InputEvent) -> PageResponse;

    /// Advance timers by `delta_ticks`. A returned route is a redirect.
    fn tick(&mut self, delta_ticks: u32) -> Option<Route>;

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// True while a text field has keyboard focus.
    fn captures_text(&self) -> bool {
        false
    }
}

/// Shared, read-only collaborators handed to every page on mount.
#[derive(Clone)]
pub struct PageContext {
    pub catalog: Rc<Catalog>,
    pub settings: Settings,
    pub auth: Rc<dyn AuthGateway>,
}

impl PageContext {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let auth = Rc::new(StubAuthGateway::new(settings.auth_delay_ticks));
        Self {
            catalog: Rc::new(catalog),
            settings,
            auth,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        match Catalog::bundled() {
            Ok(catalog) => Self::new(catalog, Settings::default()),
            Err(e) => panic!("bundled fixtures must load: {}", e),
        }
    }
}

/// Arrow keys and `j`/`k` scroll the page body. Returns true if `event` was
/// a scroll key, whether or not the offset moved.
pub fn handle_scroll(scroll: &mut ScrollState, event: &InputEvent) -> bool {
    match event {
        InputEvent::Up | InputEvent::Key('k') => {
            scroll.up(1);
            true
        }
        InputEvent::Down | InputEvent::Key('j') => {
            scroll.down(1);
            true
        }
        _ => false,
    }
}

pub fn create_page(route: Route, ctx: &PageContext) -> Box<dyn Page> {
    match route {
        Route::Home => Box::new(home::HomePage::new()),
        Route::About => Box::new(about::AboutPage::new()),
        Route::Contact => Box::new(contact::ContactPage::new()),
        Route::Login => Box::new(login::LoginPage::new(ctx)),
        Route::Signup => Box::new(signup::SignupPage::new(ctx)),
        Route::Profile => Box::new(profile::ProfilePage::new(ctx)),
        Route::Assessment => Box::new(assessment::AssessmentPage::new()),
        Route::Dashboard => Box::new(dashboard::DashboardPage::new(ctx)),
        Route::Learning => Box::new(learning::LearningPage::new(ctx)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips_for_every_route() {
        for r in ALL_ROUTES {
            assert_eq!(Route::from_path(r.path()), r);
        }
    }

    #[test]
    fn unknown_path_falls_back_home() {
        assert_eq!(Route::from_path("/careers/42"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn path_parsing_is_lenient() {
        assert_eq!(Route::from_path("/learning/"), Route::Learning);
        assert_eq!(Route::from_path("/Dashboard"), Route::Dashboard);
    }

    #[test]
    fn every_route_mounts_its_own_page() {
        let ctx = PageContext::for_tests();
        for r in ALL_ROUTES {
            assert_eq!(create_page(r, &ctx).route(), r);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_from_path_is_total(path in "/?[a-zA-Z/]{0,16}") {
            let r = Route::from_path(&path);
            prop_assert!(ALL_ROUTES.contains(&r));
        }
    }
}
