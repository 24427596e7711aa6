//! Top-level application state: the mounted page, the navbar and the
//! narrow-layout menu.
//!
//! Navigation replaces the page outright. The old page is dropped, and with
//! it any request it still had pending.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::pages::{create_page, Page, PageContext, PageResponse, Route};
use crate::widgets::{action_line, panel, ClickableList, NavBar};

/// Action ids at or above this are owned by the shell, never by a page.
pub const NAV_BASE: u16 = 900; // +NAV_ROUTES index
pub const MENU_TOGGLE: u16 = 950;

/// Routes linked from the navbar, in display order. Profile and Assessment
/// are reached through the flow, not the navbar.
pub const NAV_ROUTES: [Route; 7] = [
    Route::Home,
    Route::About,
    Route::Dashboard,
    Route::Learning,
    Route::Contact,
    Route::Login,
    Route::Signup,
];

const BRAND: &str = " ◆ CareerCompass ";
const MENU_LABEL: &str = " ≡ Menu ";
const MENU_WIDTH: u16 = 24;

pub struct App {
    ctx: PageContext,
    page: Box<dyn Page>,
    menu_open: bool,
    /// Layout class of the last frame. Input arrives between frames.
    narrow: Cell<bool>,
}

impl App {
    pub fn new(ctx: PageContext, initial: Route) -> Self {
        log::info!("mount {}", initial.path());
        let page = create_page(initial, &ctx);
        Self {
            ctx,
            page,
            menu_open: false,
            narrow: Cell::new(false),
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// Mount `route`. Navigating to the route already shown keeps its state.
    pub fn navigate(&mut self, route: Route) {
        self.menu_open = false;
        let from = self.page.route();
        if from == route {
            return;
        }
        log::info!("navigate {} -> {}", from.path(), route.path());
        self.page = create_page(route, &self.ctx);
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        if self.menu_open && !self.narrow.get() {
            self.menu_open = false;
        }

        if let InputEvent::Click(id) = event {
            if let Some(route) = nav_route(*id) {
                self.navigate(route);
                return;
            }
            if *id == MENU_TOGGLE {
                self.menu_open = !self.menu_open;
                return;
            }
        }

        if self.menu_open {
            self.handle_menu_input(event);
            return;
        }

        // Esc leaves a text field first; only then does it open the menu.
        if *event == InputEvent::Esc && self.narrow.get() && !self.page.captures_text() {
            self.menu_open = true;
            return;
        }

        if let PageResponse::Navigate(route) = self.page.handle_input(event) {
            self.navigate(route);
        }
    }

    /// While the menu is open it has the keyboard: digits pick a link, Esc
    /// closes it and everything else is swallowed.
    fn handle_menu_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Esc => self.menu_open = false,
            InputEvent::Key(c) => {
                let picked = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| NAV_ROUTES.get(i));
                if let Some(route) = picked {
                    self.navigate(*route);
                }
            }
            _ => {}
        }
    }

    /// Advance the mounted page and follow a redirect if it asks for one.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        if let Some(route) = self.page.tick(delta_ticks) {
            log::info!("redirect from {}", self.page.route().path());
            self.navigate(route);
        }
    }

    pub fn render(&self, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
        let area = f.area();
        let narrow = is_narrow_layout(area.width);
        self.narrow.set(narrow);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_navbar(f, chunks[0], narrow, click_state);
        self.page.render(f, chunks[1], click_state);

        // Drawn last so its targets sit on top of the page's.
        if narrow && self.menu_open {
            self.render_menu(f, chunks[1], click_state);
        }
    }

    fn render_navbar(
        &self,
        f: &mut Frame,
        area: Rect,
        narrow: bool,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        f.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        let row = Rect::new(area.x, area.y, area.width, 1);
        let brand_width = (Line::from(BRAND).width() as u16).min(row.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(brand_width), Constraint::Min(0)])
            .split(row);

        f.render_widget(
            Paragraph::new(Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[0],
        );

        let mut cs = click_state.borrow_mut();
        if narrow {
            let width = (Line::from(MENU_LABEL).width() as u16).min(chunks[1].width);
            let toggle = Rect::new(
                chunks[1].x + chunks[1].width - width,
                chunks[1].y,
                width,
                1,
            );
            let style = if self.menu_open {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            f.render_widget(Paragraph::new(Span::styled(MENU_LABEL, style)), toggle);
            cs.add_click_target(toggle, MENU_TOGGLE);
        } else {
            let current = self.page.route();
            NAV_ROUTES
                .iter()
                .enumerate()
                .fold(NavBar::new("│"), |bar, (i, r)| {
                    bar.item(r.title(), *r == current, NAV_BASE + i as u16)
                })
                .render(f, chunks[1], &mut cs);
        }
    }

    fn render_menu(&self, f: &mut Frame, body: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let width = MENU_WIDTH.min(body.width);
        let height = (NAV_ROUTES.len() as u16 + 2).min(body.height);
        let area = Rect::new(body.x + body.width - width, body.y, width, height);

        let current = self.page.route();
        let mut cl = ClickableList::new();
        for (i, r) in NAV_ROUTES.iter().enumerate() {
            let key = (i + 1).to_string();
            cl.push_clickable(action_line(&key, r.title(), *r != current), NAV_BASE + i as u16);
        }

        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(cl.into_lines()).block(panel("Menu", Color::Cyan, Borders::ALL)),
            area,
        );
    }
}

fn nav_route(action_id: u16) -> Option<Route> {
    let i = action_id.checked_sub(NAV_BASE)? as usize;
    NAV_ROUTES.get(i).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::login;

    fn app_at(route: Route) -> App {
        App::new(PageContext::for_tests(), route)
    }

    fn nav_id(route: Route) -> u16 {
        let i = NAV_ROUTES.iter().position(|r| *r == route).unwrap();
        NAV_BASE + i as u16
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_input(&InputEvent::Key(c));
        }
    }

    fn submit_login(app: &mut App) {
        app.handle_input(&InputEvent::Click(login::actions::FIELD_BASE));
        type_text(app, "ada@example.com");
        app.handle_input(&InputEvent::Tab);
        type_text(app, "secret");
        app.handle_input(&InputEvent::Enter);
    }

    #[test]
    fn starts_on_requested_route() {
        assert_eq!(app_at(Route::Learning).route(), Route::Learning);
    }

    #[test]
    fn navbar_click_navigates() {
        let mut app = app_at(Route::Home);
        app.handle_input(&InputEvent::Click(nav_id(Route::Contact)));
        assert_eq!(app.route(), Route::Contact);
    }

    #[test]
    fn shell_ids_do_not_collide_with_unknown_ids() {
        assert_eq!(nav_route(NAV_BASE + NAV_ROUTES.len() as u16), None);
        assert_eq!(nav_route(12), None);
        assert_eq!(nav_route(MENU_TOGGLE), None);
    }

    #[test]
    fn page_navigation_is_followed() {
        let mut app = app_at(Route::Home);
        // Learn More
        app.handle_input(&InputEvent::Key('l'));
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn successful_login_redirects_to_dashboard() {
        let mut app = app_at(Route::Login);
        let delay = app.ctx.settings.auth_delay_ticks;
        submit_login(&mut app);
        app.tick(delay - 1);
        assert_eq!(app.route(), Route::Login);
        app.tick(1);
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn leaving_login_while_pending_cancels_redirect() {
        let mut app = app_at(Route::Login);
        let delay = app.ctx.settings.auth_delay_ticks;
        submit_login(&mut app);
        app.tick(1);
        app.handle_input(&InputEvent::Click(nav_id(Route::About)));
        assert_eq!(app.route(), Route::About);
        for _ in 0..delay * 3 {
            app.tick(1);
        }
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn esc_opens_menu_only_on_narrow_layouts() {
        let mut app = app_at(Route::Home);
        app.handle_input(&InputEvent::Esc);
        assert!(!app.menu_open);

        app.narrow.set(true);
        app.handle_input(&InputEvent::Esc);
        assert!(app.menu_open);
        app.handle_input(&InputEvent::Esc);
        assert!(!app.menu_open);
    }

    #[test]
    fn esc_leaves_text_field_before_opening_menu() {
        let mut app = app_at(Route::Contact);
        app.narrow.set(true);
        app.handle_input(&InputEvent::Tab);
        type_text(&mut app, "Ada");
        assert!(app.page.captures_text());

        app.handle_input(&InputEvent::Esc);
        assert!(!app.page.captures_text());
        assert!(!app.menu_open);

        app.handle_input(&InputEvent::Esc);
        assert!(app.menu_open);
    }

    #[test]
    fn menu_digit_navigates_and_closes() {
        let mut app = app_at(Route::Home);
        app.narrow.set(true);
        app.handle_input(&InputEvent::Click(MENU_TOGGLE));
        assert!(app.menu_open);

        // Swallowed while open.
        app.handle_input(&InputEvent::Key('l'));
        assert_eq!(app.route(), Route::Home);

        app.handle_input(&InputEvent::Key('4'));
        assert_eq!(app.route(), Route::Learning);
        assert!(!app.menu_open);
    }

    #[test]
    fn menu_closes_when_layout_widens() {
        let mut app = app_at(Route::Home);
        app.narrow.set(true);
        app.handle_input(&InputEvent::Click(MENU_TOGGLE));
        app.narrow.set(false);
        app.handle_input(&InputEvent::Key('l'));
        assert!(!app.menu_open);
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn same_route_keeps_page_state() {
        let mut app = app_at(Route::Contact);
        app.handle_input(&InputEvent::Tab);
        type_text(&mut app, "Ada");
        assert!(app.page.captures_text());
        app.handle_input(&InputEvent::Click(nav_id(Route::Contact)));
        assert!(app.page.captures_text());
    }
}
