mod app;
mod auth;
mod catalog;
mod config;
mod error;
mod flow;
mod forms;
mod input;
mod logging;
mod pages;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use catalog::Catalog;
use config::AppConfig;
use error::AppError;
use input::{pixel_to_cell, ClickState, InputEvent};
use pages::{PageContext, Route};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::Alignment;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;
use web_sys::wasm_bindgen::JsValue;

/// Map a click in page pixels to a terminal cell via the grid container's
/// bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn to_input_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Tab => Some(InputEvent::Tab),
        KeyCode::Esc => Some(InputEvent::Esc),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        _ => None,
    }
}

fn initial_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Route::from_path(&p))
        .unwrap_or(Route::Home)
}

/// Keep the address bar in step with the mounted page.
fn sync_location(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::warn!("could not update location: {:?}", e);
    }
}

/// Load config, install the logger and parse the fixtures.
fn bootstrap() -> Result<(PageContext, u32), AppError> {
    let settings = AppConfig::bundled()?.validate()?;
    logging::init(settings.log_level)?;
    let catalog = Catalog::bundled()?;
    log::info!(
        "loaded {} careers and {} courses",
        catalog.careers.len(),
        catalog.courses.len()
    );
    let ticks_per_sec = settings.ticks_per_sec;
    Ok((PageContext::new(catalog, settings), ticks_per_sec))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    let (ctx, ticks_per_sec) = match bootstrap() {
        Ok(v) => v,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            let message = e.to_string();
            terminal.draw_web(move |f| render_startup_error(f, &message));
            return Ok(());
        }
    };

    let route = initial_route();
    let app = Rc::new(RefCell::new(App::new(ctx, route)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    sync_location(route);

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let target = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(action_id) = target {
                log::debug!("click target {}", action_id);
                dispatch(&app, &InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = to_input_event(key_event.code) {
                dispatch(&app, &event);
            }
        }
    });

    let mut clock = FrameClock::new(ticks_per_sec);
    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let delta = clock.update(time::now_ms());
            {
                let mut app = app.borrow_mut();
                let before = app.route();
                app.tick(delta);
                if app.route() != before {
                    sync_location(app.route());
                }
            }

            // Update terminal dimensions and clear click targets
            {
                let size = f.area();
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.borrow().render(f, &click_state);
        }
    });

    Ok(())
}

fn dispatch(app: &Rc<RefCell<App>>, event: &InputEvent) {
    let mut app = app.borrow_mut();
    let before = app.route();
    app.handle_input(event);
    if app.route() != before {
        sync_location(app.route());
    }
}

fn render_startup_error(f: &mut ratzilla::ratatui::Frame, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "CareerCompass could not start",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Check the bundled assets and reload.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Startup error ");
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        f.area(),
    );
}
