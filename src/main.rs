mod actions;
mod logic;
mod render;
mod report;
mod state;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use state::{GameState, Step};

#[cfg(target_arch = "wasm32")]
fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_message: &str) {}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let state = Rc::new(RefCell::new(GameState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |key_event| {
            let mut gs = state.borrow_mut();
            let step_before = gs.step;

            match key_event.code {
                KeyCode::Enter => {
                    actions::confirm(&mut gs);
                }
                KeyCode::Char(' ') => {
                    actions::confirm(&mut gs);
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    actions::adjust(&mut gs, -1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    actions::adjust(&mut gs, 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    actions::move_cursor(&mut gs, -1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    actions::move_cursor(&mut gs, 1);
                }
                KeyCode::Char(c @ '1'..='4') => {
                    actions::select_client(&mut gs, c as usize - '1' as usize);
                }
                KeyCode::Char('r') if gs.step == Step::Ending => {
                    actions::restart(&mut gs);
                }
                _ => {}
            }

            // Settled rounds and the final report go to the browser console.
            if gs.step != step_before {
                match gs.step {
                    Step::Result => {
                        if let Some(outcome) = gs.history.last() {
                            console_log(&format!(
                                "round {} settled: {:+.2}% → satisfaction {}",
                                outcome.round_id, outcome.profit_rate, outcome.satisfaction
                            ));
                        }
                    }
                    Step::Ending => {
                        console_log(&report::to_json(&gs));
                    }
                    _ => {}
                }
            }
        }
    });

    terminal.draw_web({
        let state = state.clone();
        move |f| {
            let gs = state.borrow();
            render::render(&gs, f);
        }
    });

    Ok(())
}
