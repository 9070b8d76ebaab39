#![forbid(unsafe_code)]

//! Vitrine showcase binary entry point.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use vitrine_showcase::app::AppModel;
use vitrine_viewport::ResizeFeed;

fn main() {
    // No degraded mode: without a queryable terminal the responsive chrome
    // would silently mislead, so fail at startup instead.
    let feed = match ResizeFeed::from_terminal() {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };

    let mut model = AppModel::new(feed);
    model.mount();
    let result = run(&mut model);
    model.unmount();

    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

fn run(model: &mut AppModel) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = event_loop(model);
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn event_loop(model: &mut AppModel) -> io::Result<()> {
    draw(model)?;
    loop {
        match event::read()? {
            Event::Resize(width, _height) => {
                model.handle_resize(width);
                draw(model)?;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Right | KeyCode::Tab => {
                    model.next_screen();
                    draw(model)?;
                }
                KeyCode::Left | KeyCode::BackTab => {
                    model.prev_screen();
                    draw(model)?;
                }
                _ => {}
            },
            _ => {}
        }
    }
    Ok(())
}

fn draw(model: &AppModel) -> io::Result<()> {
    let mut out = io::stdout();
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(model.status_line()))?;
    out.flush()
}
