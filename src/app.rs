use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame, Terminal,
};

use chrono::Local;

use crate::error::Result;
use crate::forecast::Forecast;
use crate::input::TextInput;
use crate::view::{Report, Tone, QUESTION, QUIT_HINT};
use crate::weatherapi::DEFAULT_LOCATION;

const PAGE: u16 = 10;

/// What is on screen. There is no way back to `Initial` once a forecast is
/// shown; errors never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Initial,
    Success(Forecast),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    screen: Screen,
    input: TextInput,
    /// First hour line shown; clamped to the visible height on every draw.
    scroll: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Initial,
            input: TextInput::new(DEFAULT_LOCATION),
            scroll: 0,
        }
    }

    fn scroll_hours(&mut self, code: KeyCode) {
        self.scroll = match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll.saturating_add(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => u16::MAX,
            _ => self.scroll,
        };
    }

    /// Applies one key press. Submitting calls `fetch` synchronously; its error
    /// is returned unchanged and leaves the screen as it was.
    pub fn handle_key<F>(&mut self, key: KeyEvent, fetch: F) -> Result<Control>
    where
        F: FnOnce(&str) -> Result<Forecast>,
    {
        if key.kind != KeyEventKind::Press {
            return Ok(Control::Continue);
        }

        let cancel = key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if cancel {
            return Ok(Control::Quit);
        }

        match self.screen {
            Screen::Initial if key.code == KeyCode::Enter => {
                let forecast = fetch(self.input.value())?;
                self.screen = Screen::Success(forecast);
            }
            Screen::Initial => self.input.handle_key(key),
            Screen::Success(_) => self.scroll_hours(key.code),
        }
        Ok(Control::Continue)
    }
}

pub fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, fetch: F) -> Result<()>
where
    B: Backend,
    F: Fn(&str) -> Result<Forecast>,
{
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key, &fetch)? == Control::Quit {
                return Ok(());
            }
        }
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Dry => Style::default().fg(Color::Blue),
        Tone::Wet => Style::default().fg(Color::Red),
    }
}

fn hint() -> Span<'static> {
    Span::styled(QUIT_HINT, Style::default().fg(Color::DarkGray))
}

fn display_prompt(f: &mut Frame, input: &TextInput, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            QUESTION,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    input.render(f, rows[1]);
    f.render_widget(Paragraph::new(hint()), rows[2]);
}

fn display_forecast(f: &mut Frame, forecast: &Forecast, scroll: &mut u16, area: Rect) {
    let report = Report::new(forecast, &Local);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Forecast ",
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(report.header, Style::default().fg(Color::Green)),
        ])),
        rows[0],
    );

    let hidden = report.hours.len().saturating_sub(rows[1].height as usize);
    *scroll = (*scroll).min(hidden.min(u16::MAX as usize) as u16);

    let lines: Vec<Line> = report
        .hours
        .into_iter()
        .map(|hour| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(hour.text, tone_style(hour.tone)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).scroll((*scroll, 0)), rows[1]);

    if hidden > 0 {
        let mut state = ScrollbarState::new(hidden).position(*scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            rows[1],
            &mut state,
        );
    }

    let mut footer = vec![Span::raw(" "), hint()];
    if hidden > 0 {
        footer.push(Span::styled(
            " (up/down to scroll)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(footer)), rows[2]);
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    match &app.screen {
        Screen::Initial => display_prompt(f, &app.input, area),
        Screen::Success(forecast) => display_forecast(f, forecast, &mut app.scroll, area),
    }
}
