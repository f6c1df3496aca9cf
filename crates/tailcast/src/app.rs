//! One-shot chart viewer for a completed forecast.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use jiff::civil::Date;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tailcast_core::Forecast;

use crate::charts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Trajectories,
    Distribution,
}

pub struct App {
    asset: String,
    initial_date: Date,
    forecast: Forecast,
    tab: Tab,
    exit: bool,
}

impl App {
    pub fn new(asset: String, initial_date: Date, forecast: Forecast) -> Self {
        Self {
            asset,
            initial_date,
            forecast,
            tab: Tab::Trajectories,
            exit: false,
        }
    }

    /// Draw/handle loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        match self.tab {
            Tab::Trajectories => charts::trajectories::render(
                frame,
                chunks[0],
                &self.asset,
                self.initial_date,
                &self.forecast,
            ),
            Tab::Distribution => charts::histogram::render(frame, chunks[0], &self.forecast),
        }

        self.render_status(frame, chunks[1]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let tab_style = |tab: Tab| {
            if tab == self.tab {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };

        let line = Line::from(vec![
            Span::styled(" [1] Trajectories ", tab_style(Tab::Trajectories)),
            Span::styled(" [2] Distribution ", tab_style(Tab::Distribution)),
            Span::raw("  Tab switch · q quit"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn handle_events(&mut self) -> color_eyre::Result<()> {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
                KeyCode::Tab | KeyCode::Left | KeyCode::Right => self.toggle_tab(),
                KeyCode::Char('1') => self.tab = Tab::Trajectories,
                KeyCode::Char('2') => self.tab = Tab::Distribution,
                _ => {}
            }
        }
        Ok(())
    }

    fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Trajectories => Tab::Distribution,
            Tab::Distribution => Tab::Trajectories,
        };
    }
}
