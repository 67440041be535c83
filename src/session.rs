// 🎟️ Session - render / select / show / confirm loop
//
// RUNNING repeats until the exit key is pressed after an enclosure
// has been shown, then TERMINATED prints the farewell once.
// Invalid selections never leave the prompt: the menu is not
// re-rendered, only the prompt is repeated.

use crate::catalog::Catalog;
use crate::console::{Console, Key};
use crate::error::SessionError;
use std::io::{self, Write};

pub const WELCOME: &str = "Здравствуйте, добро пожаловать в наш зоопарк.";
pub const PROMPT: &str = "Ваш выбор: ";
pub const FAREWELL: &str = "До свидания, надеюсь вам понравилось в нашем зоопарке.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Parse a 1-based menu selection, returning the 0-based index when it is in range
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let value: i64 = input.trim().parse().ok()?;

    if value < 1 || value as u64 > count as u64 {
        return None;
    }

    Some(value as usize - 1)
}

pub struct Session<'a, C: Console> {
    catalog: &'a Catalog,
    console: C,
    state: SessionState,
    exit_key: Key,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(catalog: &'a Catalog, console: C) -> Self {
        Self {
            catalog,
            console,
            state: SessionState::Running,
            exit_key: Key::EXIT,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        {
            let out = self.console.writer();
            writeln!(out, "{}", WELCOME)?;
            writeln!(out)?;
        }

        while self.state == SessionState::Running {
            self.render_menu()?;

            let index = self.acquire_selection()?;
            self.console.clear()?;
            self.show_enclosure(index)?;

            let key = self.read_key()?;
            if key == self.exit_key {
                self.state = SessionState::Terminated;
            }

            self.console.clear()?;
        }

        tracing::info!("excursion finished");
        writeln!(self.console.writer(), "{}", FAREWELL)?;
        self.console.writer().flush()?;

        Ok(())
    }

    fn render_menu(&mut self) -> io::Result<()> {
        let count = self.catalog.len();
        let out = self.console.writer();

        for enclosure in self.catalog.enclosures() {
            writeln!(out, "{}", enclosure.description())?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "В нашем зоопарке есть {} вольера. Введите номер вольера, который желаете посмотреть.",
            count
        )
    }

    /// Prompt until a valid selection arrives; no attempt limit
    fn acquire_selection(&mut self) -> Result<usize, SessionError> {
        let count = self.catalog.len();

        loop {
            write!(self.console.writer(), "{}", PROMPT)?;

            let line = self
                .console
                .read_line()?
                .ok_or(SessionError::InputClosed)?;

            match parse_selection(&line, count) {
                Some(index) => {
                    tracing::debug!(selection = index + 1, "enclosure selected");
                    return Ok(index);
                }
                None => tracing::debug!(input = %line, count, "selection rejected"),
            }
        }
    }

    fn show_enclosure(&mut self, index: usize) -> io::Result<()> {
        let out = self.console.writer();

        if let Some(enclosure) = self.catalog.get(index) {
            enclosure.show(&mut *out)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Нажмите любую клавишу для продолжения. Для выхода нажмите {}",
            self.exit_key
        )
    }

    fn read_key(&mut self) -> Result<Key, SessionError> {
        match self.console.read_key() {
            Ok(key) => Ok(key),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(SessionError::InputClosed),
            Err(e) => Err(e.into()),
        }
    }
}
