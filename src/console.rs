// 🖥️ Console - the only I/O surface of the excursion
//
// Lines are read for menu selection, single key presses for the
// continue/exit prompt. The terminal implementation uses crossterm,
// the scripted one replays queued input and captures output for tests.

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

// ============================================================================
// KEYS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Char(char),
    Other,
}

impl Key {
    /// Key that ends the excursion
    pub const EXIT: Key = Key::Escape;
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::Enter => f.write_str("Enter"),
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Other => f.write_str("?"),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

// ============================================================================
// CONSOLE TRAIT
// ============================================================================

pub trait Console {
    /// Next input line without its terminator, `None` once input is closed
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Block until a single key is pressed
    fn read_key(&mut self) -> io::Result<Key>;

    fn clear(&mut self) -> io::Result<()>;

    fn writer(&mut self) -> &mut dyn Write;
}

// ============================================================================
// TERMINAL CONSOLE (crossterm)
// ============================================================================

pub struct TerminalConsole {
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.stdout.flush()?;

        enable_raw_mode()?;
        let res = read_key_press();
        disable_raw_mode()?;

        res
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

fn read_key_press() -> io::Result<Key> {
    loop {
        // Release/repeat events are reported on some platforms, only presses count
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Key::from(key.code));
            }
        }
    }
}

// ============================================================================
// SCRIPTED CONSOLE
// ============================================================================

/// Console fed from queues, capturing everything written to it
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    output: Vec<u8>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn pending_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted key left"))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
