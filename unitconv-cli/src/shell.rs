//! Interactive shell
//!
//! Line-oriented state machine:
//! main menu -> category -> source unit -> target unit -> value -> result -> main menu,
//! or main menu -> exit.
//!
//! Unit selection retries in place until a valid index is given. A bad value
//! abandons the conversion and goes back to the main menu.

use std::io::{self, BufRead, Write};
use unitconv_core::ConversionRequest;
use unitconv_units::{CategoryEntry, CategoryRegistry, REGISTRY};

use crate::menu::{self, InputError, MenuChoice};
use crate::options::ShellOptions;

#[derive(Debug, Clone)]
enum State {
    MainMenu,
    CategorySelected(CategoryEntry),
    UnitFromSelected {
        entry: CategoryEntry,
        from: &'static str,
    },
    UnitToSelected {
        entry: CategoryEntry,
        from: &'static str,
        to: &'static str,
    },
    ValueEntered(ConversionRequest),
    Exit,
}

/// One interactive session over a line reader and a writer
pub struct Shell<'r, R, W> {
    input: R,
    output: W,
    registry: &'r CategoryRegistry,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<'static, R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell {
            input,
            output,
            registry: &REGISTRY,
            options: ShellOptions::default(),
        }
    }
}

impl<'r, R: BufRead, W: Write> Shell<'r, R, W> {
    pub fn with_registry(input: R, output: W, registry: &'r CategoryRegistry) -> Self {
        Shell {
            input,
            output,
            registry,
            options: ShellOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ShellOptions) -> Self {
        self.options = options;
        self
    }

    /// Run until the user exits or input ends.
    ///
    /// Only I/O failures on the underlying streams are returned as errors.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::MainMenu;
        loop {
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::CategorySelected(entry) => match self.choose_unit(&entry)? {
                    Some(from) => State::UnitFromSelected { entry, from },
                    None => State::Exit,
                },
                State::UnitFromSelected { entry, from } => match self.choose_unit(&entry)? {
                    Some(to) => State::UnitToSelected { entry, from, to },
                    None => State::Exit,
                },
                State::UnitToSelected { entry, from, to } => self.enter_value(&entry, from, to)?,
                State::ValueEntered(request) => self.show_result(request)?,
                State::Exit => return self.output.flush(),
            };
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn main_menu(&mut self) -> io::Result<State> {
        menu::write_main_menu(&mut self.output)?;
        let Some(line) = self.prompt(menu::MAIN_MENU_PROMPT)? else {
            return Ok(State::Exit);
        };

        match menu::parse_menu_choice(&line, self.registry) {
            Ok(MenuChoice::Exit) => {
                if self.options.farewell {
                    writeln!(self.output, "{}", menu::FAREWELL)?;
                }
                Ok(State::Exit)
            }
            Ok(MenuChoice::Convert(entry)) => Ok(State::CategorySelected(*entry)),
            Err(e) => {
                self.reject(&e)?;
                Ok(State::MainMenu)
            }
        }
    }

    /// Show the unit list until a valid index is entered
    fn choose_unit(&mut self, entry: &CategoryEntry) -> io::Result<Option<&'static str>> {
        loop {
            menu::write_unit_menu(&mut self.output, entry.units)?;
            let Some(line) = self.prompt(menu::UNIT_PROMPT)? else {
                return Ok(None);
            };
            match menu::parse_unit_choice(&line, entry) {
                Ok(unit) => return Ok(Some(unit)),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn enter_value(&mut self, entry: &CategoryEntry, from: &str, to: &str) -> io::Result<State> {
        let Some(line) = self.prompt(menu::VALUE_PROMPT)? else {
            return Ok(State::Exit);
        };
        match menu::parse_value(&line) {
            Ok(value) => Ok(State::ValueEntered(ConversionRequest::new(entry.category, from, to, value))),
            Err(e) => {
                self.reject(&e)?;
                Ok(State::MainMenu)
            }
        }
    }

    fn show_result(&mut self, request: ConversionRequest) -> io::Result<State> {
        match self.registry.convert(request) {
            Ok(conversion) => writeln!(self.output, "{}", conversion.render(self.options.precision))?,
            Err(e) => writeln!(self.output, "Conversion error: {}", e)?,
        }
        Ok(State::MainMenu)
    }

    fn reject(&mut self, e: &InputError) -> io::Result<()> {
        tracing::debug!(input = e.input(), "{}", e);
        writeln!(self.output, "{}", e)
    }
}

/// Run a full session over stdin/stdout-like streams
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> io::Result<()> {
    Shell::new(input, output).run()
}
