//! Line-prompt front-end: asks for medication names until `exit` or end of input.

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::cli::render::{write_alternatives, write_not_found, write_record};
use crate::cli::{resolve_price_ceiling, DataSource};
use crate::matching::engine::MedicineFinder;
use crate::utils::validation::validate_query;

/// Words that end the session
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Answers accepted as "yes" to the guidance question
const YES_WORDS: [&str; 3] = ["yes", "y", "sure"];

const PRICE_PROMPT: &str = "\nMaximum price for alternatives (press Enter to skip): ";

const GUIDANCE: &str = "Here are some suggestions to find information about the medication:\n\
1. Visit your nearest pharmacy and consult a pharmacist.\n\
2. Check reliable online sources such as official healthcare websites or medication databases.\n\
3. Contact your healthcare provider for recommendations or alternatives.";

#[derive(Args)]
pub struct InteractiveArgs {
    /// Reject an invalid maximum price and ask again instead of ignoring it
    #[arg(long)]
    pub strict_price: bool,
}

/// Execute interactive subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal cannot be
/// read or written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InteractiveArgs, source: &DataSource, verbose: bool) -> anyhow::Result<()> {
    let catalog = source.load(verbose)?;
    let finder = MedicineFinder::new(&catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&finder, stdin.lock(), stdout.lock(), args.strict_price);
    session.run()?;

    Ok(())
}

/// One prompt loop over an input and an output stream
pub struct Session<'a, R, W> {
    finder: &'a MedicineFinder<'a>,
    input: R,
    output: W,
    strict_price: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(finder: &'a MedicineFinder<'a>, input: R, output: W, strict_price: bool) -> Self {
        Self {
            finder,
            input,
            output,
            strict_price,
        }
    }

    /// Run until the user types an exit word or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.output,
                "\nEnter the name of the medication you want to search for (or type 'exit' to quit):"
            )?;
            let Some(line) = self.prompt("> ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            let name = match validate_query(&line) {
                Ok(name) => name.to_string(),
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if EXIT_WORDS.iter().any(|w| name.eq_ignore_ascii_case(w)) {
                writeln!(self.output, "Exiting the program. Goodbye!")?;
                return Ok(());
            }

            if !self.handle_query(&name)? {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            }
        }
    }

    /// Answer one query. Returns `false` if input ended mid-query.
    fn handle_query(&mut self, name: &str) -> io::Result<bool> {
        let Some(record) = self.finder.find(name) else {
            let suggestions = self.finder.suggest(name);
            write_not_found(&mut self.output, name, &suggestions)?;
            return self.offer_guidance(name);
        };

        writeln!(self.output)?;
        write_record(&mut self.output, record)?;

        let Some(max_price) = self.read_price_ceiling()? else {
            return Ok(false);
        };

        let alternatives = self.finder.find_alternatives(record, max_price);
        write_alternatives(&mut self.output, &alternatives, max_price)?;
        Ok(true)
    }

    /// Ask for an optional price ceiling. The outer `None` means input ended.
    fn read_price_ceiling(&mut self) -> io::Result<Option<Option<f64>>> {
        loop {
            let Some(raw) = self.prompt(PRICE_PROMPT)? else {
                return Ok(None);
            };

            match resolve_price_ceiling(Some(&raw), self.strict_price) {
                Ok(ceiling) => return Ok(Some(ceiling)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn offer_guidance(&mut self, name: &str) -> io::Result<bool> {
        writeln!(
            self.output,
            "\nThe medication '{name}' is not available in the database.\n\
             Would you like guidance on how to find more information about it? (yes/no)"
        )?;
        let Some(answer) = self.prompt("> ")? else {
            return Ok(false);
        };

        let answer = answer.trim().to_lowercase();
        if YES_WORDS.contains(&answer.as_str()) {
            writeln!(self.output, "{GUIDANCE}")?;
        } else {
            writeln!(
                self.output,
                "Understood. Let us know if you need assistance with another medication."
            )?;
        }
        Ok(true)
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }
}
