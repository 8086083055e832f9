// std imports
use std::io::{BufRead, Write};

// local imports
use crate::{error::Result, registry::Registry};

// ---

/// Output options of [`App`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub quiet: bool,
}

/// Checks batches of values against a list of a registry and reports the results.
pub struct App<'a> {
    registry: &'a Registry,
    options: Options,
}

impl<'a> App<'a> {
    pub fn new(registry: &'a Registry, options: Options) -> Self {
        Self { registry, options }
    }

    /// Checks the given values against the named list.
    ///
    /// Returns `true` if every value matched.
    pub fn run<I, S>(&self, list: &str, values: I, mut output: impl Write) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.registry.require(list)?;
        let mut all = true;

        for value in values {
            let value = value.as_ref();
            let matched = list.matches(Some(value));
            all &= matched;

            if !self.options.quiet {
                let verdict = if matched { "match" } else { "no-match" };
                writeln!(output, "{}\t{}", verdict, value)?;
            }
        }

        output.flush()?;
        Ok(all)
    }

    /// Checks each line of the input against the named list.
    pub fn run_lines(&self, list: &str, input: impl BufRead, output: impl Write) -> Result<bool> {
        let lines = input.lines().collect::<std::io::Result<Vec<_>>>()?;
        self.run(list, lines, output)
    }
}
