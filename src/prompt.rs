//! Interactive prompting for missing example values.
//!
//! Answers are stored verbatim as strings: no validation, no coercion to the
//! declared type. Only the line terminator is removed.

use crate::Result;
use crate::collect::{ParamSite, PropertySite};
use crate::examples::{BodyExamples, ParamExamples};

use anyhow::{Context, bail};
use std::io::{self, BufRead, Stdout, Write};
use tracing::debug;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `message` and block until one line of input arrives.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read answer")?;
        if read == 0 {
            bail!("input closed before an answer was entered for: {}", message.trim_end());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// One prompt per distinct parameter name; later sites with an already
    /// answered name reuse that answer.
    pub fn prompt_params(&mut self, sites: &[ParamSite]) -> Result<ParamExamples> {
        let mut examples = ParamExamples::new();

        for site in sites {
            if examples.contains_key(&site.name) {
                debug!(
                    name = %site.name,
                    method = %site.method,
                    path = %site.path,
                    "parameter name already answered; reusing example"
                );
                continue;
            }
            let message = format!(
                "Enter an example value for parameter '{}' of type '{}' for the '{}' request in '{}': ",
                site.name, site.ty, site.method, site.path
            );
            let answer = self.ask(&message)?;
            examples.insert(site.name.clone(), answer);
        }

        Ok(examples)
    }

    pub fn prompt_body(&mut self, sites: &[PropertySite]) -> Result<BodyExamples> {
        let mut examples = BodyExamples::new();

        for site in sites {
            let message = format!(
                "Enter an example value for request body property '{}' of type '{}' for the '{}' request in '{}': ",
                site.name, site.ty, site.method, site.path
            );
            let answer = self.ask(&message)?;
            examples.insert(site.key(), answer);
        }

        Ok(examples)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
