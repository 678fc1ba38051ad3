//! Interactive prompts.
//!
//! Commands never talk to the terminal directly; they ask a [`Prompter`].
//! [`TermPrompter`] drives dialoguer widgets, [`NoTerminal`] answers with
//! defaults or fails when stdin is not a terminal, and tests script answers.

use anyhow::bail;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Whether a human can be asked to correct input.
    fn is_interactive(&self) -> bool;

    /// Free-text input. An empty answer yields `default` when one is given.
    fn input(&self, prompt: &str, default: Option<&str>) -> anyhow::Result<String>;

    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String], default: Option<usize>)
    -> anyhow::Result<usize>;

    fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool>;
}

/// dialoguer-backed prompts on stderr.
#[derive(Default)]
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TermPrompter {
    fn is_interactive(&self) -> bool {
        true
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        } else {
            input = input.allow_empty(true);
        }
        Ok(input.interact_text()?)
    }

    fn select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> anyhow::Result<usize> {
        if items.is_empty() {
            bail!("nothing to choose from for '{prompt}'");
        }
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.unwrap_or(0).min(items.len() - 1))
            .interact()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Used when stdin is not a terminal: defaults are accepted, anything else
/// must come from flags.
pub struct NoTerminal;

impl Prompter for NoTerminal {
    fn is_interactive(&self) -> bool {
        false
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
        match default {
            Some(value) => Ok(value.to_string()),
            None => bail!("'{prompt}' needs a value but stdin is not a terminal; pass it as a flag"),
        }
    }

    fn select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> anyhow::Result<usize> {
        match default {
            Some(index) if index < items.len() => Ok(index),
            _ => bail!("'{prompt}' needs a choice but stdin is not a terminal; pass it as a flag"),
        }
    }

    fn confirm(&self, _prompt: &str, default: bool) -> anyhow::Result<bool> {
        Ok(default)
    }
}

/// Pick the terminal prompter when a human is attached.
#[must_use]
pub fn for_terminal(interactive: bool) -> Box<dyn Prompter> {
    if interactive {
        Box::new(TermPrompter::default())
    } else {
        Box::new(NoTerminal)
    }
}
