use std::str::FromStr;
use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Confirm, Input, InputValidator};

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

pub(crate) fn confirm(
    prompt: impl Into<String>,
    default: Option<bool>,
) -> dialoguer::Result<bool> {
    let theme = THEME.get_or_init(|| SimpleTheme);
    let mut p = Confirm::with_theme(theme).with_prompt(prompt);
    if let Some(default) = default {
        p = p.default(default);
    }
    p.interact()
}

pub(crate) fn input<'a, T: 'a, V>(
    prompt: impl Into<String>,
    default: Option<T>,
    validator: Option<V>,
) -> dialoguer::Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: ToString,
    V: InputValidator<T> + 'a,
    V::Err: ToString,
{
    let theme = THEME.get_or_init(|| SimpleTheme);
    let mut p = Input::with_theme(theme).with_prompt(prompt);
    if let Some(default) = default {
        p = p.default(default)
    }
    if let Some(validator) = validator {
        p = p.validate_with(validator);
    }
    p.interact_text()
}
