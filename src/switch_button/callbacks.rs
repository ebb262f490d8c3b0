// SPDX-License-Identifier: MPL-2.0
//! Maps switch effects to the host's own messages.

use super::Effect;
use std::fmt;

type BoolCallback<'a, Message> = Box<dyn Fn(bool) -> Message + 'a>;

/// Host callbacks, each optional.
///
/// For an accepted press, the change callback is dispatched before the
/// press callback; each fires exactly once.
pub struct Callbacks<'a, Message> {
    on_press: Option<BoolCallback<'a, Message>>,
    on_change: Option<BoolCallback<'a, Message>>,
    on_long_press: Option<Box<dyn Fn() -> Message + 'a>>,
}

impl<Message> fmt::Debug for Callbacks<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_press", &self.on_press.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}

impl<Message> Default for Callbacks<'_, Message> {
    fn default() -> Self {
        Self {
            on_press: None,
            on_change: None,
            on_long_press: None,
        }
    }
}

impl<'a, Message> Callbacks<'a, Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired once per accepted press with the reported activation flag.
    #[must_use]
    pub fn on_press(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Fired once per accepted press with the new canonical state.
    #[must_use]
    pub fn on_change(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Fired once per accepted long press.
    #[must_use]
    pub fn on_long_press(mut self, f: impl Fn() -> Message + 'a) -> Self {
        self.on_long_press = Some(Box::new(f));
        self
    }

    /// Turns an effect into the host messages it stands for, in order.
    #[must_use]
    pub fn dispatch(&self, effect: Effect) -> Vec<Message> {
        match effect {
            Effect::None => Vec::new(),
            Effect::Toggled { change, press } => {
                let mut messages = Vec::with_capacity(2);
                if let Some(on_change) = &self.on_change {
                    messages.push(on_change(change));
                }
                if let Some(on_press) = &self.on_press {
                    messages.push(on_press(press));
                }
                messages
            }
            Effect::LongPressed => self
                .on_long_press
                .as_ref()
                .map(|on_long_press| on_long_press())
                .into_iter()
                .collect(),
        }
    }
}
