// SPDX-License-Identifier: MPL-2.0
//! Update logic for the gallery.
//!
//! Switch effects are turned into host messages through [`App::callbacks`]
//! and handled right away, in dispatch order, so the host adopts a new
//! state exactly like an embedding application would.

use super::{App, Message};
use crate::switch_button;
use iced::Task;

impl App {
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Switch(index, message) => {
                let Some(entry) = self.entries.get_mut(index) else {
                    return Task::none();
                };
                let effect = entry.switch.handle(message);
                // Change before press.
                let tasks: Vec<_> = Self::callbacks(index)
                    .dispatch(effect)
                    .into_iter()
                    .map(|message| self.update(message))
                    .collect();
                Task::batch(tasks)
            }
            Message::Changed(index, is_active) => {
                self.set_host_active(index, is_active);
                self.push_log(format!("#{index} change -> {is_active}"));
                Task::none()
            }
            Message::Pressed(index, is_active) => {
                self.push_log(format!("#{index} press -> {is_active}"));
                Task::none()
            }
            Message::LongPressed(index) => {
                self.push_log(format!("#{index} long press"));
                Task::none()
            }
            Message::ToggleFromHost(index) => {
                if let Some(entry) = self.entries.get(index) {
                    let is_active = !entry.host_active;
                    self.set_host_active(index, is_active);
                    self.push_log(format!("#{index} host -> {is_active}"));
                }
                Task::none()
            }
            Message::ClearLog => {
                self.log.clear();
                Task::none()
            }
        }
    }

    /// Stores the canonical flag and pushes it down to the switch.
    fn set_host_active(&mut self, index: usize, is_active: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.host_active = is_active;
            entry
                .switch
                .handle(switch_button::Message::ActiveChanged(is_active));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LOG_CAPACITY;
    use crate::switch_button::Options;

    fn app() -> App {
        App::with_gallery(Options::default(), None)
    }

    /// Presses and releases the switch at `index` through the update loop.
    fn press(app: &mut App, index: usize) {
        let _ = app.update(Message::Switch(index, switch_button::Message::PressIn));
        let _ = app.update(Message::Switch(index, switch_button::Message::PressOut));
    }

    #[test]
    fn change_callback_updates_host_and_switch() {
        let mut app = app();
        let _ = app.update(Message::Changed(0, true));

        assert!(app.entries()[0].host_active);
        assert!(app.entries()[0].switch.is_active());
        assert_eq!(app.log().last(), Some("#0 change -> true"));
    }

    #[test]
    fn press_round_trip_logs_change_before_press() {
        let mut app = app();
        press(&mut app, 0);

        assert!(app.entries()[0].host_active);
        assert!(app.entries()[0].switch.is_active());
        let log: Vec<_> = app.log().collect();
        assert_eq!(log, vec!["#0 change -> true", "#0 press -> true"]);
    }

    #[test]
    fn toggle_from_host_syncs_switch_without_press_callbacks() {
        let mut app = app();
        let _ = app.update(Message::ToggleFromHost(1));

        assert!(app.entries()[1].host_active);
        assert!(app.entries()[1].switch.is_active());
        assert_eq!(app.log().collect::<Vec<_>>(), vec!["#1 host -> true"]);
    }

    #[test]
    fn disabled_entry_ignores_presses() {
        let mut app = app();
        let index = app
            .entries()
            .iter()
            .position(|entry| entry.switch.options().disabled)
            .expect("gallery has a disabled switch");
        let before = app.entries()[index].host_active;

        press(&mut app, index);

        assert_eq!(app.entries()[index].host_active, before);
        assert_eq!(app.log().count(), 0);
    }

    #[test]
    fn log_is_bounded_and_clearable() {
        let mut app = app();
        for _ in 0..(LOG_CAPACITY + 5) {
            let _ = app.update(Message::LongPressed(2));
        }
        assert_eq!(app.log().count(), LOG_CAPACITY);

        let _ = app.update(Message::ClearLog);
        assert_eq!(app.log().count(), 0);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Switch(99, switch_button::Message::PressIn));
        let _ = app.update(Message::ToggleFromHost(99));
        assert_eq!(app.log().count(), 0);
    }
}
