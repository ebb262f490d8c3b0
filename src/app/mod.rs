// SPDX-License-Identifier: MPL-2.0
//! Gallery application showing the switch in its main configurations.
//!
//! The `App` struct is the host: it owns the canonical activation flag of
//! every switch, adopts new values from the change callback, and can flip
//! a flag on its own to show that externally driven updates stay in sync.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths};
use crate::domain::color;
use crate::switch_button::{self, Callbacks, Options, PressOrdering};
use crate::ui::design_tokens::{border, palette};
use crate::ui::icons;
use iced::{window, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;

/// Maximum number of callback log lines kept on screen.
pub const LOG_CAPACITY: usize = 14;

/// One switch and the host-side flag it mirrors.
pub struct Entry {
    pub title: String,
    /// Canonical activation flag, owned by the host.
    pub host_active: bool,
    pub switch: switch_button::State,
}

/// Root Iced application state.
pub struct App {
    entries: Vec<Entry>,
    log: VecDeque<String>,
    /// Warning raised while loading the config, shown above the gallery.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.entries.len())
            .field("log", &self.log.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires Fn, not FnOnce, for the boot function
    let boot = move || App::new(&flags);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the gallery from the user config and the CLI flags.
    pub fn new(flags: &Flags) -> (Self, Task<Message>) {
        let (config, mut config_warning) = config::load();

        let configured = match Options::from_config(&config) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("invalid switch config, using defaults: {err}");
                config_warning = Some(err.to_string());
                Options::default()
            }
        };
        let is_active = configured.is_active || flags.active;
        let disabled = configured.disabled || flags.disabled;
        let configured = configured.is_active(is_active).disabled(disabled);

        (Self::with_gallery(configured, config_warning), Task::none())
    }

    /// Builds the gallery around an already resolved configured switch.
    fn with_gallery(configured: Options, config_warning: Option<String>) -> Self {
        let entries = gallery(configured)
            .into_iter()
            .map(|(title, options)| Entry {
                title: title.to_string(),
                host_active: options.is_active,
                switch: switch_button::State::new(options),
            })
            .collect();

        Self {
            entries,
            log: VecDeque::with_capacity(LOG_CAPACITY),
            config_warning,
        }
    }

    fn title(&self) -> String {
        "Switch Button Gallery".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.entries.iter().enumerate().map(|(index, entry)| {
            entry
                .switch
                .subscription()
                .with(index)
                .map(|(index, message)| Message::Switch(index, message))
        }))
    }

    /// Host callbacks for the switch at `index`.
    fn callbacks(index: usize) -> Callbacks<'static, Message> {
        Callbacks::new()
            .on_change(move |is_active| Message::Changed(index, is_active))
            .on_press(move |is_active| Message::Pressed(index, is_active))
            .on_long_press(move || Message::LongPressed(index))
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }

    /// Switches in display order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Callback log, oldest first.
    #[must_use]
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }
}

/// The gallery's switches. The first one comes from the user config.
fn gallery(configured: Options) -> Vec<(&'static str, Options)> {
    let dark = |hex: &str| color::parse_hex(hex).unwrap_or(iced::Color::BLACK);

    vec![
        ("From settings.toml", configured.text("Configured")),
        (
            "Animated label",
            Options::new()
                .text("Dark mode")
                .main_color(dark("#111111"))
                .original_color(iced::Color::WHITE)
                .tint_color(dark("#111111"))
                .same_text_color(true),
        ),
        (
            "Custom icons and border",
            Options::new()
                .text("Notifications")
                .active_image(icons::bell())
                .inactive_image(icons::bell_off())
                .style(|mut fragment| {
                    fragment.border = Some((border::WIDTH_SM, palette::GRAY_400));
                    fragment
                }),
        ),
        (
            "Legacy press ordering",
            Options::new()
                .text("One step behind")
                .press_ordering(PressOrdering::Legacy),
        ),
        (
            "Disabled",
            Options::new().text("Locked").is_active(true).disabled(true),
        ),
        ("Icon only", Options::new().text("Hidden").disable_text(true)),
    ]
}
