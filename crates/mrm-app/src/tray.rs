//! macOS status bar integration.
//!
//! Owns the event loop: a status bar item whose title is the badge, the
//! native menu built from [`MenuModel`], and the poll timer. Menu clicks
//! arrive through muda's global handler and are forwarded into the loop
//! as user events so they wake the timer sleep.

use std::time::Instant;

use muda::{
    CheckMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu,
    accelerator::{Accelerator, Code, Modifiers},
};
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
use tracing::info;
use tray_icon::{TrayIcon, TrayIconBuilder};

use crate::app::{Action, App, Directive};
use crate::dialog;
use crate::interval::RefreshInterval;
use crate::menu::{self, Item, MenuModel, ids};

/// Events injected into the tao loop from outside.
enum UserEvent {
    /// A menu item was clicked.
    Menu(MenuEvent),
}

/// Run the status bar application.
///
/// Never returns; the Quit item exits the process.
pub fn run(mut app: App) -> ! {
    let mut event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    // Menu bar utility: no Dock icon, no app switcher entry.
    event_loop.set_activation_policy(ActivationPolicy::Accessory);

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    // The status bar item must be created after the loop starts, so it
    // lives in the closure and is built on StartCause::Init.
    let mut tray: Option<TrayIcon> = None;
    let mut next_poll = Instant::now() + app.config.refresh_interval.duration();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                let native = build_native_menu(&app.menu_model());
                let icon = TrayIconBuilder::new()
                    .with_menu(Box::new(native))
                    .with_title(app.state.badge())
                    .build()
                    .expect("Failed to create status bar item");
                tray = Some(icon);
                info!(
                    "Status bar item ready; first poll in {}",
                    app.config.refresh_interval
                );
            }
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                app.poll();
                next_poll = Instant::now() + app.config.refresh_interval.duration();
                refresh_tray(&app, tray.as_ref());
            }
            Event::UserEvent(UserEvent::Menu(menu_event)) => {
                if let Some(action) = menu::action_for_id(menu_event.id().0.as_str()) {
                    match app.update(action) {
                        Directive::None => {}
                        Directive::PollNow => app.poll(),
                        Directive::RestartTimer => {
                            next_poll = Instant::now() + app.config.refresh_interval.duration();
                        }
                        Directive::ShowPreferences { current } => {
                            let reply = match dialog::prompt_feed_urls(&current) {
                                Some(text) => Action::PreferencesSubmitted(text),
                                None => Action::PreferencesCancelled,
                            };
                            if app.update(reply) == Directive::PollNow {
                                app.poll();
                            }
                        }
                        Directive::ShowAbout => dialog::show_about(),
                        Directive::Quit => {
                            info!("Quit selected; exiting");
                            std::process::exit(0);
                        }
                    }
                    refresh_tray(&app, tray.as_ref());
                }
            }
            _ => {}
        }

        *control_flow = ControlFlow::WaitUntil(next_poll);
    })
}

/// Rebuild the native menu and badge after a state change.
fn refresh_tray(app: &App, tray: Option<&TrayIcon>) {
    if let Some(tray) = tray {
        let native = build_native_menu(&app.menu_model());
        tray.set_menu(Some(Box::new(native)));
        tray.set_title(Some(app.state.badge()));
    }
}

/// Map the platform-independent menu model onto a muda menu.
fn build_native_menu(model: &MenuModel) -> Menu {
    let native = Menu::new();

    for item in &model.items {
        match item {
            Item::Status { label } | Item::Placeholder { label } | Item::SectionLabel { label } => {
                native
                    .append(&MenuItem::new(label, false, None))
                    .expect("Failed to add menu item");
            }
            Item::IntervalPicker { current } => {
                let submenu = Submenu::new(format!("Refresh Interval: {current}"), true);
                for option in RefreshInterval::ALL {
                    submenu
                        .append(&CheckMenuItem::with_id(
                            ids::interval(option),
                            option.label(),
                            true,
                            option == *current,
                            None,
                        ))
                        .expect("Failed to add interval choice");
                }
                native
                    .append(&submenu)
                    .expect("Failed to add interval submenu");
            }
            Item::Separator => {
                native
                    .append(&PredefinedMenuItem::separator())
                    .expect("Failed to add separator");
            }
            Item::Entry { index, label } => {
                native
                    .append(&MenuItem::with_id(ids::entry(*index), label, true, None))
                    .expect("Failed to add merge request entry");
            }
            Item::Preferences => {
                native
                    .append(&MenuItem::with_id(
                        ids::PREFERENCES,
                        "Preferences",
                        true,
                        Some(Accelerator::new(Some(Modifiers::META), Code::Comma)),
                    ))
                    .expect("Failed to add Preferences menu item");
            }
            Item::About => {
                native
                    .append(&MenuItem::with_id(ids::ABOUT, "About", true, None))
                    .expect("Failed to add About menu item");
            }
            Item::Quit => {
                native
                    .append(&MenuItem::with_id(
                        ids::QUIT,
                        "Quit",
                        true,
                        Some(Accelerator::new(Some(Modifiers::META), Code::KeyQ)),
                    ))
                    .expect("Failed to add Quit menu item");
            }
        }
    }

    native
}
