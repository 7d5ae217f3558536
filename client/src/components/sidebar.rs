//! Slide-in navigation sidebar for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open/closed and fullscreen state live in a `shell::OverlayController`;
//! this component only mirrors its observer into a signal and renders it.
//! Outside clicks and Escape close the panel through `DomEvents` listeners
//! that exist only while the panel is open.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use std::rc::Rc;

use leptos::prelude::*;
use shell::events::OutsideRegion;
use shell::overlay::{DismissalTrigger, OverlayController, OverlayState};
use shell::subscription::Subscription;

use crate::state::session::SessionContext;
use crate::util::dom_events::DomEvents;
use crate::util::fullscreen::fullscreen_detector;

pub const PANEL_ID: &str = "sidebar-panel";
pub const TOGGLE_ID: &str = "sidebar-toggle";

/// One navigation entry in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub emoji: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[MenuItem {
    label: "Fare Calculator",
    path: "/",
    emoji: "💬",
}];

fn toggle_icon(is_open: bool) -> &'static str {
    if is_open { "✕" } else { "☰" }
}

fn fullscreen_icon(is_fullscreen: bool) -> &'static str {
    if is_fullscreen { "🗗" } else { "⛶" }
}

fn fullscreen_label(is_fullscreen: bool) -> &'static str {
    if is_fullscreen {
        "Exit fullscreen"
    } else {
        "Enter fullscreen"
    }
}

fn build_controller(
    session: SessionContext,
    view_state: RwSignal<OverlayState>,
) -> Option<OverlayController> {
    let provider = session.provider()?;
    let controller = OverlayController::new(
        Rc::new(DomEvents),
        fullscreen_detector(),
        provider,
        OutsideRegion::new([PANEL_ID, TOGGLE_ID]),
    );
    controller.refresh_fullscreen();
    view_state.set(controller.state());
    controller.set_observer(move |_, state| {
        let _ = view_state.try_set(state);
    });
    Some(controller)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let view_state = RwSignal::new(OverlayState::default());
    let controller = StoredValue::new_local(build_controller(session, view_state));

    // The user can leave fullscreen with the browser's own controls.
    let on_change: shell::events::Handler = Rc::new(move || {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.refresh_fullscreen();
            }
        });
    });
    let fullscreen_watch: Option<Subscription> = DomEvents.on_fullscreen_change(on_change).ok();
    let fullscreen_watch = StoredValue::new_local(fullscreen_watch);

    on_cleanup(move || {
        fullscreen_watch.try_update_value(Option::take);
        controller.try_update_value(|c| {
            if let Some(c) = c.take() {
                c.unmount();
            }
        });
    });

    let on_toggle = move |_| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.toggle();
            }
        });
    };
    let on_backdrop = move |_| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.dismiss(DismissalTrigger::OutsideActivation);
            }
        });
    };
    let on_fullscreen = move |_| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.toggle_fullscreen();
            }
        });
    };
    let on_logout = move |_| {
        let Some(sign_out) = controller.with_value(|c| c.as_ref().map(OverlayController::sign_out))
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(e) = sign_out.await {
                leptos::logging::warn!("{e}");
            }
        });
    };

    let is_open = move || view_state.get().is_open;
    let is_fullscreen = move || view_state.get().is_fullscreen;

    view! {
        <button
            id=TOGGLE_ID
            class=move || {
                if is_open() { "sidebar-toggle sidebar-toggle--open" } else { "sidebar-toggle" }
            }
            aria-label="Toggle Menu"
            on:click=on_toggle
        >
            {move || toggle_icon(is_open())}
        </button>

        <Show when=is_open>
            <div class="sidebar-backdrop" on:click=on_backdrop></div>
            <aside id=PANEL_ID class="sidebar">
                <header class="sidebar__header">
                    <img class="sidebar__logo" src="/notes.svg" alt="logo"/>
                    <h1 class="sidebar__title">"First Cabs"</h1>
                    <button
                        class="sidebar__fullscreen"
                        aria-label=move || fullscreen_label(is_fullscreen())
                        on:click=on_fullscreen
                    >
                        {move || fullscreen_icon(is_fullscreen())}
                    </button>
                </header>

                <nav class="sidebar__menu">
                    <ul>
                        {MENU_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="sidebar__item">
                                        <a href=item.path>
                                            <span class="sidebar__emoji">{item.emoji}</span>
                                            <span class="sidebar__label">{item.label}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <footer class="sidebar__footer">
                    <button class="sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </footer>
            </aside>
        </Show>
    }
}
