use leptos::prelude::*;

use crate::config::use_landing_config;
#[cfg(feature = "hydrate")]
use crate::services::motion::is_scrolled;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("team", "Team"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let threshold = use_landing_config().scroll_threshold;
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Track the page offset once hydrated
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            set_scrolled.set(is_scrolled(crate::dom::scroll_y(), threshold));
            let handle = window_event_listener(leptos::ev::scroll, move |_| {
                set_scrolled.set(is_scrolled(crate::dom::scroll_y(), threshold));
            });
            on_cleanup(move || handle.remove());
        }
        let _ = (threshold, set_scrolled);
    });

    let on_link_click = move |ev: leptos::ev::MouseEvent, target: &'static str| {
        ev.prevent_default();
        set_menu_open.set(false);
        #[cfg(feature = "hydrate")]
        crate::dom::smooth_scroll_to(target);
        let _ = target;
    };

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| on_link_click(ev, "home")>
                    "AURAAILYF"
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=move || menu_open.get()>
                    {NAV_LINKS
                        .into_iter()
                        .map(move |(id, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        on:click=move |ev| on_link_click(ev, id)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div
                    id="hamburger"
                    class="hamburger"
                    class:active=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
