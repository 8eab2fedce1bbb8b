use leptos::prelude::*;

use crate::services::motion::social_icon_transform;

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("https://x.com/auraailyf", "X", "𝕏"),
    ("https://www.instagram.com/auraailyf", "Instagram", "◎"),
    ("https://www.linkedin.com/company/auraailyf", "LinkedIn", "in"),
    ("https://github.com/auraailyf", "GitHub", "⌥"),
];

#[component]
fn SocialIcon(href: &'static str, label: &'static str, glyph: &'static str) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <a
            href=href
            class="social-icon"
            aria-label=label
            target="_blank"
            rel="noopener"
            style:transform=move || social_icon_transform(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {glyph}
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <p class="footer-brand">"AURAAILYF"</p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(href, label, glyph)| view! { <SocialIcon href label glyph/> })
                            .collect_view()}
                    </div>
                </div>
                <p class="footer-note">"© 2026 AURAAILYF. All rights reserved."</p>
            </div>
        </footer>
    }
}
