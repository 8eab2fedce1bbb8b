use leptos::html;
use leptos::prelude::*;

use crate::config::use_landing_config;
#[cfg(feature = "hydrate")]
use crate::dom;
use crate::services::motion::{floating_transform, Offset, PointerRatio, RippleGeometry};
#[cfg(feature = "hydrate")]
use crate::services::{motion::parallax_offset, start_typewriter, Debouncer, Scheduler};

const FLOATING_ELEMENTS: usize = 4;

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_landing_config();
    let quantum = config.parallax_quantum_ms;
    let parallax_strength = config.parallax_strength;
    let floating_strength = config.floating_strength;
    let typewriter_delay = config.typewriter_delay_ms;
    let ripple_ms = config.ripple_ms;
    let title_text = StoredValue::new(config.typewriter_text.clone());

    let hero_ref = NodeRef::<html::Section>::new();
    let content_ref = NodeRef::<html::Div>::new();

    let (content_offset, set_content_offset) = signal(Offset::default());
    let (pointer, set_pointer) = signal(PointerRatio::CENTER);
    let (title, set_title) = signal(config.typewriter_text);
    let (title_shown, set_title_shown) = signal(false);
    let ripples = RwSignal::new(Vec::<(u64, RippleGeometry)>::new());
    let next_ripple = StoredValue::new(0u64);

    // Pointer tracking: floating elements follow every move, the hero
    // content only through the debounced parallax.
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let parallax = Debouncer::new(dom::scheduler(), quantum, move |pointer: PointerRatio| {
                let (Some(hero), Some(_content)) =
                    (hero_ref.get_untracked(), content_ref.get_untracked())
                else {
                    return;
                };
                if dom::is_on_screen(&hero) {
                    set_content_offset.set(parallax_offset(pointer, parallax_strength));
                }
            });
            let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
                let pointer = dom::pointer_ratio(&ev);
                set_pointer.set(pointer);
                parallax.call(pointer);
            });
            on_cleanup(move || handle.remove());
        }
        let _ = (quantum, parallax_strength, set_content_offset, set_pointer);
    });

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        dom::on_window_load(move || {
            set_title_shown.set(true);
            let text = title_text.get_value();
            start_typewriter(dom::scheduler(), &text, typewriter_delay, move |revealed| {
                let _ = set_title.try_set(revealed.to_string());
            });
        });
        let _ = (title_text, typewriter_delay, set_title, set_title_shown);
    });

    #[allow(unused_variables)]
    let on_cta_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((width, height)) = dom::current_target_size(&ev) {
                let id = next_ripple.get_value();
                next_ripple.set_value(id + 1);
                ripples.update(|list| list.push((id, RippleGeometry::centered_in(width, height))));
                dom::scheduler().schedule(
                    ripple_ms,
                    Box::new(move || {
                        let _ = ripples.try_update(|list| list.retain(|(ripple, _)| *ripple != id));
                    }),
                );
            }
            dom::smooth_scroll_to("contact");
        }
        let _ = (ev, next_ripple);
    };

    view! {
        <section id="home" class="hero" node_ref=hero_ref>
            <div class="floating-elements">
                {(0..FLOATING_ELEMENTS)
                    .map(|index| {
                        view! {
                            <div
                                class="floating-element"
                                style:transform=move || {
                                    floating_transform(index, pointer.get(), floating_strength)
                                }
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                class="hero-content"
                node_ref=content_ref
                style:transform=move || content_offset.get().translate()
            >
                <h1 class="hero-title" style:opacity=move || if title_shown.get() { "1" } else { "0" }>
                    {move || title.get()}
                </h1>
                <p class="hero-subtitle">"Intelligent living, designed around you"</p>
                <p class="hero-description">
                    "We build adaptive AI experiences that learn your rhythm and quietly "
                    "take care of the rest."
                </p>
                <button id="cta-button" class="cta-button" on:click=on_cta_click>
                    "Get Started"
                    <For
                        each=move || ripples.get()
                        key=|(id, _)| *id
                        children=move |(_, geometry): (u64, RippleGeometry)| {
                            view! { <span class="ripple" style=geometry.style(ripple_ms)></span> }
                        }
                    />
                </button>
            </div>
        </section>
    }
}
