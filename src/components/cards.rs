use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::dom;
use crate::services::motion::{flip_transform, stagger_delay, Entrance, NEUTRAL_TILT};
#[cfg(feature = "hydrate")]
use crate::services::{motion::CardTilt, Scheduler};
use crate::services::{Millis, TimerId};

/// Service card that tilts towards the pointer while hovered.
#[component]
pub fn ServiceCard(
    index: usize,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let (transform, set_transform) = signal(NEUTRAL_TILT.to_string());

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((x, y, width, height)) = dom::local_pointer(&ev) {
                set_transform.set(CardTilt::from_pointer(x, y, width, height).transform());
            }
        }
        let _ = ev;
    };

    view! {
        <div
            class=Entrance::FadeIn.classes("service-card")
            style:transition-delay=stagger_delay(index)
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform.set(NEUTRAL_TILT.to_string())
        >
            <div class="service-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Card whose front flips away on hover and comes back `flip_back_ms` after
/// the pointer leaves.
#[component]
pub fn FlipCard(
    index: usize,
    /// Class of the hover target, e.g. `team-member`
    item_class: &'static str,
    /// Class of the rotating inner card
    card_class: &'static str,
    flip_back_ms: Millis,
    #[prop(into)] front: ViewFn,
    #[prop(into)] back: ViewFn,
) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);
    let pending = StoredValue::new(None::<TimerId>);

    let on_enter = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = pending.get_value() {
                dom::scheduler().cancel(id);
            }
        }
        pending.set_value(None);
        set_flipped.set(true);
    };

    let on_leave = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = dom::scheduler().schedule(
                flip_back_ms,
                Box::new(move || {
                    let _ = set_flipped.try_set(false);
                    let _ = pending.try_set_value(None);
                }),
            );
            pending.set_value(Some(id));
        }
        let _ = flip_back_ms;
    };

    view! {
        <div
            class=Entrance::FadeIn.classes(item_class)
            style:transition-delay=stagger_delay(index)
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class=card_class style:transform=move || flip_transform(flipped.get())>
                <div class="card-front">{front.run()}</div>
                <div class="card-back">{back.run()}</div>
            </div>
        </div>
    }
}
