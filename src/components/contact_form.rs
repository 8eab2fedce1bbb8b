#[cfg(feature = "hydrate")]
use leptos::logging::log;
use leptos::prelude::*;

use crate::config::use_landing_config;
use crate::models::{ContactDraft, ContactField, ValidationErrors};
use crate::services::motion::{section_title_delay, stagger_delay, Entrance};
use crate::services::{ContactFormHandle, SubmitPhase};
#[cfg(feature = "hydrate")]
use crate::{
    dom,
    services::{submit_contact, SubmitOutcome},
};

const SEND_LABEL: &str = "Send Message";

const CONTACT_ITEMS: [(&str, &str, &str); 3] = [
    ("✉", "Email", "hello@auraailyf.com"),
    ("☎", "Phone", "+1 (555) 014-2290"),
    ("⌖", "Studio", "221 Mercer Street, New York"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2
                    class=Entrance::FadeIn.classes("section-title")
                    style:transition-delay=section_title_delay("contact")
                >
                    "Get In Touch"
                </h2>
                <div class="contact-content">
                    <div class="contact-info">
                        {CONTACT_ITEMS
                            .into_iter()
                            .enumerate()
                            .map(|(index, (icon, label, value))| {
                                view! {
                                    <div
                                        class=Entrance::SlideInLeft.classes("contact-item")
                                        style:transition-delay=stagger_delay(index)
                                    >
                                        <span class="contact-icon">{icon}</span>
                                        <div>
                                            <h4>{label}</h4>
                                            <p>{value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}

/// The form's signals, as seen by the submit sequence.
#[derive(Clone, Copy)]
struct FormSignals {
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
    errors: RwSignal<ValidationErrors>,
    phase: RwSignal<SubmitPhase>,
}

impl ContactFormHandle for FormSignals {
    fn phase(&self) -> SubmitPhase {
        self.phase.get_untracked()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        let _ = self.phase.try_set(phase);
    }

    fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn set_errors(&self, errors: ValidationErrors) {
        let _ = self.errors.try_set(errors);
    }

    fn clear_fields(&self) {
        for field in [self.name, self.email, self.message] {
            let _ = field.try_set(String::new());
        }
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let timings = use_landing_config().submit_timings();

    let form = FormSignals {
        name: RwSignal::new(String::new()),
        email: RwSignal::new(String::new()),
        message: RwSignal::new(String::new()),
        errors: RwSignal::new(ValidationErrors::default()),
        phase: RwSignal::new(SubmitPhase::Idle),
    };
    let FormSignals { name, email, message, errors, phase } = form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            match submit_contact(&form, dom::scheduler(), timings) {
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Rejected(invalid) => log!("contact form rejected: {invalid}"),
                SubmitOutcome::Sending => log!("contact form accepted, simulating send"),
            }
        }
        let _ = (form, timings);
    };

    let error_slot = move |field: ContactField| {
        view! {
            <span
                id=field.error_slot()
                class="error-message"
                class:show=move || errors.with(|e| e.get(field).is_some())
            >
                {move || errors.with(|e| e.get(field).map(ToString::to_string).unwrap_or_default())}
            </span>
        }
    };

    view! {
        <form
            id="contact-form"
            class=Entrance::SlideInRight.classes("contact-form")
            novalidate
            on:submit=on_submit
        >
            <div class="form-group">
                <input type="text" id="name" name="name" placeholder="Your Name" bind:value=name/>
                {error_slot(ContactField::Name)}
            </div>
            <div class="form-group">
                <input type="email" id="email" name="email" placeholder="Your Email" bind:value=email/>
                {error_slot(ContactField::Email)}
            </div>
            <div class="form-group">
                <textarea id="message" name="message" rows="5" placeholder="Your Message" bind:value=message></textarea>
                {error_slot(ContactField::Message)}
            </div>
            <button
                type="submit"
                class="send-button"
                disabled=move || phase.get().is_disabled()
                style:background=move || phase.get().background()
            >
                {move || phase.get().label(SEND_LABEL).to_string()}
            </button>
        </form>
    }
}
