use leptos::prelude::*;
use leptos_meta::Style;

use crate::components::{ContactSection, FlipCard, Footer, Hero, Navbar, ServiceCard};
use crate::config::use_landing_config;
#[cfg(feature = "hydrate")]
use crate::dom;
use crate::services::motion::{section_title_delay, stagger_delay, Entrance, RIPPLE_KEYFRAMES};

const STATS: [(&str, &str); 4] = [
    ("120+", "Homes Automated"),
    ("98%", "Client Satisfaction"),
    ("24/7", "Adaptive Support"),
    ("15", "Design Awards"),
];

const SERVICES: [(&str, &str, &str); 3] = [
    ("◈", "Ambient Intelligence", "Spaces that sense context and adjust light, sound and climate on their own."),
    ("◉", "Personal Assistants", "Voice and text companions tuned to your schedule, habits and tone."),
    ("◆", "Wellness Insights", "Gentle nudges built from sleep, movement and focus patterns."),
];

const PORTFOLIO: [(&str, &str, &str); 3] = [
    ("Lumen Residence", "Smart home", "Circadian lighting across 14 rooms that follows the sun."),
    ("Drift Studio", "Workspace", "Focus zones that quiet notifications when deep work starts."),
    ("Haven Suites", "Hospitality", "Guest rooms that remember preferences between stays."),
];

const TEAM: [(&str, &str, &str); 3] = [
    ("Maya Chen", "Founder & CEO", "Turns research prototypes into products people keep."),
    ("Jonas Albrecht", "Head of AI", "Builds the models that learn each household's rhythm."),
    ("Priya Natarajan", "Design Lead", "Makes technology disappear into the room."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_landing_config();
    let team_flip_back = config.team_flip_back_ms;
    let portfolio_flip_back = config.portfolio_flip_back_ms;
    let fade_in_delay = config.fade_in_delay_ms;

    // Page-level effects that need the whole document mounted
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let observer = StoredValue::new_local(dom::observe_reveals());
            on_cleanup(move || {
                observer.try_with_value(|observer| {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                });
            });
            dom::on_window_load(move || dom::fade_in_body(fade_in_delay));
        }
        let _ = fade_in_delay;
    });

    view! {
        <Style id="ripple-keyframes">{RIPPLE_KEYFRAMES}</Style>
        <Navbar/>

        <Hero/>

        <section id="about" class="about">
            <div class="container">
                <h2
                    class=Entrance::FadeIn.classes("section-title")
                    style:transition-delay=section_title_delay("about")
                >
                    "About Us"
                </h2>
                <p
                    class=Entrance::FadeIn.classes("about-description")
                    style:transition-delay=stagger_delay(0)
                >
                    "AURAAILYF designs calm, adaptive technology for the places people live and work. "
                    "Our systems learn quietly and stay out of the way."
                </p>
                <div class="stats">
                    {STATS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (value, label))| {
                            view! {
                                <div
                                    class=Entrance::FadeIn.classes("stat-item")
                                    style:transition-delay=stagger_delay(index)
                                >
                                    <span class="stat-number">{value}</span>
                                    <span class="stat-label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="services" class="services">
            <div class="container">
                <h2
                    class=Entrance::FadeIn.classes("section-title")
                    style:transition-delay=section_title_delay("services")
                >
                    "What We Do"
                </h2>
                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, description))| {
                            view! { <ServiceCard index icon title description/> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2
                    class=Entrance::FadeIn.classes("section-title")
                    style:transition-delay=section_title_delay("portfolio")
                >
                    "Our Work"
                </h2>
                <div class="portfolio-grid">
                    {PORTFOLIO
                        .into_iter()
                        .enumerate()
                        .map(|(index, (name, category, summary))| {
                            view! {
                                <FlipCard
                                    index
                                    item_class="portfolio-item"
                                    card_class="portfolio-card"
                                    flip_back_ms=portfolio_flip_back
                                    front=move || view! {
                                        <h3>{name}</h3>
                                        <span class="portfolio-category">{category}</span>
                                    }
                                    back=move || view! { <p>{summary}</p> }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="team" class="team">
            <div class="container">
                <h2
                    class=Entrance::FadeIn.classes("section-title")
                    style:transition-delay=section_title_delay("team")
                >
                    "Meet The Team"
                </h2>
                <div class="team-grid">
                    {TEAM
                        .into_iter()
                        .enumerate()
                        .map(|(index, (name, role, bio))| {
                            view! {
                                <FlipCard
                                    index
                                    item_class="team-member"
                                    card_class="member-card"
                                    flip_back_ms=team_flip_back
                                    front=move || view! {
                                        <h3>{name}</h3>
                                        <span class="member-role">{role}</span>
                                    }
                                    back=move || view! { <p>{bio}</p> }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <ContactSection/>
        <Footer/>
    }
}
