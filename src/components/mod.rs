mod cards;
mod contact_form;
mod footer;
mod hero;
mod nav;

pub use cards::{FlipCard, ServiceCard};
pub use contact_form::{ContactForm, ContactSection};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
