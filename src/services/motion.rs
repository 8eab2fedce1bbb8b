//! Transform and class computations behind the page's visual effects.
//!
//! Handlers read coordinates from the DOM and hand them to these functions;
//! the returned strings are written straight into inline styles.

/// Injected once at startup; the ripple spans animate with it.
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

pub const NEUTRAL_TILT: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)";

/// Intersection observer settings for reveal-on-scroll.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_MARKER: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Pointer position as a fraction of the viewport, `0.0..=1.0` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRatio {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerRatio {
    fn default() -> Self {
        Self::CENTER
    }
}

impl PointerRatio {
    pub const CENTER: PointerRatio = PointerRatio { x: 0.5, y: 0.5 };

    /// A zero-sized viewport maps to the centre.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let ratio = |pos: f64, extent: f64| if extent > 0.0 { pos / extent } else { 0.5 };
        Self {
            x: ratio(client_x, width),
            y: ratio(client_y, height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Offset of the hero content: `strength` px across the full viewport,
/// zero at the centre.
pub fn parallax_offset(pointer: PointerRatio, strength: f64) -> Offset {
    Offset {
        x: (pointer.x - 0.5) * strength,
        y: (pointer.y - 0.5) * strength,
    }
}

/// Later floating elements move faster: element `i` gets `(i + 1) * 0.5`.
pub fn floating_transform(index: usize, pointer: PointerRatio, strength: f64) -> String {
    let speed = (index + 1) as f64 * 0.5;
    let offset = parallax_offset(pointer, strength * speed);
    format!("{} rotate({}deg)", offset.translate(), offset.x * 0.5)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CardTilt {
    /// `x`, `y` are relative to the card's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / 10.0,
            rotate_y: (center_x - x) / 10.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Square ripple centred in the clicked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn centered_in(width: f64, height: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: width / 2.0 - size / 2.0,
            top: height / 2.0 - size / 2.0,
        }
    }

    pub fn style(&self, duration_ms: u32) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); \
             transform: scale(0); animation: ripple {}s linear; pointer-events: none; \
             width: {size}px; height: {size}px; left: {}px; top: {}px;",
            f64::from(duration_ms) / 1000.0,
            self.left,
            self.top,
            size = self.size,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeIn => "fade-in",
            Entrance::SlideInLeft => "slide-in-left",
            Entrance::SlideInRight => "slide-in-right",
        }
    }

    /// Full class list for a revealable element.
    pub fn classes(self, base: &str) -> String {
        format!("{base} {} {REVEAL_MARKER}", self.class())
    }
}

/// Entrance delay of the `index`th element in a group, 0.1s apart.
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index * 100)
}

/// Sections carrying a `.section-title`, in document order.
pub const TITLED_SECTIONS: [&str; 5] = ["about", "services", "portfolio", "team", "contact"];

/// Section titles stagger as one group across the whole page.
pub fn section_title_delay(section: &str) -> String {
    let index = TITLED_SECTIONS
        .iter()
        .position(|id| *id == section)
        .unwrap_or_default();
    stagger_delay(index)
}

pub fn flip_transform(flipped: bool) -> &'static str {
    if flipped {
        "rotateY(180deg)"
    } else {
        "rotateY(0deg)"
    }
}

pub fn social_icon_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-5px) rotateY(360deg) scale(1.2)"
    } else {
        "translateY(0) rotateY(0deg) scale(1)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
        assert!(!is_scrolled(0.0, 100.0));
    }

    #[test]
    fn parallax_is_centred_on_the_viewport() {
        let center = PointerRatio::from_client(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(parallax_offset(center, 30.0), Offset { x: 0.0, y: 0.0 });

        let corner = PointerRatio::from_client(0.0, 800.0, 1000.0, 800.0);
        let offset = parallax_offset(corner, 30.0);
        assert_eq!(offset, Offset { x: -15.0, y: 15.0 });
        assert_eq!(offset.translate(), "translate(-15px, 15px)");
    }

    #[test]
    fn empty_viewport_maps_to_centre() {
        assert_eq!(PointerRatio::from_client(10.0, 10.0, 0.0, 0.0), PointerRatio::CENTER);
    }

    #[test]
    fn floating_elements_speed_up_with_index() {
        let pointer = PointerRatio { x: 1.0, y: 0.5 };
        assert_eq!(floating_transform(0, pointer, 50.0), "translate(12.5px, 0px) rotate(6.25deg)");
        assert_eq!(floating_transform(1, pointer, 50.0), "translate(25px, 0px) rotate(12.5deg)");
    }

    #[test]
    fn card_tilts_towards_pointer() {
        let tilt = CardTilt::from_pointer(0.0, 0.0, 200.0, 100.0);
        assert_eq!(tilt, CardTilt { rotate_x: -5.0, rotate_y: 10.0 });
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) translateZ(10px)"
        );
        let flat = CardTilt::from_pointer(100.0, 50.0, 200.0, 100.0);
        assert_eq!(flat, CardTilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn ripple_covers_the_longer_side() {
        let ripple = RippleGeometry::centered_in(200.0, 50.0);
        assert_eq!(ripple, RippleGeometry { size: 200.0, left: 0.0, top: -75.0 });
        let style = ripple.style(600);
        assert!(style.contains("animation: ripple 0.6s linear"));
        assert!(style.contains("width: 200px; height: 200px; left: 0px; top: -75px;"));
    }

    #[test]
    fn reveal_classes_and_stagger() {
        assert_eq!(Entrance::FadeIn.classes("stat-item"), "stat-item fade-in reveal");
        assert_eq!(Entrance::SlideInRight.class(), "slide-in-right");
        assert_eq!(stagger_delay(0), "0ms");
        assert_eq!(stagger_delay(3), "300ms");
    }

    #[test]
    fn section_titles_stagger_across_the_page() {
        let delays: Vec<String> = TITLED_SECTIONS.iter().map(|id| section_title_delay(id)).collect();
        assert_eq!(delays, vec!["0ms", "100ms", "200ms", "300ms", "400ms"]);
        assert_eq!(section_title_delay("hero"), "0ms");
    }

    #[test]
    fn hover_transforms() {
        assert_eq!(flip_transform(true), "rotateY(180deg)");
        assert_eq!(flip_transform(false), "rotateY(0deg)");
        assert_eq!(social_icon_transform(true), "translateY(-5px) rotateY(360deg) scale(1.2)");
    }
}
