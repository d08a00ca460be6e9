//! Carousel rebuild plans for the news and event sliders.
//!
//! # Design
//! - Widgets are always destroyed before being recreated; nothing is patched.
//! - Below the minimum width the slider is destroyed and left as a plain list.
//! - Options serialize straight into the widget's constructor shape.

use std::collections::BTreeMap;

use serde::Serialize;

/// Width below which carousels are disabled when no configuration says otherwise.
pub const DEFAULT_MIN_WIDTH: u32 = 560;

const AUTOPLAY_DELAY_MS: u32 = 5_000;
const SPACE_BETWEEN: u32 = 20;
const BREAKPOINT_COLUMNS: [(u32, u32); 3] = [(560, 1), (768, 2), (1024, 3)];

/// Sliders present on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselKind {
    /// News cards.
    News,
    /// Event cards.
    Event,
}

impl CarouselKind {
    /// Both sliders, news first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::News, Self::Event]
    }

    /// Container the widget is mounted on.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::News => ".cardsSwiper--news",
            Self::Event => ".cardsSwiper--event",
        }
    }

    const fn section_selector(self) -> &'static str {
        match self {
            Self::News => ".section--news",
            Self::Event => ".section--event",
        }
    }

    /// Widget options for this slider.
    #[must_use]
    pub fn options(self) -> CarouselOptions {
        let section = self.section_selector();
        let breakpoints = BREAKPOINT_COLUMNS
            .iter()
            .map(|(width, columns)| {
                (
                    width.to_string(),
                    BreakpointOptions {
                        slides_per_view: *columns,
                    },
                )
            })
            .collect();
        CarouselOptions {
            slides_per_view: "auto",
            space_between: SPACE_BETWEEN,
            breakpoints,
            looped: matches!(self, Self::News),
            autoplay: matches!(self, Self::News).then_some(Autoplay {
                delay: AUTOPLAY_DELAY_MS,
                disable_on_interaction: false,
                pause_on_mouse_enter: true,
            }),
            navigation: Navigation {
                next_el: format!("{section} .swiper-button-next"),
                prev_el: format!("{section} .swiper-button-prev"),
            },
        }
    }
}

/// What the host should do with one slider.
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselPlan {
    /// Destroy any live instance and leave it destroyed.
    Disable {
        /// Slider affected.
        kind: CarouselKind,
    },
    /// Destroy any live instance and create a fresh one.
    Rebuild {
        /// Slider affected.
        kind: CarouselKind,
        /// Constructor options.
        options: CarouselOptions,
    },
}

impl CarouselPlan {
    /// Plan for `kind` at the given viewport width.
    #[must_use]
    pub fn for_width(kind: CarouselKind, viewport_width: u32, min_width: u32) -> Self {
        if viewport_width < min_width {
            Self::Disable { kind }
        } else {
            Self::Rebuild {
                kind,
                options: kind.options(),
            }
        }
    }

    /// Slider the plan targets.
    #[must_use]
    pub const fn kind(&self) -> CarouselKind {
        match self {
            Self::Disable { kind } | Self::Rebuild { kind, .. } => *kind,
        }
    }
}

/// Constructor options in the widget's JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Slides visible at once below the first breakpoint.
    pub slides_per_view: &'static str,
    /// Gap between slides in pixels.
    pub space_between: u32,
    /// Column counts keyed by minimum width.
    pub breakpoints: BTreeMap<String, BreakpointOptions>,
    /// Whether the slider wraps around.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Autoplay settings, news only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<Autoplay>,
    /// Prev/next button selectors.
    pub navigation: Navigation,
}

/// Per-breakpoint overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointOptions {
    /// Slides visible at once.
    pub slides_per_view: u32,
}

/// Autoplay settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    /// Milliseconds per slide.
    pub delay: u32,
    /// Keep autoplaying after user interaction.
    pub disable_on_interaction: bool,
    /// Pause while hovered.
    pub pause_on_mouse_enter: bool,
}

/// Navigation button selectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// Next button.
    pub next_el: String,
    /// Previous button.
    pub prev_el: String,
}
