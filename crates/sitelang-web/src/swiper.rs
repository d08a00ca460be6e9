//! Calls into the page's Swiper widget, derived from carousel plans.

use sitelang_core::CarouselPlan;

/// One destroy-and-maybe-recreate call against a slider container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwiperCall {
    /// Container selector; its element carries the live `swiper` instance.
    pub selector: &'static str,
    /// Constructor options as JSON, or `None` to leave the slider destroyed.
    pub options: Option<String>,
}

impl SwiperCall {
    /// Translate a plan into a widget call.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the options cannot be encoded.
    pub fn from_plan(plan: &CarouselPlan) -> serde_json::Result<Self> {
        let options = match plan {
            CarouselPlan::Disable { .. } => None,
            CarouselPlan::Rebuild { options, .. } => Some(serde_json::to_string(options)?),
        };
        Ok(Self {
            selector: plan.kind().selector(),
            options,
        })
    }
}
