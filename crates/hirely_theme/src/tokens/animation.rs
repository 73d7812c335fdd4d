//! Animation tokens

/// Motion durations and easing curves.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTokens {
    pub duration_fast_ms: u32,
    pub duration_base_ms: u32,
    pub duration_slow_ms: u32,

    pub easing_standard: &'static str,
    pub easing_emphasized: &'static str,
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration_fast_ms: 120,
            duration_base_ms: 200,
            duration_slow_ms: 360,
            easing_standard: "cubic-bezier(0.2, 0.0, 0.0, 1.0)",
            easing_emphasized: "cubic-bezier(0.3, 0.0, 0.8, 0.15)",
        }
    }
}
