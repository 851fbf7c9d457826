use harbor_core::models::assessment::Level;

/// Fixed copy shown for a tier on the results page.
#[derive(Debug, Clone, Copy)]
pub struct TierContent {
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    /// Ids into [`crate::programs::all_programs`].
    pub programs: &'static [&'static str],
}

static MILD: TierContent = TierContent {
    title: "Early Awareness",
    description: "Your answers suggest your relationship with substances is starting to \
                  raise questions. This is a great moment to build healthy habits before \
                  patterns become harder to change.",
    recommendations: &[
        "Keep a simple daily log of when and why you use",
        "Identify two or three situations that trigger the urge to use",
        "Book a free discovery call to talk through your goals",
        "Explore our self-guided recovery resources",
    ],
    programs: &["recovery-foundations", "aftercare-community"],
};

static MODERATE: TierContent = TierContent {
    title: "Growing Concern",
    description: "Your answers show that substance use is affecting important parts of \
                  your life. Structured support now can help you regain control and build \
                  momentum toward lasting change.",
    recommendations: &[
        "Schedule a one-on-one coaching consultation",
        "Share what you are going through with someone you trust",
        "Set a concrete, short-term goal for reducing use",
        "Replace one using routine with a supportive activity this week",
    ],
    programs: &["guided-coaching", "recovery-foundations"],
};

static SEVERE: TierContent = TierContent {
    title: "Significant Impact",
    description: "Your answers indicate that substance use is having a serious impact on \
                  your health and daily life. You don't have to face this alone, and \
                  reaching out for intensive support is a strong first step.",
    recommendations: &[
        "Talk to a medical professional before stopping, especially if you experience withdrawal",
        "Book a priority intake call with a recovery coach",
        "Involve family or close friends in your support plan",
        "If you are in crisis, contact a local emergency line immediately",
    ],
    programs: &["intensive-recovery", "guided-coaching", "family-support"],
};

pub fn tier_content(level: Level) -> &'static TierContent {
    match level {
        Level::Mild => &MILD,
        Level::Moderate => &MODERATE,
        Level::Severe => &SEVERE,
    }
}
