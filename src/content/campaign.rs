//! Recommended campaign tree: one CBO campaign fanned out into two ad sets.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

/// Campaign header shown at the root of the structure diagram.
pub const CAMPAIGN_NAME: &str = "Campagne CBO - Promo Noël";
pub const CAMPAIGN_SUBTITLE: &str = "Budget réparti automatiquement • Objectif: Conversions";

/// One recommended ad set with its creative lineup.
#[derive(Clone, Copy, Debug)]
pub struct AdSetPlan {
    pub name: &'static str,
    pub emoji: &'static str,
    /// Accent token, resolved to a gradient by the stylesheet.
    pub accent: &'static str,
    /// One product image per ad, in launch order.
    pub products: &'static [&'static str],
}

/// The two ad sets of the recommended consolidated structure.
pub const AD_SET_PLANS: &[AdSetPlan] = &[
    AdSetPlan {
        name: "Luminaires",
        emoji: "💡",
        accent: "amber",
        products: &[
            "Suspension #1",
            "Suspension #2",
            "Applique #1",
            "Applique #2",
            "Applique #3",
        ],
    },
    AdSetPlan {
        name: "Tableaux",
        emoji: "🎨",
        accent: "violet",
        products: &[
            "Art Abstrait #1",
            "Art Abstrait #2",
            "Art Floral #1",
            "Art Floral #2",
            "Voyage Artistique #1",
        ],
    },
];
