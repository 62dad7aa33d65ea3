//! Advertiser context: the catalogue the advice is written against.

/// One headline number in the context grid.
#[derive(Clone, Copy, Debug)]
pub struct ContextStat {
    pub value: &'static str,
    pub label: &'static str,
    /// Accent token for the stat value colour.
    pub accent: &'static str,
}

/// Catalogue-at-a-glance figures.
pub const CONTEXT_STATS: &[ContextStat] = &[
    ContextStat {
        value: "45",
        label: "Images totales",
        accent: "blue",
    },
    ContextStat {
        value: "5",
        label: "Catégories",
        accent: "violet",
    },
    ContextStat {
        value: "10",
        label: "Produits à tester",
        accent: "green",
    },
    ContextStat {
        value: "CBO",
        label: "Type campagne",
        accent: "amber",
    },
];

/// Product categories the catalogue splits into.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Suspension",
    "Applique murale",
    "Art abstrait",
    "Art floral",
    "Voyage artistique",
];
