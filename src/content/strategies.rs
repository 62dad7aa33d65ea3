//! Authored strategy comparison data.
//!
//! DESIGN
//! ======
//! The two compared ad set configurations are fixed editorial content, not
//! user data. They live in `const` tables of `&'static str` so the whole
//! comparison compiles into the binary and components can hold references
//! without cloning. Identifiers are closed enums rather than strings so a
//! typo in a card id is a compile error, not a dead click handler.

#[cfg(test)]
#[path = "strategies_test.rs"]
mod strategies_test;

/// Closed identifier set for the two compared configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyId {
    /// Two broad ad sets under one CBO campaign.
    Consolidated,
    /// Five narrow per-category ad sets.
    Segmented,
}

impl StrategyId {
    /// Authored slug, exposed as a DOM hook on the rendered card.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consolidated => "consolidee",
            Self::Segmented => "segmentee",
        }
    }
}

/// Setup difficulty tier shown on a card's stat row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexityTier {
    Easy,
    Medium,
    Advanced,
}

impl ComplexityTier {
    /// Authored French label for the tier.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Facile",
            Self::Medium => "Moyen",
            Self::Advanced => "Avancé",
        }
    }
}

/// Campaign shape a strategy expands into once launched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CampaignFootprint {
    pub ad_sets: u32,
    pub ads_per_set: u32,
    pub total_ads: u32,
    /// How CBO budget allocation behaves under this shape.
    pub optimization: &'static str,
}

/// One of the two compared ad set configurations.
#[derive(Clone, Copy, Debug)]
pub struct StrategyOption {
    pub id: StrategyId,
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    /// Editorial suitability score out of 100.
    pub score: u8,
    /// At most one option carries the recommendation badge.
    pub recommended: bool,
    pub complexity: ComplexityTier,
    /// Expected time to exit the Meta learning phase.
    pub learning_duration: &'static str,
    /// Authored verdict on budget efficiency.
    pub budget_efficiency: &'static str,
    pub structure: CampaignFootprint,
}

/// Both compared configurations, in display order.
pub const STRATEGY_OPTIONS: &[StrategyOption] = &[
    StrategyOption {
        id: StrategyId::Consolidated,
        name: "Stratégie Consolidée (2 Ad Sets)",
        description: "CBO avec 2 ad sets : Luminaires (5 ads) et Tableaux (5 ads). Design promo uniforme.",
        advantages: &[
            "Idéal pour débutants Meta Ads",
            "L'algorithme a plus de budget par ad set pour optimiser",
            "Sortie plus rapide de la phase d'apprentissage",
            "Gestion simplifiée (moins de variables à surveiller)",
            "CBO répartit automatiquement le budget vers les meilleurs performers",
            "Plus de données consolidées par ad set = décisions algo plus fiables",
            "Moins de risque de sur-segmentation avec petit budget",
        ],
        disadvantages: &[
            "Moins de granularité sur les insights par catégorie",
            "Audiences moins ciblées par type de produit",
            "Difficile d'identifier quel type de tableau performe mieux",
        ],
        score: 92,
        recommended: true,
        complexity: ComplexityTier::Easy,
        learning_duration: "2-4 jours",
        budget_efficiency: "Excellente",
        structure: CampaignFootprint {
            ad_sets: 2,
            ads_per_set: 5,
            total_ads: 10,
            optimization: "Maximum via CBO",
        },
    },
    StrategyOption {
        id: StrategyId::Segmented,
        name: "Stratégie Segmentée (5 Ad Sets)",
        description: "5 ad sets par catégorie : Suspension, Applique murale, Art abstrait, Art floral, Voyage artistique.",
        advantages: &[
            "Audiences très ciblées par intérêt",
            "Insights détaillés par catégorie de produit",
            "Possibilité de différencier les messages créatifs",
            "Meilleur contrôle sur le budget par catégorie",
        ],
        disadvantages: &[
            "Budget fragmenté entre 5 ad sets (moins par ad set)",
            "Phase d'apprentissage plus longue (50 conversions/ad set)",
            "Risque de sous-performance si budget insuffisant",
            "Plus complexe à gérer pour un débutant",
            "CBO peut starve certains ad sets prometteurs",
            "Audiences potentiellement trop petites",
        ],
        score: 68,
        recommended: false,
        complexity: ComplexityTier::Advanced,
        learning_duration: "5-10 jours",
        budget_efficiency: "Moyenne",
        structure: CampaignFootprint {
            ad_sets: 5,
            ads_per_set: 3,
            total_ads: 15,
            optimization: "Dilué par fragmentation",
        },
    },
];

/// Look up the authored option for `id`.
#[must_use]
pub fn strategy_option(id: StrategyId) -> &'static StrategyOption {
    match id {
        StrategyId::Consolidated => &STRATEGY_OPTIONS[0],
        StrategyId::Segmented => &STRATEGY_OPTIONS[1],
    }
}
