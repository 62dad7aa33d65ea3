//! Budget guidance table: daily spend bands vs. sustainable ad set counts.

#[cfg(test)]
#[path = "budget_test.rs"]
mod budget_test;

/// Confidence tone for a band, resolved to a colour by the components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTone {
    Positive,
    Caution,
    Info,
}

/// One row of the budget guide.
#[derive(Clone, Copy, Debug)]
pub struct BudgetBand {
    pub daily_budget: &'static str,
    pub recommended_sets: &'static str,
    pub confidence: &'static str,
    pub tone: ConfidenceTone,
}

/// Guide rows, from smallest to largest daily budget.
pub const BUDGET_BANDS: &[BudgetBand] = &[
    BudgetBand {
        daily_budget: "50-100€/jour",
        recommended_sets: "2 ad sets",
        confidence: "Fortement recommandé",
        tone: ConfidenceTone::Positive,
    },
    BudgetBand {
        daily_budget: "100-200€/jour",
        recommended_sets: "2-3 ad sets",
        confidence: "Recommandé",
        tone: ConfidenceTone::Positive,
    },
    BudgetBand {
        daily_budget: "200-500€/jour",
        recommended_sets: "3-4 ad sets",
        confidence: "Possible",
        tone: ConfidenceTone::Caution,
    },
    BudgetBand {
        daily_budget: "500€+/jour",
        recommended_sets: "5 ad sets",
        confidence: "Envisageable",
        tone: ConfidenceTone::Info,
    },
];

/// Learning-phase sizing rule shown under the table.
pub const GOLDEN_RULE: &str = "Chaque ad set a besoin d'environ 50 conversions \
    par semaine pour sortir de la phase d'apprentissage. Calculez : (Coût par \
    conversion × 50) × nombre d'ad sets = budget minimum/semaine.";
