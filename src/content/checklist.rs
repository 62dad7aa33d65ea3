//! Launch checklist: the ordered steps to get the campaign live.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

/// One numbered launch step with its category tag.
#[derive(Clone, Copy, Debug)]
pub struct LaunchStep {
    pub task: &'static str,
    pub category: &'static str,
}

/// All launch steps, in execution order.
pub const LAUNCH_STEPS: &[LaunchStep] = &[
    LaunchStep {
        task: "Créer 1 campagne CBO avec objectif \"Ventes\" ou \"Conversions\"",
        category: "Structure",
    },
    LaunchStep {
        task: "Ad Set 1 \"Luminaires\" : audience large décoration intérieure + éclairage",
        category: "Ad Sets",
    },
    LaunchStep {
        task: "Ad Set 2 \"Tableaux\" : audience large art + décoration murale",
        category: "Ad Sets",
    },
    LaunchStep {
        task: "Ajouter 5 ads dans chaque ad set (1 image produit = 1 ad)",
        category: "Créatifs",
    },
    LaunchStep {
        task: "Design promo uniforme sur toutes les ads (badge -X%, texte Noël)",
        category: "Créatifs",
    },
    LaunchStep {
        task: "Définir budget minimum recommandé : 20-30€/ad set/jour",
        category: "Budget",
    },
    LaunchStep {
        task: "Configurer le pixel Facebook sur votre site",
        category: "Tracking",
    },
    LaunchStep {
        task: "Installer les événements de conversion (Purchase, AddToCart)",
        category: "Tracking",
    },
    LaunchStep {
        task: "Laisser tourner minimum 3-5 jours avant toute modification",
        category: "Patience",
    },
    LaunchStep {
        task: "Analyser les résultats et couper les ads sous-performantes",
        category: "Optimisation",
    },
];
