//! Seasonal pro tips shown below the collapsible sections.

#[cfg(test)]
#[path = "tips_test.rs"]
mod tips_test;

/// Icon choice for a tip card, rendered inline by the component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipIcon {
    Clock,
    Trend,
    Audience,
    Gift,
}

/// One pro tip card.
#[derive(Clone, Copy, Debug)]
pub struct ProTip {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: TipIcon,
    /// Accent token, resolved to a gradient by the stylesheet.
    pub accent: &'static str,
}

/// All four tips, in display order.
pub const PRO_TIPS: &[ProTip] = &[
    ProTip {
        title: "Timing Crucial",
        body: "Lancez votre campagne au moins 5-7 jours avant la date limite \
            de livraison Noël. L'algorithme a besoin de temps pour apprendre.",
        icon: TipIcon::Clock,
        accent: "festive",
    },
    ProTip {
        title: "Scalez Graduellement",
        body: "Si une ad performe, augmentez le budget de 20-30% max par jour \
            pour ne pas perturber l'algorithme.",
        icon: TipIcon::Trend,
        accent: "violet",
    },
    ProTip {
        title: "Audiences Larges",
        body: "En période de fêtes, les audiences larges performent mieux car \
            plus de personnes cherchent des cadeaux en dehors de leurs intérêts \
            habituels.",
        icon: TipIcon::Audience,
        accent: "blue",
    },
    ProTip {
        title: "Message Cadeau",
        body: "Ajoutez \"Idée cadeau parfaite\" ou \"Livré avant Noël\" dans \
            vos textes pour augmenter le taux de clic.",
        icon: TipIcon::Gift,
        accent: "green",
    },
];
