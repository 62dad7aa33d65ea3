//! The advisor page: every region of the one-page strategy report.

use leptos::prelude::*;

use crate::components::advisor_header::AdvisorHeader;
use crate::components::budget_table::BudgetTable;
use crate::components::checklist_panel::ChecklistPanel;
use crate::components::comparison_panel::ComparisonPanel;
use crate::components::context_summary::ContextSummary;
use crate::components::pro_tips::ProTips;
use crate::components::recommendation_panel::RecommendationPanel;
use crate::components::section::CollapsibleSection;
use crate::components::snowfall::Snowfall;
use crate::components::structure_panel::StructurePanel;
use crate::components::verdict_panel::VerdictPanel;
use crate::state::view::SectionId;

/// Full advisor report, top to bottom.
///
/// Collapsible sections share the accordion state; header, context, tips,
/// verdict and footer are always visible.
#[component]
pub fn AdvisorPage() -> impl IntoView {
    view! {
        <main class="advisor-page">
            <Snowfall/>
            <AdvisorHeader/>
            <ContextSummary/>

            <CollapsibleSection id=SectionId::Recommendation title="🏆 Recommandation Principale">
                <RecommendationPanel/>
            </CollapsibleSection>

            <CollapsibleSection id=SectionId::Comparison title="Comparaison Détaillée des Stratégies">
                <ComparisonPanel/>
            </CollapsibleSection>

            <CollapsibleSection id=SectionId::Structure title="Structure Recommandée de votre Campagne">
                <StructurePanel/>
            </CollapsibleSection>

            <CollapsibleSection id=SectionId::Budget title="Guide Budget vs Nombre d'Ad Sets">
                <BudgetTable/>
            </CollapsibleSection>

            <CollapsibleSection id=SectionId::Checklist title="✅ Checklist de Lancement">
                <ChecklistPanel/>
            </CollapsibleSection>

            <ProTips/>
            <VerdictPanel/>

            <footer class="advisor-page__footer">
                <p class="advisor-page__signoff">"🎄 Bonne campagne de Noël et bonnes ventes ! 🎁"</p>
                <p class="advisor-page__credit">"Meta Ads Strategy Advisor • 2024"</p>
            </footer>
        </main>
    }
}
