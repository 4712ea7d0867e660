//! Interpretive text placed under the charts.

use crate::plotting::ChartKind;

/// A static block of commentary: paragraphs, then optional titled points.
pub struct Narrative {
    pub paragraphs: &'static [&'static str],
    pub points: &'static [(&'static str, &'static str)],
}

const HEAT_TIERS: Narrative = Narrative {
    paragraphs: &[
        "Milder sauces showing slightly lower completion rates than extreme ones looks surprising at first, \
         but it comes from how the data is structured rather than from spicy sauces being easier.",
        "Early seasons paired milder lineups with lower overall completion, while later seasons brought hotter \
         sauces alongside guests who arrived better prepared. That lifts the Extreme tier and reflects the \
         show's evolution and guest endurance, not actual heat tolerance.",
    ],
    points: &[],
};

const SEASON_TREND: Narrative = Narrative {
    paragraphs: &[
        "This chart follows guest completion rates across the seasons.",
        "Early seasons fluctuate the most, reflecting an experimental phase when guests were less prepared \
         for the intensity and the sauce lineup changed often. As the series matured, completion settled \
         near 95-100%, pointing to two shifts:",
    ],
    points: &[
        (
            "Guest preparedness",
            "later guests came mentally and physically ready, often studying earlier episodes and planning a strategy.",
        ),
        (
            "Show calibration",
            "producers refined pacing, sauce order and interview rhythm to balance entertainment and survivability.",
        ),
    ],
};

const SEASON_FORMAT: Narrative = Narrative {
    paragraphs: &[
        "Heat and completion side by side show how the format evolved. Early seasons used much milder sauces \
         and later ones pushed Scoville ratings far higher.",
        "Completion held steady and even improved slightly, which suggests guests became better prepared \
         and the show tightened its pacing and structure over time.",
    ],
    points: &[],
};

const GUEST_POPULARITY: Narrative = Narrative {
    paragraphs: &[
        "Guests are ranked by their average episode popularity and colored by whether they completed the \
         challenge. Each label is the guest's average view count.",
        "High-view guests who failed show that an unfinished run can still drive huge engagement through \
         personality alone.",
    ],
    points: &[],
};

/// Commentary for a chart, if it has any.
pub fn narrative_for(kind: ChartKind) -> Option<&'static Narrative> {
    match kind {
        ChartKind::CompletionShare => None,
        ChartKind::HeatTiers => Some(&HEAT_TIERS),
        ChartKind::SeasonTrend => Some(&SEASON_TREND),
        ChartKind::SeasonFormat => Some(&SEASON_FORMAT),
        ChartKind::GuestPopularity => Some(&GUEST_POPULARITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narratives_follow_later_charts() {
        assert!(narrative_for(ChartKind::CompletionShare).is_none());
        for kind in &ChartKind::ALL[1..] {
            let narrative = narrative_for(*kind).unwrap();
            assert!(!narrative.paragraphs.is_empty());
        }
        assert_eq!(narrative_for(ChartKind::SeasonTrend).unwrap().points.len(), 2);
    }
}
