//! Age-Group Feeding Guides
//!
//! Detailed feeding guides for infants, toddlers and children, one guide per
//! developmental stage. Static content; `guide_for_age` picks the guide that
//! covers a given age.

use serde::Serialize;

/// Audience a guide is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideAudience {
    Infants,
    Toddlers,
    Children,
}

/// One feeding guide card
#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupGuide {
    pub title: &'static str,
    pub age_group: &'static str,
    pub audience: GuideAudience,
    /// Inclusive lower bound in months
    pub min_months: f64,
    /// Exclusive upper bound in months
    pub max_months: f64,
    pub recommendations: &'static [&'static str],
}

impl AgeGroupGuide {
    pub fn covers(&self, age_in_months: f64) -> bool {
        age_in_months >= self.min_months && age_in_months < self.max_months
    }
}

// ============================================================================
// EMBEDDED GUIDES (ordered by age)
// ============================================================================

static GUIDES: &[AgeGroupGuide] = &[
    AgeGroupGuide {
        title: "0-6 Months",
        age_group: "Exclusive Breastfeeding Period",
        audience: GuideAudience::Infants,
        min_months: 0.0,
        max_months: 6.0,
        recommendations: &[
            "Exclusive breastfeeding is recommended for the first 6 months",
            "Breast milk provides all the nutrition and hydration an infant needs",
            "No other foods or liquids are necessary during this period",
            "Breastfeed on demand, at least 8-12 times in 24 hours",
            "If breastfeeding isn't possible, use iron-fortified infant formula",
            "Hold your baby close during feeding for bonding",
            "Do not give honey to infants under 12 months (risk of botulism)",
        ],
    },
    AgeGroupGuide {
        title: "6-8 Months",
        age_group: "Beginning Complementary Foods",
        audience: GuideAudience::Infants,
        min_months: 6.0,
        max_months: 8.0,
        recommendations: &[
            "Continue breastfeeding or formula feeding on demand",
            "Introduce single-ingredient foods, one at a time, every 3-5 days",
            "Start with iron-rich foods like iron-fortified cereals",
            "Include pureed meat, poultry, beans, and lentils for iron",
            "Gradually introduce pureed or mashed fruits and vegetables",
            "Aim for 2-3 small meals per day in addition to milk",
            "Watch for allergic reactions when introducing new foods",
            "Avoid added salt, sugar, and honey in infant foods",
        ],
    },
    AgeGroupGuide {
        title: "8-12 Months",
        age_group: "Expanding Food Variety",
        audience: GuideAudience::Infants,
        min_months: 8.0,
        max_months: 12.0,
        recommendations: &[
            "Continue breastfeeding or formula feeding",
            "Increase texture gradually - mashed foods, soft pieces, finger foods",
            "Offer a wider variety of foods from all food groups",
            "Introduce soft, small pieces of fruits, vegetables, and proteins",
            "Begin offering soft table foods that the family eats",
            "Aim for 3 meals and 1-2 snacks per day",
            "Encourage self-feeding with finger foods to develop motor skills",
            "Introduce a cup for water or breast milk/formula",
            "Avoid cow's milk until 12 months of age",
        ],
    },
    AgeGroupGuide {
        title: "1-2 Years",
        age_group: "Toddler Transition",
        audience: GuideAudience::Toddlers,
        min_months: 12.0,
        max_months: 24.0,
        recommendations: &[
            "Transition from formula to whole cow's milk (if not breastfeeding)",
            "Aim for 2-3 cups of milk or equivalent dairy products daily",
            "Offer 3 meals and 2-3 small snacks per day",
            "Provide a variety of foods from all food groups",
            "Cut food into small pieces to prevent choking",
            "Encourage self-feeding with appropriate utensils",
            "Expect food jags and pickiness - continue offering variety",
            "Limit juice to 4 oz per day and avoid sugary drinks",
            "Avoid foods that pose choking hazards (whole grapes, nuts, popcorn)",
        ],
    },
    AgeGroupGuide {
        title: "2-3 Years",
        age_group: "Growing Independence",
        audience: GuideAudience::Toddlers,
        min_months: 24.0,
        max_months: 36.0,
        recommendations: &[
            "Transition to lower-fat milk (2%) if weight gain is appropriate",
            "Maintain consistent meal and snack schedule",
            "Practice division of responsibility: parents decide what, when, and where to eat; child decides whether and how much",
            "Serve child-sized portions (about 1 tablespoon per year of age)",
            "Include iron-rich foods daily to support brain development",
            "Limit added sugars and highly processed foods",
            "Encourage drinking water throughout the day",
            "Include a variety of colorful fruits and vegetables daily",
            "Respect hunger and fullness cues",
        ],
    },
    AgeGroupGuide {
        title: "3-5 Years",
        age_group: "Preschool Age",
        audience: GuideAudience::Children,
        min_months: 36.0,
        max_months: 72.0,
        recommendations: &[
            "Provide structured meals and snacks with flexibility for preferences",
            "Aim for half the plate to be fruits and vegetables",
            "Choose whole grains over refined grains when possible",
            "Include protein with meals and some snacks",
            "Serve low-fat or fat-free dairy products",
            "Limit highly processed foods, added sugars, and salt",
            "Encourage water as the primary beverage",
            "Involve children in meal planning and preparation",
            "Continue to be patient with picky eating",
            "Encourage mindful eating habits",
        ],
    },
    AgeGroupGuide {
        title: "6-12 Years",
        age_group: "School Age",
        audience: GuideAudience::Children,
        min_months: 72.0,
        max_months: 156.0,
        recommendations: &[
            "Establish healthy breakfast habits for better school performance",
            "Pack balanced lunches with variety from all food groups",
            "Teach children to recognize hunger and fullness cues",
            "Limit fast food and highly processed snacks",
            "Work on gradually reducing added sugar consumption",
            "Provide calcium-rich foods for bone development during growth",
            "Include iron-rich foods to support increased blood volume",
            "Maintain family meals as often as possible",
            "Teach basic nutrition concepts",
            "Model healthy eating behaviors",
        ],
    },
];

/// All guides, youngest first
pub fn all_guides() -> &'static [AgeGroupGuide] {
    GUIDES
}

pub fn guides_for_audience(audience: GuideAudience) -> impl Iterator<Item = &'static AgeGroupGuide> {
    all_guides().iter().filter(move |g| g.audience == audience)
}

/// Guide covering the given age, if any (none past 12 years)
pub fn guide_for_age(age_in_months: f64) -> Option<&'static AgeGroupGuide> {
    all_guides().iter().find(|g| g.covers(age_in_months))
}
