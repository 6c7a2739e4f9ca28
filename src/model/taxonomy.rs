//! Fixed Architectural / Urban / Green taxonomy.
//!
//! Three categories, six criteria each, four subcriteria per criterion. The
//! table is static data; category order is significant because it assigns
//! compass spokes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::scores::{CATEGORY_MAX, CRITERION_MAX, SUBCRITERION_MAX};

pub const CATEGORY_COUNT: usize = 3;
pub const CRITERIA_PER_CATEGORY: usize = 6;
pub const SUBCRITERIA_PER_CRITERION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Architectural,
    Urban,
    Green,
}

impl Category {
    /// Spoke order: index 0 points north.
    pub const ALL: [Category; CATEGORY_COUNT] =
        [Category::Architectural, Category::Urban, Category::Green];

    pub fn index(self) -> usize {
        match self {
            Category::Architectural => 0,
            Category::Urban => 1,
            Category::Green => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Architectural => "architectural",
            Category::Urban => "urban",
            Category::Green => "green",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Architectural => "Architectural",
            Category::Urban => "Urban",
            Category::Green => "Green",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Category::Architectural => 'A',
            Category::Urban => 'U',
            Category::Green => 'G',
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn criteria(self) -> &'static [CriterionDef; CRITERIA_PER_CATEGORY] {
        match self {
            Category::Architectural => &ARCHITECTURAL_CRITERIA,
            Category::Urban => &URBAN_CRITERIA,
            Category::Green => &GREEN_CRITERIA,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubcriterionDef {
    pub key: &'static str,
    pub label: &'static str,
    /// Documentation only.
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CriterionDef {
    pub key: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub subcriteria: [SubcriterionDef; SUBCRITERIA_PER_CRITERION],
}

/// Position of one subcriterion inside the taxonomy.
///
/// Only constructible from valid taxonomy coordinates, so every key resolves
/// to a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubcriterionKey {
    category: Category,
    criterion: u8,
    subcriterion: u8,
}

impl SubcriterionKey {
    pub fn new(category: Category, criterion_key: &str, subcriterion_key: &str) -> Option<Self> {
        let (ci, criterion) = category
            .criteria()
            .iter()
            .enumerate()
            .find(|(_, c)| c.key == criterion_key)?;
        let si = criterion
            .subcriteria
            .iter()
            .position(|s| s.key == subcriterion_key)?;
        Some(Self::at(category, ci, si))
    }

    /// Resolves a form key of the shape `<criterion>_<subcriterion>`.
    pub fn from_response_key(category: Category, key: &str) -> Option<Self> {
        for (ci, criterion) in category.criteria().iter().enumerate() {
            let Some(rest) = key
                .strip_prefix(criterion.key)
                .and_then(|r| r.strip_prefix('_'))
            else {
                continue;
            };
            if let Some(si) = criterion.subcriteria.iter().position(|s| s.key == rest) {
                return Some(Self::at(category, ci, si));
            }
        }
        None
    }

    pub(crate) fn at(category: Category, criterion: usize, subcriterion: usize) -> Self {
        debug_assert!(criterion < CRITERIA_PER_CATEGORY);
        debug_assert!(subcriterion < SUBCRITERIA_PER_CRITERION);
        Self {
            category,
            criterion: criterion as u8,
            subcriterion: subcriterion as u8,
        }
    }

    pub fn category(self) -> Category {
        self.category
    }

    pub fn criterion(self) -> &'static CriterionDef {
        &self.category.criteria()[self.criterion as usize]
    }

    pub fn subcriterion(self) -> &'static SubcriterionDef {
        &self.criterion().subcriteria[self.subcriterion as usize]
    }

    pub fn response_key(self) -> String {
        format!("{}_{}", self.criterion().key, self.subcriterion().key)
    }
}

impl fmt::Display for SubcriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.category.key(),
            self.criterion().key,
            self.subcriterion().key
        )
    }
}

/// Every subcriterion key in taxonomy order.
pub fn all_subcriterion_keys() -> impl Iterator<Item = SubcriterionKey> {
    Category::ALL.into_iter().flat_map(|category| {
        (0..CRITERIA_PER_CATEGORY).flat_map(move |ci| {
            (0..SUBCRITERIA_PER_CRITERION).map(move |si| SubcriterionKey::at(category, ci, si))
        })
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDoc {
    pub key: &'static str,
    pub title: &'static str,
    pub letter: char,
    pub maximum: u16,
    pub criterion_maximum: u8,
    pub subcriterion_maximum: u8,
    pub criteria: &'static [CriterionDef; CRITERIA_PER_CATEGORY],
}

pub fn taxonomy_doc() -> Vec<CategoryDoc> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryDoc {
            key: category.key(),
            title: category.title(),
            letter: category.letter(),
            maximum: CATEGORY_MAX,
            criterion_maximum: CRITERION_MAX,
            subcriterion_maximum: SUBCRITERION_MAX,
            criteria: category.criteria(),
        })
        .collect()
}

const COMPACTNESS: CriterionDef = CriterionDef {
    key: "compactness",
    title: "Compactness",
    short_title: "Compactness",
    subcriteria: [
        SubcriterionDef {
            key: "site_coverage_ratio",
            label: "Site Coverage Ratio",
            description: "Percentage of site covered by building footprint",
        },
        SubcriterionDef {
            key: "floor_area_ratio",
            label: "Floor Area Ratio (FAR)",
            description: "Total floor area divided by site area",
        },
        SubcriterionDef {
            key: "building_footprint_efficiency",
            label: "Building Footprint Efficiency",
            description: "Ratio of usable internal area to external wall area",
        },
        SubcriterionDef {
            key: "verticality_horizontal_spread",
            label: "Verticality/Horizontal Spread",
            description: "Average building height vs. site area",
        },
    ],
};

const SHARED_SPACES: CriterionDef = CriterionDef {
    key: "shared_spaces",
    title: "Shared Spaces",
    short_title: "Shared Spaces",
    subcriteria: [
        SubcriterionDef {
            key: "proportion_shared_area",
            label: "Proportion of Shared Area",
            description: "Percentage of total building area dedicated to shared spaces",
        },
        SubcriterionDef {
            key: "accessibility_shared_spaces",
            label: "Accessibility of Shared Spaces",
            description: "Proximity and ease of access to shared spaces for all residents",
        },
        SubcriterionDef {
            key: "diversity_shared_functions",
            label: "Diversity of Shared Functions",
            description: "Number and variety of functions supported by shared spaces",
        },
        SubcriterionDef {
            key: "management_maintenance_plan",
            label: "Management and Maintenance Plan",
            description: "Presence and clarity of a plan for shared space upkeep",
        },
    ],
};

const NEW_FORMS_LIVING: CriterionDef = CriterionDef {
    key: "new_forms_living",
    title: "New Forms of Living",
    short_title: "New Forms Living",
    subcriteria: [
        SubcriterionDef {
            key: "adaptability_multi_generational",
            label: "Adaptability for Multi-Generational Living",
            description: "Design features supporting cohabitation of different age groups",
        },
        SubcriterionDef {
            key: "integration_live_work",
            label: "Integration of Live-Work Spaces",
            description: "Provision for home offices or small business integration",
        },
        SubcriterionDef {
            key: "support_community_interaction",
            label: "Support for Community Interaction",
            description: "Design elements encouraging informal social interaction",
        },
        SubcriterionDef {
            key: "technological_integration",
            label: "Technological Integration Readiness",
            description: "Infrastructure for smart home technology and future upgrades",
        },
    ],
};

const FLEXIBILITY: CriterionDef = CriterionDef {
    key: "flexibility",
    title: "Flexibility",
    short_title: "Flexibility",
    subcriteria: [
        SubcriterionDef {
            key: "spatial_reconfigurability",
            label: "Spatial Reconfigurability",
            description: "Ease and cost of reconfiguring internal layouts",
        },
        SubcriterionDef {
            key: "functional_adaptability",
            label: "Functional Adaptability",
            description: "Capacity for spaces to serve multiple functions over time",
        },
        SubcriterionDef {
            key: "structural_modifiability",
            label: "Structural Modifiability",
            description: "Design allowing for future vertical or horizontal expansion/contraction",
        },
        SubcriterionDef {
            key: "material_system_interchangeability",
            label: "Material and System Interchangeability",
            description: "Use of standardized or easily replaceable components",
        },
    ],
};

const IDENTITY: CriterionDef = CriterionDef {
    key: "identity",
    title: "Identity",
    short_title: "Identity",
    subcriteria: [
        SubcriterionDef {
            key: "contextual_responsiveness",
            label: "Contextual Responsiveness",
            description: "Degree to which design reflects local culture, history, and architectural traditions",
        },
        SubcriterionDef {
            key: "distinctive_features",
            label: "Distinctive Architectural Features",
            description: "Presence of unique design elements contributing to a sense of place",
        },
        SubcriterionDef {
            key: "resident_personalization",
            label: "Resident Personalization Potential",
            description: "Opportunities for residents to customize their living spaces",
        },
        SubcriterionDef {
            key: "public_perception",
            label: "Public Perception and Appreciation",
            description: "Community feedback and aesthetic appeal to the broader public",
        },
    ],
};

const FUNCTIONALITY_ACCESS: CriterionDef = CriterionDef {
    key: "functionality_access",
    title: "Functionality and Access",
    short_title: "Functionality",
    subcriteria: [
        SubcriterionDef {
            key: "universal_design",
            label: "Universal Design Principles",
            description: "Adherence to principles ensuring accessibility for all users",
        },
        SubcriterionDef {
            key: "circulation_efficiency",
            label: "Efficiency of Circulation",
            description: "Clarity and directness of pathways within the building",
        },
        SubcriterionDef {
            key: "proximity_services",
            label: "Proximity to Essential Services",
            description: "Walking/cycling distance to public transport, shops, schools",
        },
        SubcriterionDef {
            key: "safety_security",
            label: "Safety and Security Measures",
            description: "Implementation of design features and systems for resident safety",
        },
    ],
};


const OPEN_SPACES: CriterionDef = CriterionDef {
    key: "open_spaces",
    title: "Open Spaces",
    short_title: "Open Spaces",
    subcriteria: [
        SubcriterionDef {
            key: "quantity_open_space",
            label: "Quantity of Open Space",
            description: "Percentage of site dedicated to open space",
        },
        SubcriterionDef {
            key: "quality_open_space",
            label: "Quality of Open Space",
            description: "Design, landscaping, and amenities of open spaces",
        },
        SubcriterionDef {
            key: "accessibility_open_space",
            label: "Accessibility of Open Space",
            description: "Ease of access for residents and public",
        },
        SubcriterionDef {
            key: "integration_urban_fabric",
            label: "Integration with Urban Fabric",
            description: "How well open spaces connect with surrounding streets and buildings",
        },
    ],
};

const MIXED_USE: CriterionDef = CriterionDef {
    key: "mixed_use",
    title: "Mixed Use",
    short_title: "Mixed Use",
    subcriteria: [
        SubcriterionDef {
            key: "diversity_functions",
            label: "Diversity of Functions",
            description: "Number and variety of residential, commercial, and public uses",
        },
        SubcriterionDef {
            key: "integration_uses",
            label: "Integration of Uses",
            description: "How well different uses are blended vertically and horizontally",
        },
        SubcriterionDef {
            key: "activity_throughout_day",
            label: "Activity Throughout the Day",
            description: "Presence of activity across different times of day",
        },
        SubcriterionDef {
            key: "economic_viability",
            label: "Economic Viability of Mixed Use",
            description: "Balance of uses supporting economic sustainability",
        },
    ],
};

const VARIATION_CONTEXT: CriterionDef = CriterionDef {
    key: "variation_context",
    title: "Variation in Context",
    short_title: "Variation Context",
    subcriteria: [
        SubcriterionDef {
            key: "respect_urban_grain",
            label: "Respect for Existing Urban Grain",
            description: "How new development relates to surrounding buildings",
        },
        SubcriterionDef {
            key: "material_architectural_palette",
            label: "Material and Architectural Palette",
            description: "Use of materials and styles that complement local context",
        },
        SubcriterionDef {
            key: "adaptability_topography",
            label: "Adaptability to Site Topography",
            description: "How well design responds to natural contours and features",
        },
        SubcriterionDef {
            key: "preservation_heritage",
            label: "Preservation of Heritage and Character",
            description: "Efforts to retain and enhance historical features",
        },
    ],
};

const DENSIFICATION_HUMAN_SCALE: CriterionDef = CriterionDef {
    key: "densification_human_scale",
    title: "Densification and Human Scale",
    short_title: "Densification",
    subcriteria: [
        SubcriterionDef {
            key: "density_achieved",
            label: "Density Achieved",
            description: "Dwelling units per hectare/acre",
        },
        SubcriterionDef {
            key: "pedestrian_experience",
            label: "Pedestrian Experience",
            description: "Design of streets and public spaces for pedestrian comfort",
        },
        SubcriterionDef {
            key: "building_height_massing",
            label: "Building Height and Massing",
            description: "How building heights relate to human scale and context",
        },
        SubcriterionDef {
            key: "permeability_connectivity",
            label: "Permeability and Connectivity",
            description: "Number of connections and pathways through the site",
        },
    ],
};

const WALKABILITY: CriterionDef = CriterionDef {
    key: "walkability",
    title: "Walkability",
    short_title: "Walkability",
    subcriteria: [
        SubcriterionDef {
            key: "pedestrian_network_quality",
            label: "Pedestrian Network Quality",
            description: "Condition, width, and safety of sidewalks and paths",
        },
        SubcriterionDef {
            key: "proximity_amenities",
            label: "Proximity to Amenities",
            description: "Average walking distance to daily necessities",
        },
        SubcriterionDef {
            key: "streetscape_design",
            label: "Streetscape Design",
            description: "Presence of street trees, benches, lighting, and other elements",
        },
        SubcriterionDef {
            key: "traffic_calming",
            label: "Traffic Calming Measures",
            description: "Implementation of strategies to reduce vehicle speed and volume",
        },
    ],
};

const NEIGHBORHOOD_BENEFITS: CriterionDef = CriterionDef {
    key: "neighborhood_benefits",
    title: "Neighborhood Benefits",
    short_title: "Neighborhood",
    subcriteria: [
        SubcriterionDef {
            key: "local_economic_contribution",
            label: "Local Economic Contribution",
            description: "Creation of local jobs and support for small businesses",
        },
        SubcriterionDef {
            key: "social_cohesion",
            label: "Social Cohesion and Interaction",
            description: "Design elements fostering social interaction and community building",
        },
        SubcriterionDef {
            key: "access_public_services",
            label: "Access to Public Services",
            description: "Proximity and quality of access to schools, healthcare, emergency services",
        },
        SubcriterionDef {
            key: "environmental_improvement",
            label: "Environmental Improvement",
            description: "Contribution to local environmental quality",
        },
    ],
};


const DAYLIGHT: CriterionDef = CriterionDef {
    key: "daylight",
    title: "Daylight",
    short_title: "Daylight",
    subcriteria: [
        SubcriterionDef {
            key: "daylight_autonomy",
            label: "Daylight Autonomy",
            description: "Percentage of occupied hours when daylight alone meets illumination requirements",
        },
        SubcriterionDef {
            key: "glare_control",
            label: "Glare Control",
            description: "Effectiveness of shading devices and window placement in preventing glare",
        },
        SubcriterionDef {
            key: "view_quality",
            label: "View Quality",
            description: "Access to outdoor views from interior spaces",
        },
        SubcriterionDef {
            key: "uniformity_daylight",
            label: "Uniformity of Daylight",
            description: "Even distribution of daylight throughout interior spaces",
        },
    ],
};

const WIND_AIR_QUALITY: CriterionDef = CriterionDef {
    key: "wind_air_quality",
    title: "Wind and Air Quality",
    short_title: "Air Quality",
    subcriteria: [
        SubcriterionDef {
            key: "natural_ventilation_potential",
            label: "Natural Ventilation Potential",
            description: "Design features supporting passive cooling and fresh air circulation",
        },
        SubcriterionDef {
            key: "cross_ventilation_effectiveness",
            label: "Cross-Ventilation Effectiveness",
            description: "Design allowing for efficient air movement across spaces",
        },
        SubcriterionDef {
            key: "indoor_air_pollutant_control",
            label: "Indoor Air Pollutant Control",
            description: "Use of low-VOC materials and effective filtration systems",
        },
        SubcriterionDef {
            key: "outdoor_air_quality_impact",
            label: "Outdoor Air Quality Impact",
            description: "Design strategies to mitigate exposure to outdoor pollutants",
        },
    ],
};

const ENERGY_EFFICIENCY: CriterionDef = CriterionDef {
    key: "energy_efficiency",
    title: "Energy Efficiency",
    short_title: "Energy",
    subcriteria: [
        SubcriterionDef {
            key: "building_envelope_performance",
            label: "Building Envelope Performance",
            description: "Insulation levels, window U-values, and air tightness",
        },
        SubcriterionDef {
            key: "renewable_energy_integration",
            label: "Renewable Energy Integration",
            description: "On-site generation of renewable energy",
        },
        SubcriterionDef {
            key: "efficient_hvac_systems",
            label: "Efficient HVAC Systems",
            description: "Use of high-efficiency heating, ventilation, and air conditioning systems",
        },
        SubcriterionDef {
            key: "smart_energy_management",
            label: "Smart Energy Management",
            description: "Implementation of building management systems and smart controls",
        },
    ],
};

const COSTS_AFFORDABILITY: CriterionDef = CriterionDef {
    key: "costs_affordability",
    title: "Costs and Affordability",
    short_title: "Costs",
    subcriteria: [
        SubcriterionDef {
            key: "initial_construction_cost",
            label: "Initial Construction Cost",
            description: "Per square meter cost of construction",
        },
        SubcriterionDef {
            key: "lifecycle_cost_analysis",
            label: "Lifecycle Cost Analysis",
            description: "Long-term operational and maintenance costs",
        },
        SubcriterionDef {
            key: "affordability_target_demographics",
            label: "Affordability for Target Demographics",
            description: "Housing prices/rents relative to local income levels",
        },
        SubcriterionDef {
            key: "financial_incentives",
            label: "Financial Incentives and Subsidies",
            description: "Utilization of government programs or financial aid",
        },
    ],
};

const BIOPHILIA: CriterionDef = CriterionDef {
    key: "biophilia",
    title: "Biophilia",
    short_title: "Biophilia",
    subcriteria: [
        SubcriterionDef {
            key: "connection_nature_buildings",
            label: "Connection to Nature within Buildings",
            description: "Integration of natural elements, views, and patterns indoors",
        },
        SubcriterionDef {
            key: "access_green_spaces",
            label: "Access to Green Spaces",
            description: "Proximity and quality of access to parks, gardens, and natural landscapes",
        },
        SubcriterionDef {
            key: "use_natural_materials",
            label: "Use of Natural Materials",
            description: "Incorporation of natural, non-toxic, and sustainably sourced materials",
        },
        SubcriterionDef {
            key: "biodiversity_enhancement",
            label: "Biodiversity Enhancement",
            description: "Design features supporting local flora and fauna",
        },
    ],
};

const SPECIAL_SOLUTIONS: CriterionDef = CriterionDef {
    key: "special_solutions",
    title: "Special Solutions",
    short_title: "Solutions",
    subcriteria: [
        SubcriterionDef {
            key: "water_harvesting_reuse",
            label: "Water Harvesting and Reuse",
            description: "Implementation of systems for rainwater collection and greywater recycling",
        },
        SubcriterionDef {
            key: "waste_management_recycling",
            label: "Waste Management and Recycling",
            description: "Provision for efficient waste segregation, composting, and recycling",
        },
        SubcriterionDef {
            key: "resilience_climate_change",
            label: "Resilience to Climate Change",
            description: "Design strategies to withstand extreme weather events",
        },
        SubcriterionDef {
            key: "innovative_technologies",
            label: "Innovative Technologies/Materials",
            description: "Adoption of cutting-edge solutions for sustainability and performance",
        },
    ],
};

static ARCHITECTURAL_CRITERIA: [CriterionDef; CRITERIA_PER_CATEGORY] = [
    COMPACTNESS,
    SHARED_SPACES,
    NEW_FORMS_LIVING,
    FLEXIBILITY,
    IDENTITY,
    FUNCTIONALITY_ACCESS,
];

static URBAN_CRITERIA: [CriterionDef; CRITERIA_PER_CATEGORY] = [
    OPEN_SPACES,
    MIXED_USE,
    VARIATION_CONTEXT,
    DENSIFICATION_HUMAN_SCALE,
    WALKABILITY,
    NEIGHBORHOOD_BENEFITS,
];

static GREEN_CRITERIA: [CriterionDef; CRITERIA_PER_CATEGORY] = [
    DAYLIGHT,
    WIND_AIR_QUALITY,
    ENERGY_EFFICIENCY,
    COSTS_AFFORDABILITY,
    BIOPHILIA,
    SPECIAL_SOLUTIONS,
];

#[cfg(test)]
#[path = "../../tests/src_inline/model/taxonomy.rs"]
mod tests;
