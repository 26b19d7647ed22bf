//! Static curated ranking data: priority override rules and semantic term
//! clusters. The built-in tables are tuned for the coffee-business reference
//! corpus; custom tables can be supplied at engine construction.

/// One curated override: queries containing `pattern` as a substring surface
/// `files` ahead of scored results, in list order.
#[derive(Debug, Clone)]
pub struct PriorityRule {
    pub pattern: String,
    pub files: Vec<String>,
}

/// A named set of related terms used to boost topically aligned documents.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub name: String,
    pub terms: Vec<String>,
}

/// Immutable curated tables the engine is constructed with.
///
/// Rule order is part of the contract: priority filenames are collected by
/// iterating rules in table order, and a document's rank comes from its
/// position in that collected list.
#[derive(Debug, Clone)]
pub struct CuratedTables {
    priority: Vec<PriorityRule>,
    clusters: Vec<Cluster>,
}

impl CuratedTables {
    pub fn new(priority: Vec<PriorityRule>, clusters: Vec<Cluster>) -> Self {
        Self { priority, clusters }
    }

    /// Tables with no rules and no clusters; ranking falls back to pure
    /// weighted scoring.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// The built-in tables for the coffee-business reference corpus.
    pub fn builtin() -> Self {
        let priority = PRIORITY_RULES
            .iter()
            .map(|(pattern, files)| PriorityRule {
                pattern: (*pattern).to_string(),
                files: files.iter().map(|f| (*f).to_string()).collect(),
            })
            .collect();
        let clusters = SEMANTIC_CLUSTERS
            .iter()
            .map(|(name, terms)| Cluster {
                name: (*name).to_string(),
                terms: terms.iter().map(|t| (*t).to_string()).collect(),
            })
            .collect();
        Self::new(priority, clusters)
    }

    pub fn priority_rules(&self) -> &[PriorityRule] {
        &self.priority
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
}

impl Default for CuratedTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Curated keyword → document overrides, in match-collection order.
const PRIORITY_RULES: &[(&str, &[&str])] = &[
    // Company & introduction
    ("company", &["01-company-introduction.mdx"]),
    ("introduction", &["01-company-introduction.mdx"]),
    (
        "about",
        &["01-company-introduction.mdx", "11-about-founders-company.mdx"],
    ),
    (
        "founders",
        &["01-company-introduction.mdx", "11-about-founders-company.mdx"],
    ),
    (
        "abbotsford",
        &["01-company-introduction.mdx", "11-about-founders-company.mdx"],
    ),
    (
        "logan",
        &["01-company-introduction.mdx", "11-about-founders-company.mdx"],
    ),
    (
        "karl",
        &["01-company-introduction.mdx", "11-about-founders-company.mdx"],
    ),
    // Coffee strategies
    (
        "strategy",
        &[
            "02-strategy-one-elevate-coffee-game.mdx",
            "09-strategy-four-coffee-menu-design.mdx",
            "10-strategy-five-grow-your-brand.mdx",
        ],
    ),
    ("elevate", &["02-strategy-one-elevate-coffee-game.mdx"]),
    ("menu design", &["09-strategy-four-coffee-menu-design.mdx"]),
    (
        "menu",
        &[
            "09-strategy-four-coffee-menu-design.mdx",
            "17-playbook-tip-simple-menu.mdx",
        ],
    ),
    ("brand", &["10-strategy-five-grow-your-brand.mdx"]),
    ("white label", &["10-strategy-five-grow-your-brand.mdx"]),
    ("white labeling", &["10-strategy-five-grow-your-brand.mdx"]),
    // Coffee basics
    (
        "specialty coffee",
        &["04-specialty-coffee-journey.mdx", "01-company-introduction.mdx"],
    ),
    ("coffee journey", &["04-specialty-coffee-journey.mdx"]),
    ("bean to cup", &["04-specialty-coffee-journey.mdx"]),
    ("origins", &["05-origin-beans-flavor-profile.mdx"]),
    ("flavor", &["05-origin-beans-flavor-profile.mdx"]),
    ("ethiopian", &["05-origin-beans-flavor-profile.mdx"]),
    ("kenyan", &["05-origin-beans-flavor-profile.mdx"]),
    ("storage", &["06-ordering-storing-coffee-fresh.mdx"]),
    ("freshness", &["06-ordering-storing-coffee-fresh.mdx"]),
    ("roaster", &["07-pick-perfect-roaster.mdx"]),
    ("roasting", &["07-pick-perfect-roaster.mdx"]),
    // Case studies
    ("case study", &["08-case-study-fracpacks.mdx"]),
    ("fracpacks", &["08-case-study-fracpacks.mdx"]),
    ("packaging", &["08-case-study-fracpacks.mdx"]),
    ("cost savings", &["08-case-study-fracpacks.mdx"]),
    // Operations & efficiency
    (
        "efficiency",
        &[
            "25-operational-efficiency-sales.mdx",
            "13-30-second-fix-profit-win.mdx",
        ],
    ),
    (
        "workflow",
        &[
            "25-operational-efficiency-sales.mdx",
            "13-30-second-fix-profit-win.mdx",
        ],
    ),
    (
        "optimization",
        &[
            "25-operational-efficiency-sales.mdx",
            "13-30-second-fix-profit-win.mdx",
        ],
    ),
    ("skipper", &["14-successful-coffee-program-skipper.mdx"]),
    (
        "leadership",
        &[
            "14-successful-coffee-program-skipper.mdx",
            "21-how-design-your-team.mdx",
        ],
    ),
    ("calibration", &["15-difference-good-great-coffee-calibration.mdx"]),
    ("quality", &["15-difference-good-great-coffee-calibration.mdx"]),
    ("consistency", &["15-difference-good-great-coffee-calibration.mdx"]),
    // Equipment
    ("espresso machine", &["16-espresso-machine-heartbeat.mdx"]),
    (
        "equipment",
        &[
            "16-espresso-machine-heartbeat.mdx",
            "12-for-restaurants-groups-chains.mdx",
        ],
    ),
    ("machine", &["16-espresso-machine-heartbeat.mdx"]),
    ("maintenance", &["16-espresso-machine-heartbeat.mdx"]),
    // Menu & service
    ("simple menu", &["17-playbook-tip-simple-menu.mdx"]),
    (
        "profitability",
        &[
            "17-playbook-tip-simple-menu.mdx",
            "22-sales-improvement-strategies.mdx",
        ],
    ),
    ("service", &["17-playbook-tip-simple-menu.mdx"]),
    // Events & launch
    (
        "playbook",
        &[
            "18-specialty-coffee-playbook-launch.mdx",
            "01-company-introduction.mdx",
        ],
    ),
    (
        "coffee fest",
        &[
            "18-specialty-coffee-playbook-launch.mdx",
            "19-coffee-fest-nyc-coming-hot.mdx",
        ],
    ),
    (
        "nyc",
        &[
            "18-specialty-coffee-playbook-launch.mdx",
            "19-coffee-fest-nyc-coming-hot.mdx",
        ],
    ),
    ("launch", &["18-specialty-coffee-playbook-launch.mdx"]),
    (
        "event",
        &[
            "18-specialty-coffee-playbook-launch.mdx",
            "19-coffee-fest-nyc-coming-hot.mdx",
        ],
    ),
    // Partnership & philosophy
    (
        "partnership",
        &[
            "20-we-dont-push-brand-wrap-around-yours.mdx",
            "12-for-restaurants-groups-chains.mdx",
        ],
    ),
    ("philosophy", &["20-we-dont-push-brand-wrap-around-yours.mdx"]),
    ("collaboration", &["20-we-dont-push-brand-wrap-around-yours.mdx"]),
    (
        "support",
        &[
            "20-we-dont-push-brand-wrap-around-yours.mdx",
            "11-about-founders-company.mdx",
        ],
    ),
    // Team & culture
    (
        "team",
        &["21-how-design-your-team.mdx", "11-about-founders-company.mdx"],
    ),
    ("culture", &["21-how-design-your-team.mdx"]),
    ("hiring", &["21-how-design-your-team.mdx"]),
    // Enterprise services
    ("restaurants", &["12-for-restaurants-groups-chains.mdx"]),
    ("chains", &["12-for-restaurants-groups-chains.mdx"]),
    ("groups", &["12-for-restaurants-groups-chains.mdx"]),
    ("enterprise", &["12-for-restaurants-groups-chains.mdx"]),
    (
        "pricing",
        &[
            "23-pricing-strategies-profit-optimization.mdx",
            "12-for-restaurants-groups-chains.mdx",
        ],
    ),
    ("volume", &["12-for-restaurants-groups-chains.mdx"]),
    // Learning & education
    ("learn", &["03-what-you-will-learn.mdx"]),
    ("learning", &["03-what-you-will-learn.mdx"]),
    ("education", &["03-what-you-will-learn.mdx"]),
    ("chapter", &["03-what-you-will-learn.mdx"]),
    // Sales & revenue improvement
    (
        "sales",
        &[
            "22-sales-improvement-strategies.mdx",
            "09-strategy-four-coffee-menu-design.mdx",
        ],
    ),
    (
        "revenue",
        &[
            "22-sales-improvement-strategies.mdx",
            "23-pricing-strategies-profit-optimization.mdx",
        ],
    ),
    (
        "profit",
        &[
            "22-sales-improvement-strategies.mdx",
            "23-pricing-strategies-profit-optimization.mdx",
        ],
    ),
    (
        "upselling",
        &[
            "22-sales-improvement-strategies.mdx",
            "23-pricing-strategies-profit-optimization.mdx",
        ],
    ),
    (
        "upsell",
        &[
            "22-sales-improvement-strategies.mdx",
            "23-pricing-strategies-profit-optimization.mdx",
        ],
    ),
    (
        "margin",
        &[
            "23-pricing-strategies-profit-optimization.mdx",
            "22-sales-improvement-strategies.mdx",
        ],
    ),
    ("anchor pricing", &["23-pricing-strategies-profit-optimization.mdx"]),
    (
        "menu psychology",
        &[
            "22-sales-improvement-strategies.mdx",
            "09-strategy-four-coffee-menu-design.mdx",
        ],
    ),
    // Customer experience & retention
    (
        "customer experience",
        &[
            "24-customer-experience-retention.mdx",
            "22-sales-improvement-strategies.mdx",
        ],
    ),
    ("retention", &["24-customer-experience-retention.mdx"]),
    (
        "loyalty",
        &[
            "24-customer-experience-retention.mdx",
            "10-strategy-five-grow-your-brand.mdx",
        ],
    ),
    ("customer satisfaction", &["24-customer-experience-retention.mdx"]),
    (
        "repeat business",
        &[
            "24-customer-experience-retention.mdx",
            "22-sales-improvement-strategies.mdx",
        ],
    ),
    (
        "brand loyalty",
        &[
            "24-customer-experience-retention.mdx",
            "10-strategy-five-grow-your-brand.mdx",
        ],
    ),
    // Operational efficiency & sales
    ("throughput", &["25-operational-efficiency-sales.mdx"]),
    ("productivity", &["25-operational-efficiency-sales.mdx"]),
    (
        "cost reduction",
        &[
            "25-operational-efficiency-sales.mdx",
            "23-pricing-strategies-profit-optimization.mdx",
        ],
    ),
    (
        "operational",
        &[
            "25-operational-efficiency-sales.mdx",
            "13-30-second-fix-profit-win.mdx",
        ],
    ),
];

/// Term clusters for the semantic bonus. Activation requires an exact query
/// token match, so multi-word terms only ever contribute to the bonus count.
const SEMANTIC_CLUSTERS: &[(&str, &[&str])] = &[
    (
        "coffee_quality",
        &[
            "quality", "excellent", "premium", "specialty", "artisan",
            "gourmet", "taste", "flavor", "aroma",
        ],
    ),
    (
        "business_operations",
        &[
            "operations", "efficiency", "workflow", "process", "management",
            "optimization", "productivity",
        ],
    ),
    (
        "sales_revenue",
        &[
            "sales", "revenue", "profit", "pricing", "upselling", "margin",
            "earnings", "growth", "increase",
        ],
    ),
    (
        "customer_service",
        &[
            "customer", "service", "experience", "satisfaction", "loyalty",
            "retention", "support",
        ],
    ),
    (
        "equipment_technical",
        &[
            "equipment", "machine", "espresso", "grinder", "brewer",
            "maintenance", "calibration", "technical",
        ],
    ),
    (
        "menu_design",
        &[
            "menu", "design", "layout", "psychology", "pricing",
            "presentation", "visual",
        ],
    ),
    (
        "training_education",
        &[
            "training", "education", "learning", "teaching", "barista",
            "staff", "skills",
        ],
    ),
    (
        "branding_marketing",
        &[
            "brand", "branding", "marketing", "white label", "private label",
            "identity", "promotion",
        ],
    ),
    (
        "roasting_processing",
        &[
            "roasting", "roast", "processing", "beans", "origins", "farm",
            "green beans",
        ],
    ),
    (
        "storage_freshness",
        &[
            "storage", "freshness", "shelf life", "preservation", "timing",
            "temperature",
        ],
    ),
];
