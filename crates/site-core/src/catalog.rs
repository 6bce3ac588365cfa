//! The project portfolio: a static, immutable catalog loaded once and looked
//! up by id or filtered by category. Absence is a value, never a panic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Topography,
    Cadastre,
    Photogrammetry,
    Gis,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Topography,
        Category::Cadastre,
        Category::Photogrammetry,
        Category::Gis,
    ];

    /// Stable slug used in filter chips and data attributes.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Topography => "topography",
            Category::Cadastre => "cadastre",
            Category::Photogrammetry => "photogrammetry",
            Category::Gis => "gis",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Current portfolio filter. `All` is the initial state and always restores
/// the full catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[inline]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => project.category == cat,
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub image: &'static str,
    pub client: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub status: &'static str,
    pub long_description: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

/// The full ordered catalog. Ids are unique and stable; detail routes key off
/// them.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Exact-id lookup. `None` is the terminal "not found" signal the detail view
/// renders from.
pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Apply a category filter to the catalog, preserving catalog order. A filter
/// matching nothing yields an empty vec, which the portfolio view renders as
/// an empty grid.
pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    filter_slice(PROJECTS, filter)
}

/// Filter any project slice, preserving input order.
pub fn filter_slice(items: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    items.iter().filter(|p| filter.matches(p)).collect()
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Coastal Freeway Corridor Survey",
        category: Category::Topography,
        label: "Topography",
        image: "/assets/projects/freeway.jpg",
        client: "National Roads Authority",
        location: "Northern coastal corridor",
        year: "2023",
        status: "Delivered",
        long_description: "End-to-end topographic control for an 82 km freeway \
            corridor crossing mountainous terrain: primary control network, \
            longitudinal profiles, cross sections at 25 m intervals, and \
            as-built verification for three interchange structures.",
        challenges: &[
            "Steep, partially inaccessible terrain along 30 km of the route",
            "Control points had to tie into two different national datums",
            "Survey windows limited by active construction traffic",
        ],
        solutions: &[
            "GNSS static network densified with total-station traverses",
            "Rigorous datum transformation with published residuals",
            "Night observation windows coordinated with the contractor",
        ],
    },
    Project {
        id: 2,
        title: "Agricultural Land Cadastre",
        category: Category::Cadastre,
        label: "Cadastre",
        image: "/assets/projects/cadastre.jpg",
        client: "Provincial Land Registry",
        location: "Central plains district",
        year: "2022",
        status: "Delivered",
        long_description: "Systematic cadastral survey of 14,000 agricultural \
            parcels: boundary adjudication support, parcel fabric creation, \
            and migration of legacy paper records into a seamless digital \
            cadastre with full legal traceability.",
        challenges: &[
            "Decades of unrecorded informal boundary changes",
            "Legacy records in inconsistent local coordinate systems",
            "High dispute rate requiring defensible measurement evidence",
        ],
        solutions: &[
            "Orthophoto-assisted adjudication with field verification",
            "Least-squares parcel fabric adjustment across the district",
            "Evidence dossiers generated per parcel for the registry",
        ],
    },
    Project {
        id: 3,
        title: "Industrial Park Photogrammetric Model",
        category: Category::Photogrammetry,
        label: "Photogrammetry",
        image: "/assets/projects/industrial.jpg",
        client: "Regional Development Corporation",
        location: "Eastern industrial zone",
        year: "2023",
        status: "Delivered",
        long_description: "UAV photogrammetric survey of a 600 ha industrial \
            park: 2 cm GSD orthomosaic, dense point cloud, and a textured 3D \
            mesh feeding the operator's planning and drainage models.",
        challenges: &[
            "Active stack emissions restricted flight corridors",
            "Large reflective roof areas degrading image matching",
            "Tight absolute accuracy spec of 5 cm across the whole site",
        ],
        solutions: &[
            "Segmented flight plan with corridor-specific altitudes",
            "Cross-flight imagery and oblique captures over roofs",
            "Dense ground control with independent checkpoint validation",
        ],
    },
    Project {
        id: 4,
        title: "Gas Pipeline Deformation Monitoring",
        category: Category::Topography,
        label: "Topography",
        image: "/assets/projects/pipeline.jpg",
        client: "National Gas Transmission Co.",
        location: "Southwest transmission route",
        year: "2024",
        status: "In progress",
        long_description: "Quarterly deformation monitoring of a 120 km \
            high-pressure gas pipeline through landslide-prone terrain: \
            monument network observation, settlement analysis, and automated \
            movement alerts against engineering thresholds.",
        challenges: &[
            "Sub-centimeter repeatability required between epochs",
            "Monuments exposed to agricultural and flood damage",
            "Results needed within 72 hours of each campaign",
        ],
        solutions: &[
            "Forced-centering monument design with redundant observations",
            "Free-network adjustment with stable-point analysis per epoch",
            "Scripted processing pipeline producing alert-ready reports",
        ],
    },
    Project {
        id: 5,
        title: "Urban Green-Space GIS Platform",
        category: Category::Gis,
        label: "GIS",
        image: "/assets/projects/greenspace.jpg",
        client: "Metropolitan Parks Department",
        location: "Metropolitan area",
        year: "2022",
        status: "Delivered",
        long_description: "City-wide green-space inventory and management GIS: \
            380,000 trees and 2,100 ha of parkland captured, attributed and \
            served through a maintenance-planning web platform used by four \
            municipal departments.",
        challenges: &[
            "No authoritative base inventory existed",
            "Field crews with no prior GIS data-capture experience",
            "Integration with a legacy work-order system",
        ],
        solutions: &[
            "Mobile capture workflow with constrained attribute domains",
            "Two-day field training program and live QA dashboards",
            "Middleware syncing work orders against asset geometry",
        ],
    },
    Project {
        id: 6,
        title: "High-Rise Parcel Subdivision",
        category: Category::Cadastre,
        label: "Cadastre",
        image: "/assets/projects/highrise.jpg",
        client: "Private developer consortium",
        location: "Capital business district",
        year: "2024",
        status: "Delivered",
        long_description: "Three-dimensional cadastral subdivision of a 46-story \
            mixed-use tower: 612 strata units measured, volumetric parcels \
            defined, and registry-grade subdivision plans lodged and accepted \
            on first submission.",
        challenges: &[
            "Volumetric boundaries spanning shared mechanical floors",
            "As-built geometry deviating from architectural drawings",
            "Registry required a novel 3D plan presentation format",
        ],
        solutions: &[
            "Laser-scanned as-built model as the measurement basis",
            "Unit-by-unit reconciliation against the design BIM",
            "Plan format piloted with the registry before lodgement",
        ],
    },
];
