//! Static copy for the composition views: services, stats, navigation and
//! footer. Immutable for the process lifetime and available synchronously.

#[derive(Debug)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

pub fn services() -> &'static [Service] {
    SERVICES
}

#[derive(Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn stats() -> &'static [Stat] {
    STATS
}

/// One "why choose us" card: a differentiator with a short pitch.
#[derive(Debug)]
pub struct Strength {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn strengths() -> &'static [Strength] {
    STRENGTHS
}

#[derive(Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn nav_links() -> &'static [NavLink] {
    NAV_LINKS
}

pub const COMPANY_NAME: &str = "Meridian Geomatics";
pub const COMPANY_TAGLINE: &str = "Spatial intelligence for a smarter future";
pub const HERO_HEADLINE: &str = "GIS for the decisions that shape tomorrow";
pub const HERO_SUBHEAD: &str =
    "Meridian Geomatics turns field measurements into living spatial data: \
     surveying, photogrammetry and GIS platforms built for the long run.";
pub const FOOTER_CONTACT: &str = "contact@meridian-geomatics.example · +1 555 010 2030";

pub const STRENGTHS_TAG: &str = "Core values";
pub const STRENGTHS_TITLE: &str = "What sets us apart";
pub const STRENGTHS_INTRO: &str =
    "Experience, technical depth and current tooling combined into precise, \
     dependable spatial solutions.";

/// Local selection state for the services tab strip. The selected index is
/// always in range; out-of-range requests are ignored so an invalid index is
/// unreachable through the exposed control.
#[derive(Clone, Copy, Debug)]
pub struct TabSelection {
    index: usize,
    len: usize,
}

impl TabSelection {
    /// A selection over `len` tabs, starting at the first. `len` must be
    /// nonzero; the content tables above guarantee that.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "empty tab strip");
        Self { index: 0, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Select a tab. Returns true if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len && index != self.index {
            self.index = index;
            true
        } else {
            false
        }
    }
}

static SERVICES: &[Service] = &[
    Service {
        title: "Topographic Surveying",
        summary: "Control networks, corridor surveys and as-built verification \
            with engineering-grade accuracy, from single sites to hundred-\
            kilometer routes.",
        features: &[
            "GNSS and total-station control networks",
            "Corridor profiles and cross sections",
            "Deformation and settlement monitoring",
            "As-built and quantity surveys",
        ],
    },
    Service {
        title: "Photogrammetry & UAV Mapping",
        summary: "Drone-based capture producing orthomosaics, dense point \
            clouds and textured 3D models, validated against independent \
            ground truth.",
        features: &[
            "Centimeter-GSD orthomosaic production",
            "Dense point clouds and 3D meshes",
            "Volumetric and stockpile analysis",
            "Checkpoint-validated accuracy reporting",
        ],
    },
    Service {
        title: "GIS & Remote Sensing",
        summary: "Spatial data platforms and analysis pipelines that keep \
            asset inventories, land records and environmental baselines \
            current and queryable.",
        features: &[
            "Asset inventory and management platforms",
            "Satellite imagery classification and change detection",
            "Spatial ETL and legacy data migration",
            "Web mapping and dashboard delivery",
        ],
    },
    Service {
        title: "Cadastral Services",
        summary: "Boundary surveys, parcel fabrics and 3D strata subdivision \
            with registry-grade documentation and full legal traceability.",
        features: &[
            "Boundary surveys and adjudication support",
            "District-scale parcel fabric adjustment",
            "3D / strata subdivision plans",
            "Registry lodgement and liaison",
        ],
    },
];

static STRENGTHS: &[Strength] = &[
    Strength {
        title: "Needs assessment first",
        description: "Over a decade of consulting across spatial data and \
            remote sensing means every engagement starts with a grounded \
            assessment of what the client actually needs, not a product \
            pitch.",
    },
    Strength {
        title: "Methods fit the project",
        description: "International standards are the baseline, but no two \
            clients get the same prescription: workflows are adapted to \
            local conditions, data maturity and the team that will live \
            with the result.",
    },
    Strength {
        title: "Tailored deliverables",
        description: "Software and data products are built to the \
            commissioning brief, tuned for the best achievable quality \
            within the project's schedule and budget rather than a fixed \
            off-the-shelf shape.",
    },
    Strength {
        title: "Cost efficiency",
        description: "Direct equipment sourcing and mature in-house \
            workflows keep pricing competitive and turnaround short, so \
            the same scope costs less than it would assembled from \
            intermediaries.",
    },
];

static STATS: &[Stat] = &[
    Stat {
        value: "150+",
        label: "Projects delivered",
    },
    Stat {
        value: "8.2M",
        label: "Points surveyed",
    },
    Stat {
        value: "45",
        label: "Field & office specialists",
    },
    Stat {
        value: "12",
        label: "Years in operation",
    },
];

static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Portfolio",
        href: "#portfolio",
    },
    NavLink {
        label: "Contact",
        href: "#footer",
    },
];
