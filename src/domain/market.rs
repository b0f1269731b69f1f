// src/domain/market.rs

pub const SITE_NAME: &str = "PropThinks";
pub const TAGLINE: &str = "Find. Move. Live.";
pub const DESCRIPTION: &str =
    "Find verified properties for rent in Andhra Pradesh. Professional property management by PropThinks.";
pub const STATE: &str = "Andhra Pradesh";

pub const CONTACT_EMAIL: &str = "support@propthinks.com";
pub const CONTACT_PHONE: &str = "+91 86390 12345";
pub const CONTACT_WHATSAPP: &str = "+918639012345";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
    pub localities: &'static [&'static str],
}

pub const MARKETS: &[Market] = &[
    Market {
        name: "Nellore",
        slug: "nellore",
        image: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?w=600&q=80",
        localities: &[
            "Trunk Road",
            "Magunta Layout",
            "Vedayapalem",
            "Balaji Nagar",
            "Muthukur Road",
            "Dargamitta",
            "Stonehouse Pet",
            "Santhapet",
            "Podalakur Road",
        ],
    },
    Market {
        name: "Guntur",
        slug: "guntur",
        image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=600&q=80",
        localities: &[
            "Brodipet",
            "Arundelpet",
            "Lakshmipuram",
            "Pattabhipuram",
            "Syamala Nagar",
            "Gorantla",
            "Nallapadu",
            "Stambalagaruvu",
            "AT Agraharam",
        ],
    },
    Market {
        name: "Vijayawada",
        slug: "vijayawada",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=600&q=80",
        localities: &[
            "Labbipet",
            "Moghalrajpuram",
            "Benz Circle",
            "Governorpet",
            "Patamata",
            "Gunadala",
            "Gandhinagar",
            "Auto Nagar",
            "Poranki",
        ],
    },
    Market {
        name: "Tirupati",
        slug: "tirupati",
        image: "https://images.unsplash.com/photo-1460317442991-0ec209397118?w=600&q=80",
        localities: &[
            "Alipiri Road",
            "Tirumala Bypass",
            "AIR Bypass",
            "Renigunta Road",
            "Leela Mahal",
            "Korlagunta",
            "Bairagipatteda",
            "RC Road",
            "Balaji Colony",
        ],
    },
];

pub fn find_market(slug: &str) -> Option<&'static Market> {
    MARKETS.iter().find(|m| m.slug.eq_ignore_ascii_case(slug))
}

/// Display name for a city value coming from the backend or a query string.
pub fn city_name(raw: &str) -> String {
    find_market(raw)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| crate::domain::listing::title_case(raw))
}
