//! Static copy for the Ameru landing page.
//!
//! Everything the page says lives here, away from the motion wiring, so
//! `page` reads as pure structure.

/// An icon tile. Hero highlights and service cards share this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A titled paragraph without an icon, as in the value-proposition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

/// A headline figure with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub figure: &'static str,
    pub caption: &'static str,
}

pub const BRAND: &str = "AMERU";
pub const TAGLINE: &str = "Premium Coal Trading & Mining Solutions";

pub const HERO_CARDS: [Card; 3] = [
    Card {
        icon: "🔥",
        title: "High Quality",
        body: "Premium coal with low impurities and high energy output",
    },
    Card {
        icon: "⚡",
        title: "Reliable Supply",
        body: "Consistent delivery and dependable quality assurance",
    },
    Card {
        icon: "🌍",
        title: "Sustainable",
        body: "Modern mining practices with environmental responsibility",
    },
];

pub const ABOUT_HEADING: &str = "Why Choose Ameru Coal";

pub const VALUE_POINTS: [Blurb; 3] = [
    Blurb {
        title: "Superior Quality",
        body: "Our coal undergoes rigorous quality control to ensure maximum energy \
               output and minimal impurities, providing you with the most efficient \
               fuel source available.",
    },
    Blurb {
        title: "Competitive Pricing",
        body: "Direct sourcing and efficient operations allow us to offer premium \
               quality coal at market-competitive prices, maximizing your value.",
    },
    Blurb {
        title: "Bulk Solutions",
        body: "Whether you need small quantities or large-scale industrial supply, we \
               provide flexible solutions tailored to your specific requirements.",
    },
];

pub const MINING_PANEL_ICON: &str = "⛏️";
pub const MINING_PANEL_TITLE: &str = "Mining Excellence";
pub const MINING_PANEL_BODY: &str =
    "With decades of experience in the coal industry, Ameru has established itself \
     as a leader in quality and reliability.";

pub const MINING_STATS: [Stat; 2] = [
    Stat {
        figure: "50+",
        caption: "Years Experience",
    },
    Stat {
        figure: "1000+",
        caption: "Satisfied Clients",
    },
];

pub const SERVICES_HEADING: &str = "Our Services";

pub const SERVICE_CARDS: [Card; 3] = [
    Card {
        icon: "🏭",
        title: "Industrial Coal Supply",
        body: "Large-scale coal supply for power plants, steel mills, and industrial \
               facilities with consistent quality and reliable delivery schedules.",
    },
    Card {
        icon: "🚢",
        title: "Export Solutions",
        body: "International coal export services with global logistics support, \
               quality certification, and competitive pricing for overseas markets.",
    },
    Card {
        icon: "🔄",
        title: "Custom Blending",
        body: "Specialized coal blending services to meet specific energy \
               requirements, ash content, and combustion characteristics for various \
               applications.",
    },
];

pub const SERVICE_CTA: &str = "Learn More";

pub const FOOTER_HEADING: &str = "Ready to Power Your Business?";
pub const FOOTER_BODY: &str =
    "Contact us today to discuss your coal requirements and get a personalized quote.";

pub const CONTACT_EMAIL: &str = "contact@amerucoal.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "123 Mining Way, Coal City, CC 12345";

pub const QUOTE_FORM_TITLE: &str = "Get a Quote";
pub const QUOTE_FORM_FIELDS: [&str; 3] = ["Your Name", "Your Email", "Your Requirements"];
pub const QUOTE_FORM_SUBMIT: &str = "Request Quote";

pub const COPYRIGHT: &str = "© 2024 Ameru Coal. Powering Industries with Quality and Reliability.";
