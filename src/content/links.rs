//! Navigation, footer and contact registries.

use super::{NavLink, Section};

/// Entry of the header's "Ecosystem" dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcosystemMenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
}

pub static NAV_ITEMS: [NavLink; 6] = [
    NavLink::new("About", "#about"),
    NavLink::new("Solutions", "#solutions"),
    NavLink::new("Case Studies", "#case-studies"),
    NavLink::new("Investors", "#investors"),
    NavLink::new("Developers", "#developers"),
    NavLink::new("Contact", "#contact"),
];

pub static ECOSYSTEM_MENU: [EcosystemMenuItem; 6] = [
    EcosystemMenuItem {
        title: "DigiNexOneStudio",
        description: "The Creator's Platform - Build smart, launch fast with AI-powered low-code.",
        icon: "🚀",
    },
    EcosystemMenuItem {
        title: "DigiNexShield",
        description: "The Security Fortress - Zero-breach cybersecurity with predictive AI.",
        icon: "🛡",
    },
    EcosystemMenuItem {
        title: "DigiNexAssist",
        description: "The Compliance Engine - Immigration simplified with 98% approval rate.",
        icon: "📋",
    },
    EcosystemMenuItem {
        title: "DigiNexFlow",
        description: "The Automation Backbone - 10M+ workflows automated with 99.95% success.",
        icon: "⚡",
    },
    EcosystemMenuItem {
        title: "DigiNexEthera",
        description: "The Intelligence Network - 1,000+ AI agents working collaboratively.",
        icon: "🧠",
    },
    EcosystemMenuItem {
        title: "DigiNexSynapse",
        description: "The Intelligent Environment - Spaces that think and adapt.",
        icon: "🌐",
    },
];

static ECOSYSTEM_LINKS: [NavLink; 6] = [
    NavLink::new("DigiNexOneStudio", "#"),
    NavLink::new("DigiNexShield", "#"),
    NavLink::new("DigiNexAssist", "#"),
    NavLink::new("DigiNexFlow", "#"),
    NavLink::new("DigiNexEthera", "#"),
    NavLink::new("DigiNexSynapse", "#"),
];

static COMPANY_LINKS: [NavLink; 5] = [
    NavLink::new("About Us", "#about"),
    NavLink::new("Case Studies", "#case-studies"),
    NavLink::new("Investors", "#investors"),
    NavLink::new("Careers", "#careers"),
    NavLink::new("Press", "#press"),
];

static RESOURCE_LINKS: [NavLink; 5] = [
    NavLink::new("Documentation", "#docs"),
    NavLink::new("Developer Hub", "#developers"),
    NavLink::new("API Reference", "#api"),
    NavLink::new("Blog", "#blog"),
    NavLink::new("Community", "#community"),
];

static LEGAL_LINKS: [NavLink; 4] = [
    NavLink::new("Privacy Policy", "#privacy"),
    NavLink::new("Terms of Service", "#terms"),
    NavLink::new("Security", "#security"),
    NavLink::new("Compliance", "#compliance"),
];

pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn { title: "Ecosystem", links: &ECOSYSTEM_LINKS },
    FooterColumn { title: "Company", links: &COMPANY_LINKS },
    FooterColumn { title: "Resources", links: &RESOURCE_LINKS },
    FooterColumn { title: "Legal", links: &LEGAL_LINKS },
];

pub static SOCIAL_LINKS: [NavLink; 3] = [
    NavLink::new("LinkedIn", "#"),
    NavLink::new("GitHub", "#"),
    NavLink::new("YouTube", "#"),
];

pub static CONTACT: ContactInfo = ContactInfo {
    email: "info@diginexai.dev",
    phone: "+971 58 583 8525",
    phone_href: "tel:+971585838525",
    location: "UAE, India & digital presence in 50+ countries",
};

/// Every anchor the page links to, with where it lands.
pub fn all_links() -> impl Iterator<Item = &'static NavLink> {
    NAV_ITEMS
        .iter()
        .chain(FOOTER_COLUMNS.iter().flat_map(|c| c.links.iter()))
        .chain(SOCIAL_LINKS.iter())
}

/// Anchors that scroll somewhere on this page.
pub fn resolvable_links() -> impl Iterator<Item = (&'static NavLink, Section)> {
    all_links().filter_map(|l| Section::from_anchor(l.href).map(|s| (l, s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_are_anchors() {
        assert_eq!(NAV_ITEMS.len(), 6);
        for item in NAV_ITEMS.iter() {
            assert!(item.is_anchor(), "{} is not an in-page anchor", item.href);
        }
    }

    #[test]
    fn test_footer_column_sizes() {
        let sizes: Vec<usize> = FOOTER_COLUMNS.iter().map(|c| c.links.len()).collect();
        assert_eq!(sizes, vec![6, 5, 5, 4]);
    }

    #[test]
    fn test_contact_link_resolves() {
        let resolved: Vec<_> = resolvable_links()
            .filter(|(l, _)| l.name == "Contact")
            .collect();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].1, Section::Footer);
    }
}
