//! The six DigiNex platforms.
//!
//! One registry feeds the ecosystem grid, the orbit and the details modal,
//! so a platform's copy only lives here.

use super::LogoRef;
use crate::theme::Gradient;

/// A sub-product of the ecosystem.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformEntry {
    /// Short name without the brand prefix ("Shield")
    pub name: &'static str,
    /// Display name ("DigiNexShield")
    pub full_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Headline number shown in the stats badge
    pub stats: &'static str,
    pub gradient: Gradient,
    pub logo: LogoRef,
    /// Position on the orbit, degrees clockwise from +X
    pub angle_degrees: f32,
    /// Key features, in display order
    pub features: &'static [&'static str],
    /// In-page anchor of the platform card
    pub href: &'static str,
}

impl PlatformEntry {
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }
}

pub const PLATFORM_COUNT: usize = 6;

pub static PLATFORMS: [PlatformEntry; PLATFORM_COUNT] = [
    PlatformEntry {
        name: "OneStudio",
        full_name: "DigiNexOneStudio",
        tagline: "The Creator's Platform",
        description: "Build and launch AI-powered applications 10x faster with our low-code platform. 1M+ apps built.",
        stats: "1M+ Apps Built",
        gradient: Gradient::new("#7c3aed", "#a78bfa"),
        logo: LogoRef::new("logo-onestudio.jpeg", "OS"),
        angle_degrees: 0.0,
        features: &[
            "Visual low-code application builder",
            "AI-assisted component generation",
            "One-click deployment to any cloud",
            "Marketplace of reusable templates",
        ],
        href: "#onestudio",
    },
    PlatformEntry {
        name: "Shield",
        full_name: "DigiNexShield",
        tagline: "The Security Fortress",
        description: "Zero-breach track record with 99.97% threat prevention. Trusted by Fortune 500.",
        stats: "99.97% Prevention",
        gradient: Gradient::new("#059669", "#34d399"),
        logo: LogoRef::new("logo-shield.jpeg", "SH"),
        angle_degrees: 60.0,
        features: &[
            "Predictive AI threat detection",
            "Zero-trust network architecture",
            "Real-time incident response",
            "Compliance-ready audit trails",
        ],
        href: "#shield",
    },
    PlatformEntry {
        name: "Assist",
        full_name: "DigiNexAssist",
        tagline: "The Compliance Engine",
        description: "500K+ immigration cases processed with 98% approval rate improvement.",
        stats: "500K+ Cases",
        gradient: Gradient::new("#2563eb", "#60a5fa"),
        logo: LogoRef::new("logo-assist.jpeg", "AS"),
        angle_degrees: 120.0,
        features: &[
            "Automated document verification",
            "Case tracking across jurisdictions",
            "Regulatory change monitoring",
            "Guided applicant workflows",
        ],
        href: "#assist",
    },
    PlatformEntry {
        name: "Flow",
        full_name: "DigiNexFlow",
        tagline: "The Automation Backbone",
        description: "10M+ workflows automated with 99.95% success rate across enterprises.",
        stats: "10M+ Workflows",
        gradient: Gradient::new("#ea580c", "#fb923c"),
        logo: LogoRef::new("logo-flow.jpeg", "FL"),
        angle_degrees: 180.0,
        features: &[
            "Drag-and-drop process designer",
            "500+ enterprise connectors",
            "Self-healing workflow execution",
            "End-to-end run analytics",
        ],
        href: "#flow",
    },
    PlatformEntry {
        name: "Ethera",
        full_name: "DigiNexEthera",
        tagline: "The Intelligence Network",
        description: "1,000+ AI agents collaborating with 94% accuracy on complex decisions.",
        stats: "1,000+ Agents",
        gradient: Gradient::new("#db2777", "#f472b6"),
        logo: LogoRef::new("logo-ethera.jpeg", "ET"),
        angle_degrees: 240.0,
        features: &[
            "Multi-agent task orchestration",
            "Shared memory across agents",
            "Human-in-the-loop review",
            "Explainable decision logs",
        ],
        href: "#ethera",
    },
    PlatformEntry {
        name: "Synapse",
        full_name: "DigiNexSynapse",
        tagline: "The Intelligent Environment",
        description: "50,000+ smart spaces with 34% average energy savings.",
        stats: "50K+ Spaces",
        gradient: Gradient::new("#0891b2", "#22d3ee"),
        logo: LogoRef::new("logo-synapse.jpeg", "SY"),
        angle_degrees: 300.0,
        features: &[
            "Occupancy-aware climate control",
            "Predictive energy optimisation",
            "Unified IoT device fabric",
            "Space utilisation insights",
        ],
        href: "#synapse",
    },
];

/// Look a platform up by its display name.
pub fn find_platform(full_name: &str) -> Option<&'static PlatformEntry> {
    PLATFORMS.iter().find(|p| p.full_name == full_name)
}
