//! Shared client constants: backend location, storage keys, static page data.

/// Remote backend root for all gateway calls.
pub const API_BASE: &str = "https://the-architect.onrender.com/api/v1";

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// localStorage key holding the signed-in user id.
pub const USER_ID_KEY: &str = "userId";

/// Fallback image shown in the preview pane before anything is generated.
pub const PLACEHOLDER_IMAGE: &str = "/house.jpg";

/// A pricing tier on the landing page.
#[derive(Clone, Copy, Debug)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    /// Monthly price in USD; `None` for the contact-us tier.
    pub usd: Option<u32>,
    /// Monthly price in ETB.
    pub etb: Option<u32>,
    pub features: &'static [&'static str],
}

/// Landing-page pricing table, cheapest first.
pub const PRICING: [PricingTier; 4] = [
    PricingTier {
        name: "Starter",
        description: "Try the studio with a free design allowance.",
        usd: Some(0),
        etb: Some(0),
        features: &["5 designs per month", "Sketch to Design", "Community support"],
    },
    PricingTier {
        name: "Pro",
        description: "For practicing architects and serious hobbyists.",
        usd: Some(19),
        etb: Some(1050),
        features: &[
            "Unlimited designs",
            "All generation modes",
            "High-resolution exports",
            "Priority generation queue",
        ],
    },
    PricingTier {
        name: "Studio",
        description: "Shared workspace for small design teams.",
        usd: Some(49),
        etb: Some(2700),
        features: &[
            "Everything in Pro",
            "Five team seats",
            "Shared conversation history",
            "Email support",
        ],
    },
    PricingTier {
        name: "Enterprise",
        description: "Custom deployments and volume pricing.",
        usd: None,
        etb: None,
        features: &["Dedicated capacity", "Custom models", "Onboarding and training"],
    },
];
