//! Pricing tier card for the landing page.

use leptos::prelude::*;

use crate::consts::PricingTier;

/// Currency the pricing table is displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Usd,
    Etb,
}

impl Currency {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Usd => Self::Etb,
            Self::Etb => Self::Usd,
        }
    }
}

/// One pricing tier. Tiers without a listed price render "Contact us".
#[component]
pub fn PricingCard(tier: PricingTier, currency: Signal<Currency>) -> impl IntoView {
    let price = move || {
        let amount = match currency.get() {
            Currency::Usd => tier.usd.map(|usd| format!("${usd}")),
            Currency::Etb => tier.etb.map(|etb| format!("{etb} ETB")),
        };
        match amount {
            Some(amount) => format!("{amount}/mo"),
            None => "Contact us".to_owned(),
        }
    };

    view! {
        <div class="pricing-card">
            <span class="pricing-card__name">{tier.name}</span>
            <span class="pricing-card__price">{price}</span>
            <p class="pricing-card__description">{tier.description}</p>
            <ul class="pricing-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
