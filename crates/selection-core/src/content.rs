//! # Informational Content
//!
//! Typed, hard-coded display content for the storefront's sections.
//!
//! ## Why Typed Content?
//! The copy is fixed at build time (there is no CMS), but the frontend still
//! needs it structured: nav items pair a section with a label and glyph,
//! delivery cards carry a free-delivery threshold, reviews carry a rating.
//! Typing the content keeps those pairings honest and lets the glyph keys go
//! through the [`Icon`] registry instead of loose strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::icons::Icon;
use crate::money::Money;
use crate::navigation::Section;
use crate::validation::validate_rating;

// =============================================================================
// Content Types
// =============================================================================

/// One header/mobile-menu navigation item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Section this item activates.
    pub section: Section,
    /// Display label.
    pub label: String,
    /// Glyph shown next to the label in the mobile menu.
    pub icon: Icon,
}

/// The home section's hero block and featured gallery.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    /// Label of the call-to-action button (it activates the catalog section).
    pub cta_label: String,
    /// Featured gallery image URLs, display order.
    pub gallery: Vec<String>,
}

/// The about-the-brand section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// One delivery option card.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    /// Order total from which delivery is free.
    pub free_from: Money,
}

/// One customer review.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    pub text: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

/// One contact row (address, phone, email).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

/// One opening-hours row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

/// The contacts section: channels plus showroom opening hours.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    pub channels: Vec<ContactChannel>,
    pub hours: Vec<OpeningHours>,
}

/// One footer social link.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
}

/// All informational content, built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: Hero,
    pub about: About,
    pub delivery: Vec<DeliveryOption>,
    pub reviews: Vec<Review>,
    pub contacts: Contacts,
    pub social: Vec<SocialLink>,
}

// =============================================================================
// The Content
// =============================================================================

/// The header navigation, display order.
pub fn navigation() -> Vec<NavItem> {
    vec![
        NavItem {
            section: Section::Home,
            label: "Главная".to_string(),
            icon: Icon::Home,
        },
        NavItem {
            section: Section::Catalog,
            label: "Каталог".to_string(),
            icon: Icon::Sparkles,
        },
        NavItem {
            section: Section::About,
            label: "О бренде".to_string(),
            icon: Icon::Award,
        },
        NavItem {
            section: Section::Delivery,
            label: "Доставка".to_string(),
            icon: Icon::Truck,
        },
        NavItem {
            section: Section::Reviews,
            label: "Отзывы".to_string(),
            icon: Icon::Star,
        },
        NavItem {
            section: Section::Contacts,
            label: "Контакты".to_string(),
            icon: Icon::Mail,
        },
    ]
}

impl SiteContent {
    /// Builds the compiled-in content, validating review ratings.
    pub fn build() -> CoreResult<Self> {
        let content = SiteContent {
            hero: Hero {
                title: "Essence of Luxury".to_string(),
                tagline: "Откройте мир изысканных ароматов".to_string(),
                cta_label: "Исследовать коллекцию".to_string(),
                gallery: vec![
                    "https://cdn.poehali.dev/files/a2598469-b359-4175-a5cc-959fafd64beb.jpg"
                        .to_string(),
                    "https://cdn.poehali.dev/files/7ef907ba-185d-470f-a8af-bedef28643f3.jpg"
                        .to_string(),
                    "https://cdn.poehali.dev/files/dc96b04e-23a8-4d47-84af-3d40e34405b6.jpeg"
                        .to_string(),
                ],
            },
            about: About {
                heading: "О бренде".to_string(),
                paragraphs: vec![
                    "SELECTION — это воплощение роскоши и элегантности в мире парфюмерии. \
                     Мы создаем ароматы для тех, кто ценит изысканность и индивидуальность."
                        .to_string(),
                    "Каждый наш парфюм — результат кропотливой работы лучших парфюмеров Европы. \
                     Мы используем только натуральные ингредиенты высочайшего качества."
                        .to_string(),
                    "Наша философия — дать возможность каждому найти свой уникальный аромат. \
                     Именно поэтому мы предлагаем пробники всех ароматов перед покупкой."
                        .to_string(),
                ],
            },
            delivery: vec![
                DeliveryOption {
                    icon: Icon::Truck,
                    title: "По России".to_string(),
                    description: "Доставка курьерской службой СДЭК в любой город России. \
                                  Срок доставки 2-7 дней."
                        .to_string(),
                    free_from: Money::from_rubles(5000),
                },
                DeliveryOption {
                    icon: Icon::MapPin,
                    title: "Москва".to_string(),
                    description: "Курьерская доставка по Москве в течение дня. \
                                  Возможен самовывоз из шоурума."
                        .to_string(),
                    free_from: Money::from_rubles(3000),
                },
            ],
            reviews: vec![
                Review {
                    author: "Анна К.".to_string(),
                    text: "Midnight Essence — мой абсолютный фаворит! Очень рада, что смогла \
                           сначала заказать пробник."
                        .to_string(),
                    rating: 5,
                },
                Review {
                    author: "Дмитрий М.".to_string(),
                    text: "Потрясающее качество и обслуживание. Golden Noir держится весь день!"
                        .to_string(),
                    rating: 5,
                },
                Review {
                    author: "Елена С.".to_string(),
                    text: "Идея с пробниками — просто находка. Теперь не боюсь покупать парфюм \
                           онлайн."
                        .to_string(),
                    rating: 5,
                },
            ],
            contacts: Contacts {
                channels: vec![
                    ContactChannel {
                        icon: Icon::MapPin,
                        label: "Шоурум в Москве".to_string(),
                        value: "ул. Тверская, 12с1".to_string(),
                    },
                    ContactChannel {
                        icon: Icon::Phone,
                        label: "Телефон".to_string(),
                        value: "+7 (495) 123-45-67".to_string(),
                    },
                    ContactChannel {
                        icon: Icon::Mail,
                        label: "Email".to_string(),
                        value: "info@selection-perfume.ru".to_string(),
                    },
                ],
                hours: vec![
                    OpeningHours {
                        days: "Пн-Пт".to_string(),
                        hours: "10:00 - 21:00".to_string(),
                    },
                    OpeningHours {
                        days: "Сб-Вс".to_string(),
                        hours: "11:00 - 20:00".to_string(),
                    },
                ],
            },
            social: vec![
                SocialLink {
                    icon: Icon::Instagram,
                    label: "Instagram".to_string(),
                },
                SocialLink {
                    icon: Icon::Send,
                    label: "Telegram".to_string(),
                },
            ],
        };

        for review in &content.reviews {
            validate_rating(review.rating)?;
        }

        Ok(content)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_covers_every_section_once() {
        let nav = navigation();
        assert_eq!(nav.len(), Section::ALL.len());
        for (item, section) in nav.iter().zip(Section::ALL) {
            assert_eq!(item.section, section);
        }
    }

    #[test]
    fn test_content_builds() {
        let content = SiteContent::build().unwrap();
        assert_eq!(content.hero.title, "Essence of Luxury");
        assert_eq!(content.hero.gallery.len(), 3);
        assert_eq!(content.about.paragraphs.len(), 3);
        assert_eq!(content.delivery.len(), 2);
        assert_eq!(content.reviews.len(), 3);
        assert_eq!(content.contacts.channels.len(), 3);
        assert_eq!(content.social.len(), 2);
    }

    #[test]
    fn test_review_ratings_are_valid() {
        let content = SiteContent::build().unwrap();
        for review in &content.reviews {
            assert!((1..=5).contains(&review.rating));
        }
    }

    #[test]
    fn test_delivery_thresholds() {
        let content = SiteContent::build().unwrap();
        assert_eq!(content.delivery[0].free_from.rubles(), 5000);
        assert_eq!(content.delivery[1].free_from.rubles(), 3000);
    }

    #[test]
    fn test_nav_item_wire_format() {
        let json = serde_json::to_value(&navigation()[1]).unwrap();
        assert_eq!(json["section"], "catalog");
        assert_eq!(json["label"], "Каталог");
        assert_eq!(json["icon"], "Sparkles");
    }
}
