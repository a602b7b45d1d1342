//! # Content Commands
//!
//! Tauri commands for the informational sections. All of them are plain
//! reads of content fixed at startup; none can fail.

use tauri::State;
use tracing::debug;

use crate::state::ContentState;
use selection_core::content::{About, Contacts, DeliveryOption, Hero, Review, SocialLink};

/// Gets the home section's hero block and featured gallery.
#[tauri::command]
pub fn get_hero(content: State<'_, ContentState>) -> Hero {
    debug!("get_hero command");
    content.inner().hero.clone()
}

/// Gets the about-the-brand copy.
#[tauri::command]
pub fn get_about(content: State<'_, ContentState>) -> About {
    debug!("get_about command");
    content.inner().about.clone()
}

/// Gets the delivery option cards.
#[tauri::command]
pub fn get_delivery_options(content: State<'_, ContentState>) -> Vec<DeliveryOption> {
    debug!("get_delivery_options command");
    content.inner().delivery.clone()
}

/// Gets the customer reviews.
#[tauri::command]
pub fn get_reviews(content: State<'_, ContentState>) -> Vec<Review> {
    debug!("get_reviews command");
    content.inner().reviews.clone()
}

/// Gets the contacts section (channels + opening hours).
#[tauri::command]
pub fn get_contacts(content: State<'_, ContentState>) -> Contacts {
    debug!("get_contacts command");
    content.inner().contacts.clone()
}

/// Gets the footer social links.
#[tauri::command]
pub fn get_social_links(content: State<'_, ContentState>) -> Vec<SocialLink> {
    debug!("get_social_links command");
    content.inner().social.clone()
}
