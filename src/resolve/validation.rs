//! Checks run on the merged configuration before it is published

use crate::site::{BusinessHours, SiteConfig, Testimonial, ThemeConfig};
use crate::{ResolveError, ResolveResult};
use serde_json::Number;

/// Validates the entire merged configuration
pub fn validate(config: &SiteConfig) -> ResolveResult<()> {
    validate_required_sections(config)?;
    validate_hours(&config.hours)?;
    validate_testimonials(&config.homepage.testimonials.items)?;
    validate_theme(&config.theme)?;
    Ok(())
}

/// Checks that every required top-level section is present and non-empty
fn validate_required_sections(config: &SiteConfig) -> ResolveResult<()> {
    let sections: [(&'static str, bool); 8] = [
        ("name", config.name.is_empty()),
        ("description", config.description.is_empty()),
        ("address", config.address == Default::default()),
        ("contact", config.contact == Default::default()),
        ("hours", config.hours.is_empty()),
        ("reservation", config.reservation == Default::default()),
        ("homepage", config.homepage == Default::default()),
        ("theme", config.theme == ThemeConfig::default()),
    ];

    match sections.iter().find(|(_, empty)| *empty) {
        Some((section, _)) => Err(ResolveError::MissingSection(*section)),
        None => Ok(()),
    }
}

/// Validates business hours entries
fn validate_hours(hours: &[BusinessHours]) -> ResolveResult<()> {
    for (index, entry) in hours.iter().enumerate() {
        let missing = if entry.day.is_empty() {
            Some("day")
        } else if entry.open.is_empty() {
            Some("open")
        } else if entry.close.is_empty() {
            Some("close")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(ResolveError::InvalidHours { index, field });
        }
    }

    Ok(())
}

/// Validates testimonial entries
fn validate_testimonials(items: &[Testimonial]) -> ResolveResult<()> {
    for (index, item) in items.iter().enumerate() {
        let missing = if item.id.is_empty() {
            Some("id")
        } else if item.author.is_empty() {
            Some("author")
        } else if item.content.is_empty() {
            Some("content")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(ResolveError::InvalidTestimonial { index, field });
        }

        match whole_rating(&item.rating) {
            Some(1..=5) => {}
            _ => {
                return Err(ResolveError::InvalidRating {
                    author: item.author.clone(),
                    rating: item.rating.to_string(),
                })
            }
        }
    }

    Ok(())
}

/// Reads a rating as a whole number
///
/// `5` and `5.0` both count; `4.5` and `-1` do not.
fn whole_rating(rating: &Number) -> Option<u64> {
    if let Some(value) = rating.as_u64() {
        return Some(value);
    }

    rating
        .as_f64()
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
}

/// Validates the theme selection
fn validate_theme(theme: &ThemeConfig) -> ResolveResult<()> {
    if theme.theme_name.trim().is_empty() {
        return Err(ResolveError::InvalidTheme(
            "themeName cannot be empty".to_string(),
        ));
    }

    Ok(())
}
