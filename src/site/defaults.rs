//! Built-in default configuration
//!
//! These values fill every field the backend leaves out. They can be replaced
//! wholesale with a defaults file, see [`load_defaults`].

use crate::resolve::palette_for;
use crate::site::types::*;
use crate::SitegenError;
use serde_json::{Map, Number};
use std::path::Path;

fn text(value: &str) -> String {
    value.to_string()
}

fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn hours(day: &str, open: &str, close: &str) -> BusinessHours {
    BusinessHours {
        day: text(day),
        open: text(open),
        close: text(close),
        is_closed: None,
    }
}

fn feature(id: &str, title: &str, description: &str, image: &str) -> Feature {
    Feature {
        id: text(id),
        title: text(title),
        description: text(description),
        image: text(image),
    }
}

fn testimonial(
    id: &str,
    author: &str,
    role: &str,
    content: &str,
    image: &str,
    rating: u8,
) -> Testimonial {
    Testimonial {
        id: text(id),
        author: text(author),
        role: Some(text(role)),
        content: text(content),
        image: Some(text(image)),
        rating: Number::from(rating),
    }
}

fn image(url: &str, caption: &str, alt: &str) -> GalleryImage {
    GalleryImage {
        url: text(url),
        caption: Some(text(caption)),
        alt: Some(text(alt)),
    }
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: text(label),
        value: text(value),
    }
}

/// Returns the built-in "Oasis" configuration
pub fn default_config() -> SiteConfig {
    SiteConfig {
        name: text("Oasis"),
        description: text("Experience culinary excellence in a modern atmosphere"),
        address: Address {
            street: text("123 Gourmet Street"),
            city: text("Foodville"),
            state: text("CA"),
            zip: text("90210"),
            country: text("USA"),
        },
        contact: Contact {
            title: text("Let's Connect"),
            subtitle: text(
                "Reach out to us for inquiries, collaborations, or just to say hello!",
            ),
            form: ContactForm {
                name_placeholder: text("Your Name"),
                email_placeholder: text("Your Email"),
                phone_placeholder: text("Phone Number"),
                message_placeholder: text("Your Message"),
                submit_button_text: text("Send Message"),
            },
            contact_details: ContactDetails {
                address: text("123 Gourmet Street, Foodville, CA 90210"),
                email: text("info@oasis-dining.com"),
                phone: text("+1 555 010 2040"),
                whatsapp: text("+1 555 010 2040"),
            },
            map_url: Some(String::new()),
        },
        social: SocialLinks {
            facebook: Some(text("https://facebook.com/finedining")),
            instagram: Some(text("https://instagram.com/finedining")),
            twitter: Some(text("https://twitter.com/finedining")),
            yelp: Some(text("https://yelp.com/finedining")),
            youtube: None,
        },
        hours: vec![
            hours("Monday", "17:00", "23:00"),
            hours("Tuesday", "17:00", "23:00"),
            hours("Wednesday", "17:00", "23:00"),
            hours("Thursday", "17:00", "23:00"),
            hours("Friday", "17:00", "00:00"),
            hours("Saturday", "17:00", "00:00"),
            hours("Sunday", "17:00", "22:00"),
        ],
        reservation: Reservation {
            enabled: true,
            provider: text("opentable"),
            url: text("https://www.opentable.com/restaurant"),
            title: text("Make a Reservation"),
            subtitle: text("Book your table for an unforgettable dining experience"),
            submit_button_text: text("Confirm Reservation"),
            occasions: texts(&[
                "Birthday",
                "Anniversary",
                "Business Dinner",
                "Date Night",
                "Family Gathering",
                "Special Occasion",
                "Other",
            ]),
            policies: texts(&[
                "Reservations are held for 15 minutes past the scheduled time",
                "For parties of 6 or more, please call us directly",
                "A credit card is required for parties of 8 or more",
                "Special requests are subject to availability",
                "24-hour cancellation notice is required",
                "Children's high chairs and booster seats are available upon request",
            ]),
        },
        theme: ThemeConfig {
            theme_name: text("rustic"),
            theme_type: ThemeType::Dark,
            theme: palette_for("rustic", ThemeType::Dark),
        },
        homepage: Homepage {
            hero: Hero {
                heading: text("Experience Culinary Excellence"),
                subheading: text("Where every flavor tells a story"),
                background_image: text("/hero.jpg"),
                cta: CtaButtons {
                    primary: CtaLink {
                        text: text("Reserve a Table"),
                        link: text("/reservations"),
                    },
                    secondary: CtaLink {
                        text: text("View Menu"),
                        link: text("/menu"),
                    },
                },
            },
            about: AboutSection {
                title: text("Our Story"),
                description: text(
                    "Founded in 2010, we've been serving exceptional cuisine that combines \
                     traditional recipes with modern innovation. Our passionate team of chefs \
                     creates unforgettable dining experiences using only the finest \
                     locally-sourced ingredients.",
                ),
                image: text("/about.jpg"),
                stats: vec![
                    stat("Years of Experience", "15+"),
                    stat("Signature Dishes", "30+"),
                    stat("Happy Customers", "50k+"),
                    stat("Awards Won", "12"),
                ],
            },
            features: FeaturesSection {
                title: text("Why Choose Us"),
                subtitle: text("Discover what makes us special"),
                items: vec![
                    feature(
                        "1",
                        "Farm to Table",
                        "We source our ingredients directly from local farms and suppliers.",
                        "/farm.jpg",
                    ),
                    feature(
                        "2",
                        "Expert Chefs",
                        "Our culinary team brings years of experience from around the world.",
                        "/chef.jpg",
                    ),
                    feature(
                        "3",
                        "Perfect Ambiance",
                        "Elegant dining space designed for comfort and style.",
                        "/ambiance.jpg",
                    ),
                ],
            },
            testimonials: TestimonialsSection {
                title: text("What Our Guests Say"),
                subtitle: text("Real experiences from our valued customers"),
                items: vec![
                    testimonial(
                        "1",
                        "Emily Johnson",
                        "Food Critic",
                        "An unforgettable dining experience. The attention to detail in every \
                         dish is remarkable.",
                        "/test1.jpg",
                        5,
                    ),
                    testimonial(
                        "2",
                        "Michael Smith",
                        "Restaurant Reviewer",
                        "The atmosphere was perfect, and the flavors were absolutely \
                         delightful. Highly recommended!",
                        "/test3.jpg",
                        4,
                    ),
                    testimonial(
                        "3",
                        "Sophie Lee",
                        "Travel Blogger",
                        "A must-visit spot for anyone who loves fine dining. The service was \
                         exceptional.",
                        "/test2.jpg",
                        5,
                    ),
                    testimonial(
                        "4",
                        "James Brown",
                        "Food Enthusiast",
                        "Every bite was pure perfection. I will definitely return for more. \
                         The flavors were outstanding!",
                        "/test4.jpg",
                        4,
                    ),
                    testimonial(
                        "5",
                        "Olivia White",
                        "Chef",
                        "As a chef myself, I can truly appreciate the technique and creativity \
                         that went into these dishes.",
                        "/test6.jpg",
                        5,
                    ),
                    testimonial(
                        "6",
                        "Daniel Green",
                        "Food Photographer",
                        "The presentation of the dishes is truly a work of art. I couldn't \
                         stop taking pictures!",
                        "/test5.jpg",
                        4,
                    ),
                ],
            },
            gallery: GallerySection {
                categories: vec![
                    GalleryCategory {
                        name: text("Main Course"),
                        images: vec![
                            image(
                                "/pasta.jpg",
                                "Signature Pasta Dish",
                                "Freshly made pasta with seasonal ingredients",
                            ),
                            image(
                                "/salmon.jpg",
                                "Grilled Salmon",
                                "Perfectly grilled salmon with vegetables",
                            ),
                            image(
                                "/pizza.jpg",
                                "Vegetarian Pizza",
                                "Stone-baked vegetarian pizza",
                            ),
                            image(
                                "/beef.jpg",
                                "Beef Wellington",
                                "Classic Beef Wellington with mushroom duxelles",
                            ),
                        ],
                    },
                    GalleryCategory {
                        name: text("Appetizers"),
                        images: vec![
                            image(
                                "/salad.jpg",
                                "Classic Caesar Salad",
                                "Fresh Caesar salad with homemade dressing",
                            ),
                            image(
                                "/bruschetta.jpg",
                                "Tomato Bruschetta",
                                "Traditional Italian bruschetta",
                            ),
                        ],
                    },
                    GalleryCategory {
                        name: text("Desserts"),
                        images: vec![
                            image(
                                "/choco.jpg",
                                "Chocolate Lava Cake",
                                "Warm chocolate lava cake with vanilla ice cream",
                            ),
                            image("/mango.jpg", "Mango Sorbet", "Refreshing mango sorbet"),
                            image(
                                "/fruit.jpg",
                                "Fruit Tart",
                                "Seasonal fruit tart with custard",
                            ),
                        ],
                    },
                ],
            },
            cta: CallToAction {
                title: text("Ready to Experience Our Cuisine?"),
                subtitle: text(
                    "Book your table now and enjoy an unforgettable dining experience",
                ),
                button_text: text("Make a Reservation"),
                button_link: text("/reservations"),
                background_image: text("/ambiance.jpg"),
            },
        },
        extra: Map::new(),
    }
}

/// Loads a defaults file, picking the format from the extension
///
/// `.toml` files are read as TOML, anything else as JSON. Sections missing
/// from the file come back empty and are rejected later by validation.
///
/// # Arguments
///
/// * `path` - Path to the defaults file
///
/// # Returns
///
/// * `Ok(SiteConfig)` - The parsed defaults
/// * `Err(SitegenError)` - Failed to read or parse the file
pub fn load_defaults(path: &Path) -> Result<SiteConfig, SitegenError> {
    let content = std::fs::read_to_string(path)?;

    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };

    tracing::debug!("Loaded defaults from {}", path.display());
    Ok(config)
}
