//! Oasis-Sitegen main entry point
//!
//! This is the command-line interface for the restaurant site configuration
//! generator and its backend client.

use anyhow::Context;
use clap::{Parser, Subcommand};
use oasis_sitegen::api::{group_by_category, ApiClient, ContactFormData, ReservationForm};
use oasis_sitegen::generate::{generate, load_configured_defaults};
use oasis_sitegen::resolve::palette_names;
use oasis_sitegen::settings::{load_settings, validate, Settings};
use oasis_sitegen::{palette_for, ThemeType};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Oasis-Sitegen: restaurant site configuration generator
///
/// Fetches the store's site configuration from the backend, fills every gap
/// from the defaults, validates the result and writes the static
/// configuration the site is built from.
#[derive(Parser, Debug)]
#[command(name = "oasis-sitegen")]
#[command(version)]
#[command(about = "Restaurant site configuration generator", long_about = None)]
struct Cli {
    /// Path to a TOML settings file
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Store identifier (overrides settings and STORE_ID)
    #[arg(long, global = true)]
    store_id: Option<String>,

    /// Backend base URL (overrides settings and BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Environment label (overrides settings and SITE_ENV)
    #[arg(long = "env", global = true)]
    environment: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, resolve and write the site configuration
    Generate {
        /// Where to write the artifact
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Artifact format
        #[arg(long, value_enum)]
        format: Option<oasis_sitegen::artifact::ArtifactFormat>,

        /// Defaults file (JSON or TOML) replacing the built-in defaults
        #[arg(long, value_name = "FILE")]
        defaults: Option<PathBuf>,

        /// Resolve and validate without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the live menu
    Menu,

    /// Send the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        /// Inbox the message is delivered to
        #[arg(long)]
        to_email: String,
        /// Address the phone number is recorded for; defaults to the site's
        /// published contact email
        #[arg(long)]
        site_email: Option<String>,
    },

    /// Send a reservation request
    Reserve {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Requested date, e.g. 2026-11-02
        #[arg(long)]
        date: String,
        /// Requested time, e.g. 19:30
        #[arg(long)]
        time: String,
        #[arg(long)]
        guests: u32,
        #[arg(long)]
        occasion: Option<String>,
        #[arg(long)]
        special_requests: Option<String>,
        /// Inbox the request is delivered to
        #[arg(long)]
        to_email: String,
    },

    /// Print a color palette
    Palette {
        /// Palette family; unknown names fall back to "classic"
        name: Option<String>,

        /// Light or dark variant
        #[arg(long = "type", value_enum, default_value = "light")]
        theme_type: ThemeType,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let result = run(cli).await;
    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Palette { name, theme_type } = &cli.command {
        handle_palette(name.as_deref(), *theme_type);
        return Ok(());
    }

    let mut settings = load_settings(cli.settings.as_deref()).context("Failed to load settings")?;
    apply_overrides(&mut settings, &cli);

    match cli.command {
        Command::Generate {
            output,
            format,
            defaults,
            dry_run,
        } => {
            if let Some(output) = output {
                settings.output_path = output;
            }
            if let Some(format) = format {
                settings.format = format;
            }
            if defaults.is_some() {
                settings.defaults_path = defaults;
            }
            validate(&settings).context("Invalid settings")?;
            handle_generate(&settings, dry_run).await
        }
        Command::Menu => {
            validate(&settings).context("Invalid settings")?;
            handle_menu(&settings).await
        }
        Command::Contact {
            name,
            email,
            phone,
            message,
            to_email,
            site_email,
        } => {
            validate(&settings).context("Invalid settings")?;
            let site_email = match site_email {
                Some(email) => email,
                None => {
                    load_configured_defaults(&settings)
                        .context("Failed to load defaults")?
                        .contact
                        .contact_details
                        .email
                }
            };
            let form = ContactFormData {
                name,
                email,
                phone,
                message,
            };
            handle_contact(&settings, &form, &to_email, &site_email).await
        }
        Command::Reserve {
            name,
            email,
            phone,
            date,
            time,
            guests,
            occasion,
            special_requests,
            to_email,
        } => {
            validate(&settings).context("Invalid settings")?;
            let form = ReservationForm {
                name,
                email,
                phone,
                date,
                time,
                guests,
                occasion,
                special_requests,
            };
            handle_reserve(&settings, &form, &to_email).await
        }
        Command::Palette { .. } => Ok(()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("oasis_sitegen=info,warn"),
            1 => EnvFilter::new("oasis_sitegen=debug,info"),
            2 => EnvFilter::new("oasis_sitegen=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies global command-line overrides on top of file and environment
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(store_id) = &cli.store_id {
        settings.store_id = store_id.clone();
    }
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(environment) = &cli.environment {
        settings.environment = environment.clone();
    }
}

/// Handles `generate`: runs the full pipeline
async fn handle_generate(settings: &Settings, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("Fetching configuration for {}...", settings.environment);

    let generated = generate(settings, dry_run)
        .await
        .context("Configuration generation failed")?;

    if dry_run {
        let config = &generated.config;
        println!("=== Oasis-Sitegen Dry Run ===\n");
        println!("Site: {} ({})", config.name, config.description);
        println!(
            "Theme: {}/{}",
            config.theme.theme_name, config.theme.theme_type
        );
        println!("Hours: {} entries", config.hours.len());
        println!("Features: {}", config.homepage.features.items.len());
        println!("Testimonials: {}", config.homepage.testimonials.items.len());
        println!(
            "Gallery categories: {}",
            config.homepage.gallery.categories.len()
        );
        println!("Digest: {}", generated.digest);
        println!(
            "\n✓ Configuration is valid; would write {}",
            generated.output_path.display()
        );
    } else {
        println!(
            "✓ Configuration generated at {}",
            generated.output_path.display()
        );
    }

    Ok(())
}

/// Handles `menu`: prints the live menu grouped by category
async fn handle_menu(settings: &Settings) -> anyhow::Result<()> {
    let client = ApiClient::new(settings)?;
    let items = client.fetch_menu().await;

    if items.is_empty() {
        println!("No menu items available.");
        return Ok(());
    }

    for (category, dishes) in group_by_category(&items) {
        println!("{}", category);
        for dish in dishes {
            println!("  {:<32} {:>8.2}", dish.name, dish.price);
        }
    }

    Ok(())
}

/// Handles `contact`: captures the phone number, then sends the form
async fn handle_contact(
    settings: &Settings,
    form: &ContactFormData,
    to_email: &str,
    site_email: &str,
) -> anyhow::Result<()> {
    let client = ApiClient::new(settings)?;
    let response = client
        .submit_contact_form(form, to_email, site_email)
        .await
        .context("Failed to send contact form")?;

    println!("✓ {}", response.message);
    Ok(())
}

/// Handles `reserve`: sends a reservation request
async fn handle_reserve(
    settings: &Settings,
    form: &ReservationForm,
    to_email: &str,
) -> anyhow::Result<()> {
    let client = ApiClient::new(settings)?;
    let response = client
        .submit_reservation(form, to_email)
        .await
        .context("Failed to submit reservation. Please try again.")?;

    println!("✓ Reservation submitted");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Handles `palette`: prints one palette, or lists the known families
fn handle_palette(name: Option<&str>, theme_type: ThemeType) {
    let Some(name) = name else {
        for family in palette_names() {
            println!("{}", family);
        }
        return;
    };

    let theme = palette_for(name, theme_type);
    println!("{} ({})", name, theme_type);
    println!("  primary:    {}", theme.primary);
    println!("  secondary:  {}", theme.secondary);
    println!("  accent:     {}", theme.accent);
    println!("  background: {}", theme.background);
    println!("  text:       {}", theme.text);
}
