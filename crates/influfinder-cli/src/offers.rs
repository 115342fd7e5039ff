//! Offer feed handlers.

use clap::Subcommand;
use influfinder_core::{check_eligibility, filter_by_category, Catalog, Eligibility, FeedSummary};
use serde::Serialize;

use crate::output::print_json;

/// Sub-commands available under `offers`.
#[derive(Debug, Subcommand)]
pub enum OfferCommands {
    /// List offers in the feed with the creator's eligibility
    List {
        /// Category filter, e.g. food or fitness
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Explain whether the creator can take up one offer
    Check { offer_id: String },
}

#[derive(Serialize)]
struct OfferRow<'a> {
    id: &'a str,
    business_name: &'a str,
    title: &'a str,
    category: &'a str,
    content: String,
    applicants: u32,
    eligibility: Eligibility,
}

#[derive(Serialize)]
struct FeedView<'a> {
    summary: FeedSummary,
    offers: Vec<OfferRow<'a>>,
}

pub(crate) fn run(command: OfferCommands, catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    match command {
        OfferCommands::List { category } => run_list(catalog, &category, json),
        OfferCommands::Check { offer_id } => run_check(catalog, &offer_id, json),
    }
}

fn run_list(catalog: &Catalog, category: &str, json: bool) -> anyhow::Result<()> {
    let offers = filter_by_category(&catalog.offers, category);
    let summary = FeedSummary::from_offers(offers.iter().copied());

    let rows: Vec<OfferRow<'_>> = offers
        .into_iter()
        .map(|o| OfferRow {
            id: &o.id,
            business_name: &o.business_name,
            title: &o.title,
            category: &o.category,
            content: o.content_summary(),
            applicants: o.applicants,
            eligibility: check_eligibility(o, &catalog.creator),
        })
        .collect();

    if json {
        return print_json(&FeedView {
            summary,
            offers: rows,
        });
    }

    if rows.is_empty() {
        println!("no offers in category '{category}'; try a different category");
        return Ok(());
    }

    println!(
        "{} offers, {} applicants, ${} in value",
        summary.offers, summary.applicants, summary.estimated_value
    );
    println!("{:<4}{:<26}{:<34}{:<11}CONTENT", "ID", "BUSINESS", "TITLE", "ACCESS");
    for row in &rows {
        let access = match &row.eligibility {
            Eligibility::Eligible { access } => access.as_str().to_string(),
            Eligibility::Ineligible { .. } => "locked".to_string(),
        };
        println!(
            "{:<4}{:<26}{:<34}{:<11}{}",
            row.id, row.business_name, row.title, access, row.content
        );
    }
    Ok(())
}

fn run_check(catalog: &Catalog, offer_id: &str, json: bool) -> anyhow::Result<()> {
    let offer = catalog
        .find_offer(offer_id)
        .ok_or_else(|| anyhow::anyhow!("offer '{offer_id}' not found"))?;
    let eligibility = check_eligibility(offer, &catalog.creator);

    if json {
        return print_json(&eligibility);
    }

    println!("{} - {}", offer.business_name, offer.title);
    match eligibility {
        Eligibility::Eligible { access } => {
            println!("eligible ({})", access.as_str());
        }
        Eligibility::Ineligible { reasons } => {
            println!("not eligible:");
            for reason in reasons {
                println!("  - {reason}");
            }
        }
    }
    Ok(())
}
