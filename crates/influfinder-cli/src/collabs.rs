//! Collaboration tab handlers.

use clap::Subcommand;
use influfinder_core::{
    count_by_tab, filter_collabs, visible_tabs, Catalog, CollabCategory, TabFilter, UserType,
};
use serde::Serialize;

use crate::output::print_json;

/// Sub-commands available under `collabs`.
#[derive(Debug, Subcommand)]
pub enum CollabCommands {
    /// List collaborations under a tab
    List {
        /// Tab to show: all, invitations, applied, active, in_review, completed, declined
        #[arg(long, default_value = "all", value_parser = crate::parse_tab)]
        tab: TabFilter,
    },
    /// Show per-tab badge counts
    Counts,
}

#[derive(Serialize)]
struct CollabRow<'a> {
    id: &'a str,
    category: CollabCategory,
    status: influfinder_core::CollabStatus,
    business_name: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_action: Option<&'a str>,
}

pub(crate) fn run(
    command: CollabCommands,
    catalog: &Catalog,
    viewer: UserType,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        CollabCommands::List { tab } => run_list(catalog, viewer, tab, json),
        CollabCommands::Counts => run_counts(catalog, viewer, json),
    }
}

fn run_list(catalog: &Catalog, viewer: UserType, tab: TabFilter, json: bool) -> anyhow::Result<()> {
    if let TabFilter::Only(category) = tab {
        if !visible_tabs(viewer).contains(&category) {
            anyhow::bail!("tab '{category}' is not available to {viewer} accounts");
        }
    }

    let rows: Vec<CollabRow<'_>> = filter_collabs(&catalog.collaborations, tab, Some(viewer))
        .into_iter()
        .map(|c| CollabRow {
            id: &c.id,
            category: c.category(Some(viewer)),
            status: c.status,
            business_name: &c.business_name,
            title: &c.title,
            next_action: c.next_action.as_deref(),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("no collaborations under this tab");
        return Ok(());
    }

    println!("{:<6}{:<13}{:<11}{:<26}TITLE", "ID", "TAB", "STATUS", "BUSINESS");
    for row in &rows {
        println!(
            "{:<6}{:<13}{:<11}{:<26}{}",
            row.id,
            row.category.as_str(),
            row.status.as_str(),
            row.business_name,
            row.title
        );
    }
    Ok(())
}

fn run_counts(catalog: &Catalog, viewer: UserType, json: bool) -> anyhow::Result<()> {
    let counts = count_by_tab(&catalog.collaborations, Some(viewer));
    if json {
        return print_json(&counts);
    }

    println!("{:<13}{}", "All", counts.all);
    for category in visible_tabs(viewer) {
        println!(
            "{:<13}{}",
            category.label(),
            counts.get(TabFilter::Only(category))
        );
    }
    Ok(())
}
