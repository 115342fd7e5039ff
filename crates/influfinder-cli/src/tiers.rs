//! Tier table and progress handlers.

use influfinder_core::{
    progress_to_next_tier, tier_info, Catalog, TierLevel, TierProgress, TIER_CONFIG,
};
use serde::Serialize;

use crate::output::{print_json, progress_bar};

pub(crate) fn run_tiers(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&TIER_CONFIG[..]);
    }

    println!("{:<6}{:<10}{:<8}DESCRIPTION", "TIER", "NAME", "MIN");
    for info in &TIER_CONFIG {
        println!(
            "{:<6}{:<10}{:<8}{} {}",
            info.level.as_u8(),
            info.display_name,
            info.min_collabs,
            info.emoji,
            info.description
        );
    }
    Ok(())
}

pub(crate) fn run_tier(level: u8, json: bool) -> anyhow::Result<()> {
    let info = tier_info(TierLevel::try_from(level)?);
    if json {
        return print_json(info);
    }

    println!("Tier {} - {} {}", info.level.as_u8(), info.display_name, info.emoji);
    println!("{}", info.description);
    println!("Unlocked at {} completed collabs", info.min_collabs);
    Ok(())
}

pub(crate) fn run_progress(completed: i64, json: bool) -> anyhow::Result<()> {
    if completed < 0 {
        tracing::warn!(completed, "negative collab count; treating as zero");
    }
    let progress = progress_to_next_tier(completed);
    if json {
        return print_json(&progress);
    }
    print_progress(completed.max(0), &progress);
    Ok(())
}

#[derive(Serialize)]
struct ProfileView<'a> {
    name: &'a str,
    user_type: influfinder_core::UserType,
    followers: u64,
    engagement_rate: f64,
    completed_collabs: u32,
    progress: TierProgress,
}

pub(crate) fn run_profile(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let creator = &catalog.creator;
    let progress = creator.progress();

    if json {
        return print_json(&ProfileView {
            name: &creator.name,
            user_type: creator.user_type,
            followers: creator.followers,
            engagement_rate: creator.engagement_rate,
            completed_collabs: creator.completed_collabs,
            progress,
        });
    }

    println!("{} ({})", creator.name, creator.user_type);
    println!(
        "{} followers, {}% engagement",
        creator.followers, creator.engagement_rate
    );
    print_progress(i64::from(creator.completed_collabs), &progress);
    Ok(())
}

fn print_progress(completed: i64, progress: &TierProgress) {
    let current = tier_info(progress.current_tier);
    println!(
        "Tier {} - {} {}",
        current.level.as_u8(),
        current.display_name,
        current.emoji
    );

    let Some(next) = progress.next_tier else {
        println!("{} 100%", progress_bar(100, 20));
        println!("Maximum tier achieved");
        return;
    };

    let next = tier_info(next);
    println!(
        "{} {}%  {completed} / {} collabs",
        progress_bar(progress.progress_percent, 20),
        progress.progress_percent,
        next.min_collabs
    );
    let plural = if progress.collabs_needed == 1 { "" } else { "s" };
    println!(
        "Complete {} more collab{plural} to reach {}",
        progress.collabs_needed, next.display_name
    );
}
