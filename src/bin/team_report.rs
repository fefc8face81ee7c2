//! Team statistics report over a member roster
//!
//! Loads the roster CSV, prints subtree statistics for one member or for
//! every forest root, and optionally renders a reply template for the
//! selected member.

use anyhow::{bail, Context};
use clap::Parser;
use referral_system::genealogy::{levels, subtree_statistics, superior};
use referral_system::member::{load_members, InMemoryDirectory, Member, MemberDirectory};
use referral_system::template::{render_template, ReplyTemplate};
use std::collections::HashMap;
use std::fs::File;

#[derive(Parser)]
#[command(name = "team_report")]
#[command(about = "Referral team statistics and reply rendering")]
struct Cli {
    /// Member roster CSV
    roster: String,

    /// Referral code to report on; omit to report every forest root
    #[arg(long)]
    root: Option<String>,

    /// Reply template JSON to render for the selected member
    #[arg(long)]
    template: Option<String>,

    /// Template variable overrides, as name=value
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,
}

fn report(directory: &InMemoryDirectory, member: &Member) {
    let stats = subtree_statistics(directory, member);
    println!(
        "{} ({}): direct={} total={} invested={:.2}",
        member.display_name(),
        member.referral_code,
        stats.direct_count,
        stats.total_count,
        stats.total_invested
    );

    match superior(directory, member) {
        Some(sup) => println!("  superior: {} ({})", sup.display_name(), sup.referral_code),
        None => println!("  superior: none"),
    }

    for (depth, level) in levels(directory, member).iter().enumerate() {
        let codes: Vec<&str> = level.iter().map(|m| m.referral_code.as_str()).collect();
        println!("  level {}: {}", depth + 1, codes.join(", "));
    }
}

fn parse_overrides(pairs: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut overrides = HashMap::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("override {:?} is not of the form NAME=VALUE", pair);
        };
        overrides.insert(name.to_string(), value.to_string());
    }
    Ok(overrides)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let directory = load_members(&cli.roster)
        .with_context(|| format!("failed to load roster {}", cli.roster))?;
    println!("Loaded {} members", directory.len());

    let selected = match &cli.root {
        Some(code) => {
            let code = code.to_uppercase();
            let Some(member) = directory.find(&code) else {
                bail!("no member with referral code {}", code);
            };
            vec![member]
        }
        None => directory.roots(),
    };

    for member in &selected {
        report(&directory, member);
    }

    if let Some(template_path) = &cli.template {
        let Some(member) = selected.first() else {
            bail!("no member selected for template rendering");
        };
        let file = File::open(template_path)
            .with_context(|| format!("failed to open template {}", template_path))?;
        let template: ReplyTemplate = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse template {}", template_path))?;
        let overrides = parse_overrides(&cli.overrides)?;

        println!("\n--- {} for {} ---", template.name, member.referral_code);
        println!("{}", render_template(&template, member, &directory, &overrides));
    }

    Ok(())
}
