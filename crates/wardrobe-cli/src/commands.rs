//! Subcommand handlers. Everything here talks to the store through the
//! core traits and prints plain text; `--json` switches the suggestion
//! output to a serialized report.

use anyhow::{bail, Context};
use clap::{Args, Subcommand};

use wardrobe_core::config::EngineConfig;
use wardrobe_core::{
    color, FeedbackError, GarmentSource, LayerRole, Outfit, Verdict, WeightKey, WeightStore,
};
use wardrobe_engine::feedback::process_feedback;
use wardrobe_engine::{GenerationStatus, OutfitEngine, RolePools, SelectorConfig};
use wardrobe_storage::{queries, GarmentField, NewGarment, WardrobeDb};

fn parse_layer_role(s: &str) -> Result<LayerRole, String> {
    LayerRole::parse(s).ok_or_else(|| format!("expected one of: base, mid, outer, none (got '{s}')"))
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Garment name
    #[arg(long)]
    pub name: String,
    /// Free-form category (shoes, trousers, t-shirt, ...)
    #[arg(long)]
    pub category: String,
    /// Layering role: base, mid, outer, or none
    #[arg(long, default_value = "none", value_parser = parse_layer_role)]
    pub layer_role: LayerRole,
    /// CSS color name or hex string
    #[arg(long)]
    pub color: String,
    /// Pattern description (solid, thin stripes, bold plaid, ...)
    #[arg(long, default_value = "solid")]
    pub pattern: String,
    /// Warmth rating 1-10
    #[arg(long, default_value_t = 5)]
    pub warmth: u8,
    /// Formality rating 1-10
    #[arg(long, default_value_t = 5)]
    pub formality: u8,
    /// Comma-separated season tags
    #[arg(long, default_value = "")]
    pub season_tags: String,
    /// Comma-separated occasion tags
    #[arg(long, default_value = "")]
    pub occasion_tags: String,
    /// Add the garment out of rotation
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_parser = parse_layer_role)]
    pub layer_role: Option<LayerRole>,
    /// CSS color name or hex string; re-derives the stored Lab triple
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub pattern: Option<String>,
    #[arg(long)]
    pub warmth: Option<u8>,
    #[arg(long)]
    pub formality: Option<u8>,
    #[arg(long)]
    pub season_tags: Option<String>,
    #[arg(long)]
    pub occasion_tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// How many outfits to return (defaults to the configured count)
    #[arg(long)]
    pub count: Option<usize>,
    /// Fixed sampling seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the per-component score breakdown for each outfit
    #[arg(long)]
    pub breakdown: bool,
    /// Emit the full generation report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FeedbackArgs {
    #[arg(long)]
    pub shoes: i64,
    #[arg(long)]
    pub bottom: i64,
    #[arg(long)]
    pub base_top: i64,
    #[arg(long)]
    pub mid_top: Option<i64>,
    #[arg(long)]
    pub outerwear: Option<i64>,
    /// Record a like (mutually exclusive with --reason)
    #[arg(long, conflicts_with = "reason")]
    pub like: bool,
    /// Dislike reason code (colors_clash, boring, too_formal, ...)
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum WeightsCommand {
    /// Print the live weight set next to defaults and clamp ranges
    Show,
    /// Set one weight to an explicit value (clamped into range)
    Set { key: String, value: f64 },
    /// Reset one weight, or every weight when no key is given
    Reset { key: Option<String> },
}

pub fn add(db: &WardrobeDb, args: &AddArgs) -> anyhow::Result<()> {
    let (hex, lab) = color::parse_color(&args.color)
        .with_context(|| format!("unrecognized color '{}'", args.color))?;
    if !(1..=10).contains(&args.warmth) || !(1..=10).contains(&args.formality) {
        bail!("warmth and formality must be in 1..=10");
    }
    let garment = NewGarment {
        name: args.name.clone(),
        category: args.category.clone(),
        layer_role: args.layer_role,
        color_hex: hex,
        color: lab,
        pattern: args.pattern.clone(),
        warmth: args.warmth,
        formality: args.formality,
        season_tags: args.season_tags.clone(),
        occasion_tags: args.occasion_tags.clone(),
        active: !args.inactive,
    };
    let id = queries::garments::insert_garment(db.connection(), &garment)?;
    println!("added '{}' with id {id}", args.name);
    Ok(())
}

pub fn list(db: &WardrobeDb, include_inactive: bool) -> anyhow::Result<()> {
    let garments = queries::garments::list_garments(db.connection(), include_inactive)?;
    if garments.is_empty() {
        println!("wardrobe is empty");
        return Ok(());
    }
    for garment in &garments {
        let marker = if garment.active { "" } else { "  [inactive]" };
        println!(
            "{:>4}  {} ({}){marker}",
            garment.id, garment.name, garment.category
        );
    }
    Ok(())
}

pub fn show(db: &WardrobeDb, id: i64) -> anyhow::Result<()> {
    let garment = db.garment(id)?;
    println!("name:       {}", garment.name);
    println!("category:   {}", garment.category);
    println!("layer role: {}", garment.layer_role);
    println!("color:      {} (L {:.1}, a {:.1}, b {:.1})",
        garment.color_hex, garment.color.l, garment.color.a, garment.color.b);
    println!("pattern:    {}", garment.pattern);
    println!("warmth:     {}", garment.warmth);
    println!("formality:  {}", garment.formality);
    println!("seasons:    {}", garment.season_tags);
    println!("occasions:  {}", garment.occasion_tags);
    println!("active:     {}", garment.active);
    Ok(())
}

pub fn set_active(db: &WardrobeDb, id: i64, active: bool) -> anyhow::Result<()> {
    let changed = queries::garments::set_active(db.connection(), id, active)?;
    if changed == 0 {
        bail!("no garment with id {id}");
    }
    println!("garment {id} {}", if active { "activated" } else { "deactivated" });
    Ok(())
}

pub fn remove(db: &WardrobeDb, id: i64) -> anyhow::Result<()> {
    let changed = queries::garments::delete_garment(db.connection(), id)?;
    if changed == 0 {
        bail!("no garment with id {id}");
    }
    println!("garment {id} removed");
    Ok(())
}

/// Apply every field flag given as its tagged setter.
pub fn edit(db: &WardrobeDb, args: &EditArgs) -> anyhow::Result<()> {
    // Existence check up front so each field update is a simple write.
    db.garment(args.id)?;

    let mut updates: Vec<GarmentField> = Vec::new();
    if let Some(name) = &args.name {
        updates.push(GarmentField::Name(name.clone()));
    }
    if let Some(category) = &args.category {
        updates.push(GarmentField::Category(category.clone()));
    }
    if let Some(role) = args.layer_role {
        updates.push(GarmentField::LayerRole(role));
    }
    if let Some(color) = &args.color {
        let (hex, lab) = color::parse_color(color)
            .with_context(|| format!("unrecognized color '{color}'"))?;
        updates.push(GarmentField::Color { hex, lab });
    }
    if let Some(pattern) = &args.pattern {
        updates.push(GarmentField::Pattern(pattern.clone()));
    }
    if let Some(warmth) = args.warmth {
        if !(1..=10).contains(&warmth) {
            bail!("warmth must be in 1..=10");
        }
        updates.push(GarmentField::Warmth(warmth));
    }
    if let Some(formality) = args.formality {
        if !(1..=10).contains(&formality) {
            bail!("formality must be in 1..=10");
        }
        updates.push(GarmentField::Formality(formality));
    }
    if let Some(tags) = &args.season_tags {
        updates.push(GarmentField::SeasonTags(tags.clone()));
    }
    if let Some(tags) = &args.occasion_tags {
        updates.push(GarmentField::OccasionTags(tags.clone()));
    }
    if updates.is_empty() {
        bail!("nothing to change; pass at least one field flag");
    }

    let count = updates.len();
    for field in updates {
        queries::garments::update_garment_field(db.connection(), args.id, field)?;
    }
    println!("garment {} updated ({count} field(s))", args.id);
    Ok(())
}

/// Assemble the five role pools: shoes and bottoms by configured
/// category, tops and outer layers by their layering role. Active
/// garments only.
pub fn load_pools(db: &WardrobeDb, config: &EngineConfig) -> anyhow::Result<RolePools> {
    let conn = db.connection();
    Ok(RolePools {
        shoes: queries::garments::get_garments_by_category(conn, &config.shoes_category, true)?,
        bottoms: queries::garments::get_garments_by_category(conn, &config.bottoms_category, true)?,
        base_tops: queries::garments::get_garments_by_layer(conn, LayerRole::Base, true)?,
        mid_tops: queries::garments::get_garments_by_layer(conn, LayerRole::Mid, true)?,
        outerwear: queries::garments::get_garments_by_layer(conn, LayerRole::Outer, true)?,
    })
}

fn slot_name(db: &WardrobeDb, id: Option<i64>) -> anyhow::Result<String> {
    match id {
        Some(id) => Ok(db.garment(id)?.name),
        None => Ok("-".to_string()),
    }
}

pub fn print_outfit(db: &WardrobeDb, index: usize, outfit: &Outfit) -> anyhow::Result<()> {
    println!(
        "{index}. [{:.3}] shoes: {} | bottom: {} | top: {} | mid: {} | outer: {}",
        outfit.score.unwrap_or(0.0),
        slot_name(db, Some(outfit.shoes))?,
        slot_name(db, Some(outfit.bottom))?,
        slot_name(db, Some(outfit.base_top))?,
        slot_name(db, outfit.mid_top)?,
        slot_name(db, outfit.outerwear)?,
    );
    println!("   signature: {}", outfit.signature());
    Ok(())
}

pub fn suggest(db: &WardrobeDb, config: &EngineConfig, args: &SuggestArgs) -> anyhow::Result<()> {
    let selector = SelectorConfig {
        top_pool: config.top_pool,
        seed: args.seed.or(config.sample_seed),
    };
    let engine = OutfitEngine::from_store(db, selector)?;
    let pools = load_pools(db, config)?;
    let count = args.count.unwrap_or(config.suggestion_count);
    let report = engine.generate(&pools, db, count)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &report.status {
        GenerationStatus::Complete => {}
        GenerationStatus::Partial { available } => {
            println!("only {available} valid outfit(s) exist; showing all of them");
        }
        GenerationStatus::InsufficientWardrobe { detail } => {
            println!("cannot build an outfit: {detail}");
            return Ok(());
        }
    }
    for (i, outfit) in report.outfits.iter().enumerate() {
        print_outfit(db, i + 1, outfit)?;
        if args.breakdown {
            let breakdown = engine.score_breakdown(outfit, db, db)?;
            println!("   {}", serde_json::to_string(&breakdown)?);
        }
    }
    Ok(())
}

pub fn parse_verdict(like: bool, reason: Option<&str>) -> Result<Verdict, FeedbackError> {
    Verdict::from_parts(if like { 1 } else { 0 }, reason)
}

pub fn feedback(db: &WardrobeDb, args: &FeedbackArgs) -> anyhow::Result<()> {
    let outfit = Outfit::new(
        args.shoes,
        args.bottom,
        args.base_top,
        args.mid_top,
        args.outerwear,
    );
    // Resolve every slot up front so a typo'd id fails cleanly instead
    // of polluting the penalty tables.
    for id in outfit.present_ids() {
        db.garment(id)?;
    }
    let verdict = parse_verdict(args.like, args.reason.as_deref())?;
    let adapted = process_feedback(db, &outfit, verdict)?;
    match adapted {
        Some(snapshot) => {
            println!("feedback recorded; weights adapted");
            for key in WeightKey::ALL {
                println!("  {key} = {:.3}", snapshot.get(key));
            }
        }
        None => println!("feedback recorded"),
    }
    Ok(())
}

pub fn weights(db: &WardrobeDb, command: &WeightsCommand) -> anyhow::Result<()> {
    match command {
        WeightsCommand::Show => {
            println!(
                "{:<30} {:>8} {:>8} {:>16}",
                "key", "value", "default", "range"
            );
            for key in WeightKey::ALL {
                let spec = key.spec();
                println!(
                    "{:<30} {:>8.3} {:>8.3} {:>16}",
                    key.name(),
                    db.weight(key)?,
                    spec.default,
                    format!("[{}, {}]", spec.min, spec.max),
                );
            }
        }
        WeightsCommand::Set { key, value } => {
            let key = WeightKey::parse(key)
                .with_context(|| format!("unknown weight key '{key}'"))?;
            let stored = db.set_weight(key, *value)?;
            println!("{key} = {stored:.3}");
        }
        WeightsCommand::Reset { key: Some(key) } => {
            let key = WeightKey::parse(key)
                .with_context(|| format!("unknown weight key '{key}'"))?;
            let value = db.reset_weight(key)?;
            println!("{key} reset to {value:.3}");
        }
        WeightsCommand::Reset { key: None } => {
            db.reset_all_weights()?;
            println!("all weights reset to defaults");
        }
    }
    Ok(())
}

pub fn history(db: &WardrobeDb, limit: usize) -> anyhow::Result<()> {
    let records = queries::feedback::list_feedback(db.connection())?;
    if records.is_empty() {
        println!("no feedback recorded yet");
        return Ok(());
    }
    for record in records.iter().take(limit) {
        let verdict = if record.verdict == 1 {
            "like".to_string()
        } else {
            format!("dislike ({})", record.reason.as_deref().unwrap_or("?"))
        };
        println!("{:>4}  {}  {}", record.id, record.signature, verdict);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::{DislikeReason, LabColor};

    fn sample(name: &str, category: &str, role: LayerRole) -> NewGarment {
        NewGarment {
            name: name.to_string(),
            category: category.to_string(),
            layer_role: role,
            color_hex: "#000080".to_string(),
            color: LabColor::new(12.9, 47.5, -64.7),
            pattern: "solid".to_string(),
            warmth: 5,
            formality: 5,
            season_tags: String::new(),
            occasion_tags: String::new(),
            active: true,
        }
    }

    #[test]
    fn test_load_pools_splits_by_category_and_layer() {
        let db = WardrobeDb::open_in_memory().unwrap();
        let conn = db.connection();
        queries::garments::insert_garment(conn, &sample("sneakers", "shoes", LayerRole::None))
            .unwrap();
        queries::garments::insert_garment(conn, &sample("chinos", "trousers", LayerRole::None))
            .unwrap();
        queries::garments::insert_garment(conn, &sample("tee", "t-shirt", LayerRole::Base))
            .unwrap();
        queries::garments::insert_garment(conn, &sample("cardigan", "knitwear", LayerRole::Mid))
            .unwrap();
        queries::garments::insert_garment(conn, &sample("parka", "jacket", LayerRole::Outer))
            .unwrap();

        let pools = load_pools(&db, &EngineConfig::default()).unwrap();
        assert_eq!(pools.shoes.len(), 1);
        assert_eq!(pools.bottoms.len(), 1);
        assert_eq!(pools.base_tops.len(), 1);
        assert_eq!(pools.mid_tops.len(), 1);
        assert_eq!(pools.outerwear.len(), 1);
    }

    #[test]
    fn test_load_pools_skips_inactive() {
        let db = WardrobeDb::open_in_memory().unwrap();
        let conn = db.connection();
        let id =
            queries::garments::insert_garment(conn, &sample("sneakers", "shoes", LayerRole::None))
                .unwrap();
        queries::garments::set_active(conn, id, false).unwrap();
        let pools = load_pools(&db, &EngineConfig::default()).unwrap();
        assert!(pools.shoes.is_empty());
    }

    #[test]
    fn test_edit_applies_tagged_updates() {
        let db = WardrobeDb::open_in_memory().unwrap();
        let id =
            queries::garments::insert_garment(db.connection(), &sample("tee", "t-shirt", LayerRole::Base))
                .unwrap();
        let args = EditArgs {
            id,
            name: None,
            category: None,
            layer_role: None,
            color: Some("navy".to_string()),
            pattern: None,
            warmth: None,
            formality: Some(8),
            season_tags: None,
            occasion_tags: None,
        };
        edit(&db, &args).unwrap();
        let garment = db.garment(id).unwrap();
        assert_eq!(garment.formality, 8);
        assert_eq!(garment.color_hex, "#000080");
    }

    #[test]
    fn test_edit_missing_garment_fails() {
        let db = WardrobeDb::open_in_memory().unwrap();
        let args = EditArgs {
            id: 99,
            name: Some("ghost".to_string()),
            category: None,
            layer_role: None,
            color: None,
            pattern: None,
            warmth: None,
            formality: None,
            season_tags: None,
            occasion_tags: None,
        };
        assert!(edit(&db, &args).is_err());
    }

    #[test]
    fn test_parse_verdict_contract() {
        assert_eq!(parse_verdict(true, None).unwrap(), Verdict::Like);
        assert_eq!(
            parse_verdict(false, Some("boring")).unwrap(),
            Verdict::Dislike(DislikeReason::Boring)
        );
        assert!(parse_verdict(false, None).is_err());
        assert!(parse_verdict(true, Some("boring")).is_err());
        assert!(parse_verdict(false, Some("itchy")).is_err());
    }

    #[test]
    fn test_layer_role_parser_rejects_unknown() {
        assert_eq!(parse_layer_role("mid").unwrap(), LayerRole::Mid);
        assert!(parse_layer_role("shell").is_err());
    }
}
