//! Interactive menu. One-letter commands over stdin; errors are
//! printed and the loop continues.

use std::io::{self, Write};

use anyhow::bail;

use wardrobe_core::config::EngineConfig;
use wardrobe_core::{color, DislikeReason, GarmentSource, LayerRole, Verdict};
use wardrobe_engine::{GenerationStatus, OutfitEngine, SelectorConfig};
use wardrobe_storage::{queries, NewGarment, WardrobeDb};

use crate::commands;

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn prompt_u8(label: &str, min: u8, max: u8) -> anyhow::Result<u8> {
    let value: u8 = prompt(label)?.parse()?;
    if !(min..=max).contains(&value) {
        bail!("value must be in {min}..={max}");
    }
    Ok(value)
}

fn prompt_id(label: &str) -> anyhow::Result<i64> {
    Ok(prompt(label)?.parse()?)
}

fn print_help() {
    println!("a    -> add a garment");
    println!("l    -> list garments");
    println!("d    -> garment details");
    println!("ac   -> activate a garment");
    println!("deac -> deactivate a garment");
    println!("r    -> remove a garment");
    println!("s    -> suggest outfits (and rate them)");
    println!("w    -> show learned weights");
    println!("h    -> feedback history");
    println!("q    -> quit");
}

pub fn run(db: &WardrobeDb, config: &EngineConfig) -> anyhow::Result<()> {
    println!("wardrobe interactive mode");
    print_help();
    loop {
        let option = match prompt("> ") {
            Ok(option) => option.to_lowercase(),
            // stdin closed
            Err(_) => return Ok(()),
        };
        let result = match option.as_str() {
            "a" => add_garment(db),
            "l" => list_garments(db),
            "d" => garment_details(db),
            "ac" => toggle_active(db, true),
            "deac" => toggle_active(db, false),
            "r" => remove_garment(db),
            "s" => suggest_and_rate(db, config),
            "w" => commands::weights(db, &commands::WeightsCommand::Show),
            "h" => commands::history(db, 20),
            "q" => return Ok(()),
            "" => Ok(()),
            _ => {
                print_help();
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("error: {e:#}");
        }
    }
}

fn add_garment(db: &WardrobeDb) -> anyhow::Result<()> {
    let name = prompt("name: ")?;
    let category = prompt("category: ")?;
    let layer_input = prompt("layer role [base, mid, outer, none]: ")?;
    let layer_role = match LayerRole::parse(&layer_input) {
        Some(role) => role,
        None => bail!("unknown layer role '{layer_input}'"),
    };
    let color_input = prompt("color (CSS name or hex): ")?;
    let (color_hex, lab) = color::parse_color(&color_input)?;
    let pattern = prompt("pattern: ")?;
    let warmth = prompt_u8("warmth [1-10]: ", 1, 10)?;
    let formality = prompt_u8("formality [1-10]: ", 1, 10)?;
    let season_tags = prompt("season tags: ")?;
    let occasion_tags = prompt("occasion tags: ")?;
    let active = prompt("active? [y/n]: ")? == "y";

    let garment = NewGarment {
        name: name.clone(),
        category,
        layer_role,
        color_hex,
        color: lab,
        pattern,
        warmth,
        formality,
        season_tags,
        occasion_tags,
        active,
    };
    let id = queries::garments::insert_garment(db.connection(), &garment)?;
    println!("added '{name}' with id {id}");
    Ok(())
}

fn list_garments(db: &WardrobeDb) -> anyhow::Result<()> {
    commands::list(db, true)
}

fn garment_details(db: &WardrobeDb) -> anyhow::Result<()> {
    let id = prompt_id("id: ")?;
    commands::show(db, id)
}

fn toggle_active(db: &WardrobeDb, active: bool) -> anyhow::Result<()> {
    let id = prompt_id("id: ")?;
    commands::set_active(db, id, active)
}

fn remove_garment(db: &WardrobeDb) -> anyhow::Result<()> {
    let id = prompt_id("id: ")?;
    let garment = db.garment(id)?;
    if prompt(&format!("remove '{}' permanently? [y/n]: ", garment.name))? != "y" {
        println!("kept");
        return Ok(());
    }
    commands::remove(db, id)
}

fn suggest_and_rate(db: &WardrobeDb, config: &EngineConfig) -> anyhow::Result<()> {
    let selector = SelectorConfig {
        top_pool: config.top_pool,
        seed: config.sample_seed,
    };
    let mut engine = OutfitEngine::from_store(db, selector)?;
    let pools = commands::load_pools(db, config)?;
    let report = engine.generate(&pools, db, config.suggestion_count)?;

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
        commands::print_outfit(db, i + 1, outfit)?;
    }

    let picked = prompt("rate an outfit? number or blank to skip: ")?;
    if picked.is_empty() {
        return Ok(());
    }
    let index: usize = picked.parse()?;
    let outfit = match report.outfits.get(index.wrapping_sub(1)) {
        Some(outfit) => outfit,
        None => bail!("no outfit number {index}"),
    };

    let verdict = if prompt("like it? [y/n]: ")? == "y" {
        Verdict::Like
    } else {
        for (i, reason) in DislikeReason::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, reason.code());
        }
        let choice = prompt("reason number or code: ")?;
        let reason = match choice.parse::<usize>() {
            Ok(n) if (1..=DislikeReason::ALL.len()).contains(&n) => DislikeReason::ALL[n - 1],
            _ => match DislikeReason::parse(&choice) {
                Some(reason) => reason,
                None => bail!("unknown reason '{choice}'"),
            },
        };
        Verdict::Dislike(reason)
    };

    engine.apply_feedback(db, outfit, verdict)?;
    println!("feedback recorded");
    Ok(())
}
