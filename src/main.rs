use clap::Parser;
use darkroom_timer::utils::{format, logger, validation::Validate};
use darkroom_timer::{
    merge_timelines, schedule, CliConfig, MergedEntry, Recipe, RecipeFileSource, RecipeSource,
    Schedule, TimerError,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting darkroom-timer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = RecipeFileSource::new(config.recipe_files.iter().cloned());
    let recipes = match source.load_recipes() {
        Ok(recipes) => recipes,
        Err(e) => return Err(fail(e)),
    };

    let result = if recipes.len() == 1 {
        let timeline = schedule(&recipes[0], config.quantity);
        if config.json {
            print_json(&timeline)
        } else {
            print_schedule(&recipes[0], &timeline, config.quantity);
            Ok(())
        }
    } else {
        let merged = merge_timelines(&recipes, config.quantity);
        if config.json {
            print_json(&merged)
        } else {
            print_merged(&recipes, &merged, config.quantity);
            Ok(())
        }
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Timeline resolved successfully");
            Ok(())
        }
        Err(e) => Err(fail(e)),
    }
}

fn fail(e: TimerError) -> anyhow::Error {
    tracing::error!(
        "❌ Failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        darkroom_timer::utils::error::ErrorSeverity::Low => 0,
        darkroom_timer::utils::error::ErrorSeverity::Medium => 2,
        darkroom_timer::utils::error::ErrorSeverity::High => 1,
        darkroom_timer::utils::error::ErrorSeverity::Critical => 3,
    };
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    anyhow::Error::new(e)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), TimerError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_header(title: &str, quantity: u32) {
    println!("{}", title);
    println!(
        "Batch of {} film(s), generated {}",
        quantity,
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!();
}

fn print_schedule(recipe: &Recipe, timeline: &Schedule, quantity: u32) {
    print_header(&recipe.name, quantity);

    for entry in &timeline.entries {
        println!(
            "  {:>6}  {:<24} {:>6}  {}",
            format::format_clock(entry.start_offset),
            entry.step.label,
            format::format_clock(entry.step.duration),
            format::format_temperature(entry.step.temperature_min, entry.step.temperature_max),
        );
        if let Some(details) = &entry.step.details {
            println!("          {}", details);
        }
    }

    println!();
    println!(
        "Total time: {}",
        format::format_clock(timeline.total_duration)
    );
}

fn print_merged(recipes: &[Recipe], merged: &[MergedEntry], quantity: u32) {
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    print_header(&names.join(" + "), quantity);

    for entry in merged {
        println!(
            "  {:>6}  [{}] {:<24} {:>6}  {}",
            format::format_clock(entry.start_offset),
            entry.recipe_label,
            entry.step.label,
            format::format_clock(entry.step.duration),
            format::format_temperature(entry.step.temperature_min, entry.step.temperature_max),
        );
    }
}
