use clap::Parser;
use saju_engine::domain::ports::BirthProvider;
use saju_engine::utils::logger;
use saju_engine::{classify_birth, BirthChart, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting saju CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let info = config.birth_info();

    match classify_birth(&info) {
        Ok(chart) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }
        Err(e) => {
            tracing::error!("❌ Classification failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_chart(chart: &BirthChart) {
    let pillars = &chart.pillars;
    match &pillars.hour {
        Some(hour) => println!(
            "🗓  {}年 {}月 {}日 {}時",
            pillars.year, pillars.month, pillars.day, hour
        ),
        None => println!("🗓  {}年 {}月 {}日", pillars.year, pillars.month, pillars.day),
    }

    println!("日主: {} ({})", chart.day_master, chart.day_master_element);

    let balance = chart
        .element_tally
        .entries()
        .map(|(element, count)| format!("{}{}", element.glyph(), count))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "五行: {} (dominant {}, weak {})",
        balance, chart.dominant_element, chart.weak_element
    );

    let relations = chart
        .relation_counts
        .entries()
        .filter(|&(_, count)| count > 0)
        .map(|(group, count)| format!("{} {}", group, count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("十神: {}", relations);

    println!("Zodiac: {}", chart.zodiac);
}
