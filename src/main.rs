use std::fs;
use std::io::Write;
use std::process;

use clap::Parser;

use sportcheck::adapters::csv_store::{export_csv, export_json};
use sportcheck::domain::model::{AgeGroup, Discipline, ThresholdSet};
use sportcheck::domain::ports::ConfigProvider;
use sportcheck::utils::{logger, validation::Validate};
use sportcheck::{
    BenchmarkTable, CliConfig, Command, CsvFileStore, FormState, Result, SubmissionService,
    TrackerError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting sportcheck");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }

    // An incomplete or non-monotonic benchmark table is fatal at startup.
    let table = match BenchmarkTable::standard() {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Benchmark table construction failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let store = CsvFileStore::new(config.store_path());
    let service = SubmissionService::new(table, store);

    if let Err(e) = run(&config, &service).await {
        tracing::error!("Command failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: &CliConfig, service: &SubmissionService<CsvFileStore>) -> Result<()> {
    match &config.command {
        Command::Submit {
            name,
            discipline,
            age_group,
            result,
        } => {
            let discipline: Discipline = discipline.parse()?;
            let age_group: AgeGroup = age_group.parse()?;
            let form = FormState {
                name: name.clone(),
                discipline,
                age_group,
                result: *result,
                submitted: false,
            };

            let (_, record) = service.submit(form).await?;
            tracing::info!("Performance data saved to {}", config.store_path());

            println!(
                "{}: {} {} in '{}' ({}) -> {}",
                record.name,
                record.result,
                discipline.unit(),
                discipline,
                age_group,
                record.achieved_level
            );
            let set = service.table().thresholds(discipline, age_group)?;
            print_thresholds(discipline, age_group, set);
        }

        Command::List => {
            let records = service.records().await?;
            if records.is_empty() {
                println!("No performance records found yet.");
            } else {
                println!(
                    "{:<20} {:<18} {:<10} {:>10}  {:<12} {}",
                    "Name", "Discipline", "Age Group", "Result", "Level", "Timestamp"
                );
                for record in &records {
                    println!(
                        "{:<20} {:<18} {:<10} {:>10}  {:<12} {}",
                        record.name,
                        record.discipline.to_string(),
                        record.age_group.to_string(),
                        record.result,
                        record.achieved_level.to_string(),
                        record.timestamp.format("%Y-%m-%d %H:%M:%S")
                    );
                }
                println!("{} record(s)", records.len());
            }
        }

        Command::Benchmarks {
            discipline,
            age_group,
        } => {
            let discipline: Discipline = discipline.parse()?;
            let age_group: AgeGroup = age_group.parse()?;
            let set = service.table().thresholds(discipline, age_group)?;
            print_thresholds(discipline, age_group, set);
        }

        Command::Export { format, output } => {
            let records = service.records().await?;
            let data = match format.as_str() {
                "csv" => export_csv(&records)?,
                "json" => export_json(&records)?,
                other => {
                    return Err(TrackerError::InvalidInput {
                        field: "format".to_string(),
                        value: other.to_string(),
                        reason: "expected 'csv' or 'json'".to_string(),
                    })
                }
            };

            match output {
                Some(path) => {
                    fs::write(path, &data)?;
                    tracing::info!("Exported {} record(s) to {}", records.len(), path);
                    println!("Exported {} record(s) to {}", records.len(), path);
                }
                None => {
                    std::io::stdout().write_all(&data)?;
                }
            }
        }
    }

    Ok(())
}

fn print_thresholds(discipline: Discipline, age_group: AgeGroup, set: &ThresholdSet) {
    let unit = discipline.unit();
    println!("Benchmark for {} ({})", discipline, age_group);
    if discipline.lower_is_better() {
        println!("  Gold:   {} {} or less", set.gold, unit);
        println!("  Silber: {} {} or less", set.silber, unit);
        println!("  Bronze: {} {} or less", set.bronze, unit);
    } else {
        println!("  Bronze: {} {} or more", set.bronze, unit);
        println!("  Silber: {} {} or more", set.silber, unit);
        println!("  Gold:   {} {} or more", set.gold, unit);
    }
}
