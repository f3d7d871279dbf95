use crate::infra::resolve_catalog;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use unit_match::error::AppError;
use unit_match::inventory::format_amount;
use unit_match::recommendation::{
    typology, ClientCriteria, CriteriaInput, Recommendation, RecommendationService, ScoringConfig,
};
use unit_match::report::{
    outreach_message, project_statistics, summary_line, DEFAULT_OUTREACH_LIMIT,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Preferred project id (repeat the flag for several)
    #[arg(long = "project")]
    pub(crate) projects: Vec<u32>,
    /// Requested typology id (repeat the flag for several)
    #[arg(long = "typology")]
    pub(crate) typologies: Vec<u32>,
    /// Minimum total area in square meters
    #[arg(long)]
    pub(crate) area_min: Option<f64>,
    /// Maximum total area in square meters
    #[arg(long)]
    pub(crate) area_max: Option<f64>,
    /// Minimum sale price
    #[arg(long)]
    pub(crate) price_min: Option<f64>,
    /// Maximum sale price
    #[arg(long)]
    pub(crate) price_max: Option<f64>,
    /// Client name; when given, an outreach message is printed
    #[arg(long)]
    pub(crate) client: Option<String>,
    /// Inventory snapshot to rank instead of the built-in catalog
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// How many ranked units to print
    #[arg(long, default_value_t = 15)]
    pub(crate) show: usize,
}

impl RecommendArgs {
    fn criteria(&self) -> ClientCriteria {
        ClientCriteria::from_input(CriteriaInput {
            project_ids: self.projects.clone(),
            typology_ids: self.typologies.clone(),
            area_min: self.area_min,
            area_max: self.area_max,
            price_min: self.price_min,
            price_max: self.price_max,
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Inventory snapshot to walk through instead of the built-in catalog
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = resolve_catalog(args.inventory.as_deref())?;
    let service = RecommendationService::new(catalog, ScoringConfig::default());
    let criteria = args.criteria();

    let run = service.run(&criteria);
    println!("{}", summary_line(&run.recommendations));
    println!(
        "Evaluated {} available unit(s) on {}",
        run.evaluated_units,
        Local::now().date_naive()
    );

    for (index, recommendation) in run.recommendations.iter().take(args.show).enumerate() {
        print_ranked_unit(index + 1, recommendation);
    }

    let client = args
        .client
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if let Some(client) = client {
        println!();
        println!(
            "{}",
            outreach_message(client, &run.recommendations, DEFAULT_OUTREACH_LIMIT)
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = resolve_catalog(args.inventory.as_deref())?;
    let service = RecommendationService::new(catalog, ScoringConfig::default());

    println!("Unit recommendation demo ({})", Local::now().date_naive());
    println!(
        "Portfolio: {} project feed(s), {} available unit(s)",
        service.catalog().feeds().len(),
        service.catalog().available_units().len()
    );

    println!("\nKnown typologies");
    for entry in typology::catalog() {
        println!("  {:>2}. {}", entry.id, entry.label);
    }

    for (label, criteria, client) in demo_searches() {
        println!("\n=== {label} ===");
        let run = service.run(&criteria);
        println!("{}", summary_line(&run.recommendations));

        for (index, recommendation) in run
            .recommendations
            .iter()
            .take(DEFAULT_OUTREACH_LIMIT)
            .enumerate()
        {
            print_ranked_unit(index + 1, recommendation);
        }

        let stats = project_statistics(&run.recommendations);
        if !stats.is_empty() {
            println!("Per-project averages:");
            for entry in stats.values() {
                println!(
                    "  - {}: {} unit(s), avg score {:.0}, avg price ${}, avg area {} m2",
                    entry.project_name,
                    entry.units,
                    entry.avg_score,
                    format_amount(entry.avg_price),
                    format_amount(entry.avg_area)
                );
            }
        }

        if let Some(client) = client {
            println!();
            println!(
                "{}",
                outreach_message(client, &run.recommendations, DEFAULT_OUTREACH_LIMIT)
            );
        }
    }

    Ok(())
}

fn print_ranked_unit(position: usize, recommendation: &Recommendation) {
    let unit = &recommendation.unit;
    println!(
        "{:>2}. [{:>3}/100] {} unit {} (floor {}) | {} | {} m2 | ${}",
        position,
        recommendation.result.score,
        unit.project_name,
        unit.unit_number,
        unit.floor,
        unit.description,
        format_amount(unit.total_area),
        format_amount(unit.sale_value)
    );
    for reason in &recommendation.result.reasons {
        println!("      - {reason}");
    }
}

fn demo_searches() -> Vec<(&'static str, ClientCriteria, Option<&'static str>)> {
    vec![
        (
            "Family searching for a three bedroom",
            ClientCriteria::from_input(CriteriaInput {
                typology_ids: vec![3],
                area_min: Some(150.0),
                area_max: Some(220.0),
                price_min: Some(800_000.0),
                price_max: Some(1_200_000.0),
                ..CriteriaInput::default()
            }),
            Some("Maria"),
        ),
        (
            "Investor focused on Puerto Madero Plaza",
            ClientCriteria::from_input(CriteriaInput {
                project_ids: vec![2],
                ..CriteriaInput::default()
            }),
            None,
        ),
        (
            "Open search across the whole portfolio",
            ClientCriteria::unrestricted(),
            None,
        ),
    ]
}
