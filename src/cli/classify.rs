//! Classify command: show the layout role of category strings.

use crate::cli::common::{print_json, CliResult};
use crate::models::CategoryRole;
use clap::Args;
use serde::Serialize;

/// Show which board role a category maps to
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Category strings to classify (e.g., "Tops" "jeans")
    #[arg(value_name = "CATEGORY", required = true)]
    pub categories: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Classification {
    category: String,
    role: CategoryRole,
}

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    results: Vec<Classification>,
    count: usize,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> CliResult<()> {
        let results: Vec<Classification> = self
            .categories
            .iter()
            .map(|category| Classification {
                category: category.clone(),
                role: CategoryRole::classify(category),
            })
            .collect();

        if self.json {
            return print_json(&ClassifyResponse {
                count: results.len(),
                results,
            });
        }

        for result in &results {
            println!("  {:<30} {}", result.category, result.role);
        }
        Ok(())
    }
}
