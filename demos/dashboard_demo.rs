use retail_stock_analytics::{
    build_dashboard_data, ingestion, normalize_datasets, CategoryCatalog, DashboardFilter,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let vegetable = ingestion::dataset_from_value(json!({
        "title": "Vegetable Pickles",
        "items": [
            {
                "category": "vegetable",
                "name": "Mango Pickle",
                "weightTiers": {
                    "250": { "units": 10, "price": 50 },
                    "500": { "units": 5, "price": 90 }
                },
                "salesHistory": [
                    { "date": "2024-01-01", "unitsSold": 5 },
                    { "date": "2024-01-03", "unitsSold": 7 }
                ]
            },
            {
                "category": "vegetable",
                "name": "Lemon Pickle",
                "weightTiers": { "250": { "units": 8, "price": 40 } },
                "salesHistory": [{ "date": "2024-01-02", "unitsSold": 4 }]
            }
        ]
    }))?;

    let nonveg = ingestion::dataset_from_value(json!({
        "title": "Non Veg Pickles",
        "items": [{
            "category": "nonveg",
            "name": "Chicken Pickle",
            "weightTiers": { "500": { "units": 6, "price": 150 } },
            "salesHistory": [{ "date": "2024-01-02", "unitsSold": 3 }]
        }]
    }))?;

    let items = normalize_datasets(&[vegetable, nonveg]);
    let catalog = CategoryCatalog::retail_default();

    let filter = DashboardFilter::from_tokens("all", "30")?;
    let dashboard = build_dashboard_data(&items, &catalog, &filter);

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
