use std::fs;

use async_trait::async_trait;
use company_dashboard::{
    datasources::{DocumentStoreDatasource, RawDocument},
    entities::{DocumentId, TrendDirection, ViewMode},
    util::CompanyDashboardUtil,
};
use fractic_server_error::ServerError;
use serde_json::{json, Map, Value};
use tempfile::tempdir;

const VALLOUREC: &str = r#"{
  "Company": {
    "Company Common Name": "Vallourec SA",
    "Actual": {
      "Details": {
        "ISIN": "FR0013506730",
        "Sector": {
          "Name": "Energy Equipment",
          "Z1 Mean": 0.48,
          "Z2 Mean": 0.52,
          "Steering Indices": { "Profitability": 100, "Leverage": 95, "Environment": 80, "Social": 90, "Controversies": 105 }
        },
        "Market Capitalization": 3456789012.5,
        "Place of Exchange": "Euronext Paris"
      },
      "Data": "Altares",
      "UCO1": "A1",
      "Z1": 0.63,
      "UCO2": "B2",
      "Z2": 0.41,
      "Steering Indices": {
        "Profitability": { "Score": 120, "Trends": "Up" },
        "Leverage": { "Score": 88, "Trends": "Down" },
        "Environment": { "Score": 76, "Trends": "Equal" },
        "Social": { "Score": 101, "Trends": "Up" },
        "Controversies": { "Score": 97, "Trends": "Down" }
      },
      "Recent Changes": "Refinancing completed.",
      "Liquidity": 64,
      "Group": "Industrials",
      "Risks": { "Value At Risk": 12.5, "CE": 3.2 }
    },
    "Previous": { "Z1": 0.58 }
  }
}"#;

#[tokio::test]
async fn test_import_select_edit_delete() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vallourec.json");
    fs::write(&path, VALLOUREC).unwrap();

    let dashboard = CompanyDashboardUtil::in_memory();
    let imported = dashboard.import_file(&path).await.unwrap();
    let airbus = dashboard
        .import_json(r#"{ "Company": { "Company Common Name": "Airbus" } }"#)
        .await
        .unwrap();

    // First import became current; the second did not steal the selection.
    let state = dashboard.snapshot();
    assert_eq!(state.current().unwrap().id, imported.id);
    assert_eq!(state.entities().len(), 2);
    assert!(dashboard.render_sidebar().starts_with("  Airbus  ["));

    let radar = dashboard.radar_series().unwrap();
    assert_eq!(radar.company, [76.0, 101.0, 97.0, 88.0, 120.0]);
    assert_eq!(radar.sector_mean, [80.0, 90.0, 105.0, 95.0, 100.0]);
    assert_eq!(radar.trends[1], TrendDirection::Up);

    let details = dashboard.render_current();
    assert!(details.contains("Market Capitalization: 3.456.789.012,50 €"));
    assert!(details.contains("Euronext Paris"));

    dashboard.set_view_mode(ViewMode::Previous).unwrap();
    assert_eq!(dashboard.scatter_series().unwrap().company.x, 0.58);
    dashboard.set_view_mode(ViewMode::Actual).unwrap();

    let mut form = dashboard.edit_form(&imported.id).unwrap();
    form.set("actualSteeringLeverageTrends", "up").unwrap();
    form.set("actualLiquidity", "not a number").unwrap();
    let updated = dashboard.submit_edit(&imported.id, &form).await.unwrap();
    assert_eq!(
        updated.data.company.actual.steering_indices.leverage.trends,
        TrendDirection::Up
    );
    assert_eq!(updated.data.company.actual.liquidity, 0.0);
    assert_eq!(updated.data.company.actual.z1, 0.63);
    assert_eq!(dashboard.snapshot().current(), Some(&updated));

    dashboard.delete(&imported.id).await.unwrap();
    let state = dashboard.snapshot();
    assert_eq!(state.entities().len(), 1);
    assert_eq!(state.current().unwrap().id, airbus.id);
}

#[tokio::test]
async fn test_invalid_import_never_reaches_the_store() {
    let dashboard = CompanyDashboardUtil::in_memory();
    for raw in [
        "{",
        r#"{ "company": {} }"#,
        r#"{ "Company": [] }"#,
        r#"{ "Company": { "Company Common Name": "   " } }"#,
    ] {
        assert!(dashboard.import_json(raw).await.is_err(), "{}", raw);
    }
    assert_eq!(dashboard.datasource().call_count(), 0);
    let err = dashboard.import_json("{").await.unwrap_err();
    assert!(err.to_string().contains("Validation failed"));
    assert!(dashboard.snapshot().entities().is_empty());
    assert!(dashboard.snapshot().error().is_none());

    let missing = tempdir().unwrap().path().join("nope.json");
    assert!(dashboard.import_file(&missing).await.is_err());
}

#[tokio::test]
async fn test_reload_refreshes_current_and_drops_vanished() {
    let dashboard = CompanyDashboardUtil::in_memory();
    let a = dashboard
        .import_json(r#"{ "Company": { "Company Common Name": "Danone" } }"#)
        .await
        .unwrap();
    let b = dashboard
        .import_json(r#"{ "Company": { "Company Common Name": "Engie" } }"#)
        .await
        .unwrap();
    dashboard.select(&b.id).unwrap();

    // Removed behind the dashboard's back.
    dashboard.datasource().remove(&b.id.0).await.unwrap();
    dashboard.load().await.unwrap();
    let state = dashboard.snapshot();
    assert_eq!(state.entities().len(), 1);
    assert_eq!(state.current().unwrap().id, a.id);

    assert!(dashboard.delete(&b.id).await.is_err());
    assert!(dashboard.snapshot().error().unwrap().contains(&b.id.0));
    assert!(dashboard.refresh(&DocumentId::from("nope")).await.is_err());
}

#[tokio::test]
async fn test_concurrent_operations_all_settle() {
    let dashboard = CompanyDashboardUtil::in_memory();
    let names = ["Thales", "AXA", "Michelin", "Orange"];
    let imports = names
        .iter()
        .map(|n| format!(r#"{{ "Company": {{ "Company Common Name": "{}" }} }}"#, n))
        .collect::<Vec<_>>();

    let results = futures::future::join_all(imports.iter().map(|raw| dashboard.import_json(raw))).await;
    assert!(results.iter().all(Result::is_ok));

    let state = dashboard.snapshot();
    assert_eq!(state.entities().len(), 4);
    assert!(!state.loading());
    assert!(state.current().is_some());
}

/// Datasource that accepts writes but never finds anything, standing in for
/// an externally provided store.
struct ForgetfulDatasource;

#[async_trait]
impl DocumentStoreDatasource for ForgetfulDatasource {
    async fn list(&self) -> Result<Vec<RawDocument>, ServerError> {
        Ok(vec![RawDocument {
            id: "legacy".to_string(),
            fields: json!({ "data": { "Company": { "CompanyCommonName": "Legacy SE" } } })
                .as_object()
                .cloned()
                .unwrap_or_default(),
        }])
    }

    async fn get(&self, _id: &str) -> Result<Option<RawDocument>, ServerError> {
        Ok(None)
    }

    async fn insert(&self, fields: Map<String, Value>) -> Result<RawDocument, ServerError> {
        Ok(RawDocument {
            id: "new".to_string(),
            fields,
        })
    }

    async fn update(&self, id: &str, fields: Map<String, Value>) -> Result<RawDocument, ServerError> {
        Ok(RawDocument {
            id: id.to_string(),
            fields,
        })
    }

    async fn remove(&self, _id: &str) -> Result<(), ServerError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_custom_datasource() {
    let dashboard = CompanyDashboardUtil::with_datasource(ForgetfulDatasource);
    let docs = dashboard.load().await.unwrap();
    assert_eq!(docs[0].display_name(), "Legacy SE");
    assert_eq!(dashboard.snapshot().current().unwrap().id, DocumentId::from("legacy"));
}
