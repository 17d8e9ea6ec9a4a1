//! End-to-end flow: service + repository + preference store on disk.

use std::sync::Arc;

use taskpie_core::charts;
use taskpie_core::todos::{NewTodoItem, TodoService, TodoServiceTrait, TodoUpdate};
use taskpie_storage_prefs::todos::TodoRepository;
use taskpie_storage_prefs::PreferenceStore;
use tempfile::tempdir;

fn service_at(path: &std::path::Path) -> TodoService {
    let store = Arc::new(PreferenceStore::open(path).expect("Failed to open preference store"));
    TodoService::new(Arc::new(TodoRepository::new(store)))
}

fn new_todo(title: &str, percentage: f64) -> NewTodoItem {
    NewTodoItem {
        id: None,
        title: title.to_string(),
        percentage,
        color: None,
    }
}

#[tokio::test]
async fn test_crud_flow_survives_reopen() {
    let dir = tempdir().unwrap();
    let service = service_at(dir.path());

    // First open seeds the sample list: 30 + 25 + 20.
    let seeded = service.get_todos().unwrap();
    assert_eq!(seeded.len(), 3);
    assert_eq!(service.used_percentage().unwrap(), 75.0);

    // Add within the remaining 25%.
    let added = service.add_todo(new_todo("Inbox triage", 15.0)).await.unwrap();
    assert_eq!(service.remaining_percentage().unwrap(), 10.0);

    // Edit and complete.
    service
        .update_todo(
            &added.id,
            TodoUpdate {
                title: "Inbox triage".to_string(),
                percentage: 25.0,
            },
        )
        .await
        .unwrap();
    service.toggle_completion(&seeded[2].id).await.unwrap();
    service.delete_todo(&seeded[1].id).await.unwrap();

    // A fresh service over the same directory sees the same state.
    let reopened = service_at(dir.path());
    let summary = reopened.budget_summary().unwrap();
    assert_eq!(summary.item_count, 2); // seeded[0] + added; seeded[2] completed
    assert_eq!(summary.used_percent, 55.0); // 30 + 25
    assert_eq!(summary.remaining_percent, 45.0);
}

#[tokio::test]
async fn test_budget_is_enforced_end_to_end() {
    let dir = tempdir().unwrap();
    let service = service_at(dir.path());

    // Seeded list uses 75%; 30% more does not fit.
    assert!(service.add_todo(new_todo("Too big", 30.0)).await.is_err());

    // Completing a seeded item frees its weight.
    let seeded = service.get_todos().unwrap();
    service.toggle_completion(&seeded[0].id).await.unwrap();
    service.add_todo(new_todo("Now it fits", 30.0)).await.unwrap();
    assert_eq!(service.used_percentage().unwrap(), 75.0);
}

#[tokio::test]
async fn test_chart_layout_from_persisted_state() {
    let dir = tempdir().unwrap();
    let service = service_at(dir.path());

    let data = service.chart_data().unwrap();
    let chart = charts::layout(&data, 240.0);

    assert_eq!(chart.slices.len(), 3);
    // Slices are contiguous and clockwise from the top.
    assert!((chart.slices[0].start_angle_deg - (-90.0)).abs() < 1e-9);
    for pair in chart.slices.windows(2) {
        assert!((pair[0].end_angle_deg - pair[1].start_angle_deg).abs() < 1e-9);
    }
    // 75% used, 25% remaining.
    assert!((chart.remainder_percent - 25.0).abs() < 1e-9);
    assert_eq!(chart.legend.last().unwrap().label, "Remaining");
}
