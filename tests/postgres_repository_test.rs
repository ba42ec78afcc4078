//! Repositorios contra PostgreSQL real.
//!
//! Necesitan `DATABASE_URL`; ejecutar con `cargo test -- --ignored`.

use chrono::NaiveDate;
use sqlx::PgPool;

use gestoria_vehicular::dto::{ListFilters, PickupFilters};
use gestoria_vehicular::models::{NewDocumentHandover, NewPendingPickup, NewVehicle};
use gestoria_vehicular::repositories::{
    DocumentHandoverRepository, DocumentHandoverStore, MaintenanceRepository, MaintenanceStore,
    PendingPickupRepository, PendingPickupStore, VehicleRepository, VehicleStore,
};
use gestoria_vehicular::utils::errors::AppError;

fn vehicle(plate: &str) -> NewVehicle {
    NewVehicle {
        client: "Juan Perez".to_string(),
        model: "Toyota Corolla".to_string(),
        purchase_location: "Agencia X".to_string(),
        color: "Rojo".to_string(),
        plate: plate.to_string(),
    }
}

#[sqlx::test]
#[ignore]
async fn unique_constraint_maps_to_duplicate(pool: PgPool) {
    let repo = VehicleRepository::new(pool);
    repo.create(vehicle("AB123CD")).await.unwrap();

    let err = repo.create(vehicle("AB123CD")).await.unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));
}

#[sqlx::test]
#[ignore]
async fn lowercase_plate_violates_check(pool: PgPool) {
    let repo = VehicleRepository::new(pool);
    let err = repo.create(vehicle("ab123cd")).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
}

#[sqlx::test]
#[ignore]
async fn like_wildcards_are_literal(pool: PgPool) {
    let repo = VehicleRepository::new(pool);
    repo.create(vehicle("AB123CD")).await.unwrap();
    repo.create(vehicle("A_1")).await.unwrap();

    let filters = ListFilters {
        client: None,
        plate: Some("_".to_string()),
    };
    let found = repo.list(&filters).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].plate, "A_1");
}

#[sqlx::test]
#[ignore]
async fn delete_missing_row_leaves_table_untouched(pool: PgPool) {
    let repo = VehicleRepository::new(pool.clone());
    let created = repo.create(vehicle("AB123CD")).await.unwrap();

    let err = repo.delete(created.id + 1000).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let counts = MaintenanceRepository::new(pool).counts().await.unwrap();
    assert_eq!(counts.vehicles, 1);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_plate("AB123CD").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore]
async fn handovers_are_newest_first(pool: PgPool) {
    let repo = DocumentHandoverRepository::new(pool);
    for (date, docs) in [((2024, 1, 10), "Titulo"), ((2024, 2, 5), "Cedula")] {
        repo.create(NewDocumentHandover {
            client: "Juan".to_string(),
            plate: "AB123CD".to_string(),
            handover_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            delivered_documents: docs.to_string(),
        })
        .await
        .unwrap();
    }

    let handovers = repo.list(&ListFilters::default()).await.unwrap();
    assert_eq!(
        handovers[0].handover_date,
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    );
}

#[sqlx::test]
#[ignore]
async fn pickups_filter_by_location_and_clear(pool: PgPool) {
    let repo = PendingPickupRepository::new(pool.clone());
    repo.create(NewPendingPickup {
        client: "Juan".to_string(),
        plate: "AB123CD".to_string(),
        registry_location: "Registro Norte".to_string(),
        submission_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        comments: None,
    })
    .await
    .unwrap();

    let filters = PickupFilters {
        location: Some("norte".to_string()),
        ..PickupFilters::default()
    };
    let found = repo.list(&filters).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].comments.is_none());

    let maintenance = MaintenanceRepository::new(pool);
    let removed = maintenance.clear_all().await.unwrap();
    assert_eq!(removed.pending_pickups, 1);
    assert_eq!(maintenance.counts().await.unwrap().total(), 0);
}
