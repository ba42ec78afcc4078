//! Dobles en memoria de los repositorios y del almacén de avisos, más
//! helpers para disparar peticiones contra el router real.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use tower::ServiceExt;

use gestoria_vehicular::cache::FlashStore;
use gestoria_vehicular::config::EnvironmentConfig;
use gestoria_vehicular::dto::{FlashMessage, ListFilters, PickupFilters};
use gestoria_vehicular::middleware::session::SESSION_COOKIE;
use gestoria_vehicular::models::{
    DocumentHandover, ManagementRecord, NewDocumentHandover, NewManagementRecord,
    NewPendingPickup, NewVehicle, PendingPickup, Vehicle, VehicleSummary,
};
use gestoria_vehicular::repositories::vehicle_repository::DUPLICATE_PLATE_MESSAGE;
use gestoria_vehicular::repositories::{
    DocumentHandoverStore, MaintenanceStore, ManagementRecordStore, PendingPickupStore,
    RecordCounts, Repositories, VehicleStore,
};
use gestoria_vehicular::utils::errors::{not_found_error, AppError, AppResult};
use gestoria_vehicular::{create_router, AppState};

fn contains(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => value.to_lowercase().contains(&f.to_lowercase()),
        None => true,
    }
}

/// Tablas en memoria compartidas por todos los dobles
#[derive(Default)]
pub struct MemoryDb {
    next_id: Mutex<i32>,
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub management_records: Mutex<Vec<ManagementRecord>>,
    pub document_handovers: Mutex<Vec<DocumentHandover>>,
    pub pending_pickups: Mutex<Vec<PendingPickup>>,
}

impl MemoryDb {
    fn next_id(&self) -> i32 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    pub fn snapshot(&self) -> RecordCounts {
        RecordCounts {
            vehicles: self.vehicles.lock().unwrap().len() as i64,
            management_records: self.management_records.lock().unwrap().len() as i64,
            document_handovers: self.document_handovers.lock().unwrap().len() as i64,
            pending_pickups: self.pending_pickups.lock().unwrap().len() as i64,
        }
    }
}

fn remove_by_id<T>(
    rows: &Mutex<Vec<T>>,
    id: i32,
    resource: &str,
    row_id: impl Fn(&T) -> i32,
) -> AppResult<()> {
    let mut rows = rows.lock().unwrap();
    match rows.iter().position(|row| row_id(row) == id) {
        Some(index) => {
            rows.remove(index);
            Ok(())
        }
        None => Err(not_found_error(resource, id)),
    }
}

#[async_trait]
impl VehicleStore for MemoryDb {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<Vehicle>> {
        let mut rows: Vec<Vehicle> = self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .filter(|v| contains(&v.client, filters.client.as_deref()))
            .filter(|v| contains(&v.plate, filters.plate.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn plate_exists(&self, plate: &str) -> AppResult<bool> {
        Ok(self.vehicles.lock().unwrap().iter().any(|v| v.plate == plate))
    }

    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let mut rows = self.vehicles.lock().unwrap();
        if rows.iter().any(|v| v.plate == vehicle.plate) {
            return Err(AppError::Duplicate(DUPLICATE_PLATE_MESSAGE.to_string()));
        }
        let created = Vehicle {
            id: self.next_id(),
            client: vehicle.client,
            model: vehicle.model,
            purchase_location: vehicle.purchase_location,
            color: vehicle.color,
            plate: vehicle.plate,
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        remove_by_id(&self.vehicles, id, "Vehículo", |v| v.id)
    }

    async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.plate == plate)
            .cloned())
    }

    async fn list_summaries(&self) -> AppResult<Vec<VehicleSummary>> {
        let mut summaries: Vec<VehicleSummary> =
            self.vehicles.lock().unwrap().iter().map(VehicleSummary::from).collect();
        summaries.sort_by(|a, b| (&a.client, &a.plate).cmp(&(&b.client, &b.plate)));
        Ok(summaries)
    }
}

#[async_trait]
impl ManagementRecordStore for MemoryDb {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<ManagementRecord>> {
        let mut rows: Vec<ManagementRecord> = self
            .management_records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| contains(&r.client, filters.client.as_deref()))
            .filter(|r| contains(&r.plate, filters.plate.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn create(&self, record: NewManagementRecord) -> AppResult<ManagementRecord> {
        let created = ManagementRecord {
            id: self.next_id(),
            client: record.client,
            plate: record.plate,
            received_documents: record.received_documents,
            notes: record.notes,
            created_at: Utc::now(),
        };
        self.management_records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        remove_by_id(&self.management_records, id, "Gestoría", |r| r.id)
    }
}

#[async_trait]
impl DocumentHandoverStore for MemoryDb {
    async fn list(&self, filters: &ListFilters) -> AppResult<Vec<DocumentHandover>> {
        let mut rows: Vec<DocumentHandover> = self
            .document_handovers
            .lock()
            .unwrap()
            .iter()
            .filter(|h| contains(&h.client, filters.client.as_deref()))
            .filter(|h| contains(&h.plate, filters.plate.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn create(&self, handover: NewDocumentHandover) -> AppResult<DocumentHandover> {
        let created = DocumentHandover {
            id: self.next_id(),
            client: handover.client,
            plate: handover.plate,
            handover_date: handover.handover_date,
            delivered_documents: handover.delivered_documents,
            created_at: Utc::now(),
        };
        self.document_handovers.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        remove_by_id(&self.document_handovers, id, "Entrega de papeles", |h| h.id)
    }
}

#[async_trait]
impl PendingPickupStore for MemoryDb {
    async fn list(&self, filters: &PickupFilters) -> AppResult<Vec<PendingPickup>> {
        let mut rows: Vec<PendingPickup> = self
            .pending_pickups
            .lock()
            .unwrap()
            .iter()
            .filter(|p| contains(&p.client, filters.client.as_deref()))
            .filter(|p| contains(&p.registry_location, filters.location.as_deref()))
            .filter(|p| contains(&p.plate, filters.plate.as_deref()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.submission_date, b.id).cmp(&(a.submission_date, a.id)));
        Ok(rows)
    }

    async fn create(&self, pickup: NewPendingPickup) -> AppResult<PendingPickup> {
        let created = PendingPickup {
            id: self.next_id(),
            client: pickup.client,
            plate: pickup.plate,
            registry_location: pickup.registry_location,
            submission_date: pickup.submission_date,
            comments: pickup.comments,
            created_at: Utc::now(),
        };
        self.pending_pickups.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        remove_by_id(&self.pending_pickups, id, "Registro de papeles a retirar", |p| p.id)
    }
}

#[async_trait]
impl MaintenanceStore for MemoryDb {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn counts(&self) -> AppResult<RecordCounts> {
        Ok(self.snapshot())
    }

    async fn clear_all(&self) -> AppResult<RecordCounts> {
        let counts = self.snapshot();
        self.vehicles.lock().unwrap().clear();
        self.management_records.lock().unwrap().clear();
        self.document_handovers.lock().unwrap().clear();
        self.pending_pickups.lock().unwrap().clear();
        Ok(counts)
    }
}

/// Almacenamiento caído: toda operación falla como un pool agotado
pub struct FailingDb;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl VehicleStore for FailingDb {
    async fn list(&self, _filters: &ListFilters) -> AppResult<Vec<Vehicle>> {
        unavailable()
    }
    async fn plate_exists(&self, _plate: &str) -> AppResult<bool> {
        unavailable()
    }
    async fn create(&self, _vehicle: NewVehicle) -> AppResult<Vehicle> {
        unavailable()
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unavailable()
    }
    async fn find_by_plate(&self, _plate: &str) -> AppResult<Option<Vehicle>> {
        unavailable()
    }
    async fn list_summaries(&self) -> AppResult<Vec<VehicleSummary>> {
        unavailable()
    }
}

#[async_trait]
impl ManagementRecordStore for FailingDb {
    async fn list(&self, _filters: &ListFilters) -> AppResult<Vec<ManagementRecord>> {
        unavailable()
    }
    async fn create(&self, _record: NewManagementRecord) -> AppResult<ManagementRecord> {
        unavailable()
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unavailable()
    }
}

#[async_trait]
impl DocumentHandoverStore for FailingDb {
    async fn list(&self, _filters: &ListFilters) -> AppResult<Vec<DocumentHandover>> {
        unavailable()
    }
    async fn create(&self, _handover: NewDocumentHandover) -> AppResult<DocumentHandover> {
        unavailable()
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unavailable()
    }
}

#[async_trait]
impl PendingPickupStore for FailingDb {
    async fn list(&self, _filters: &PickupFilters) -> AppResult<Vec<PendingPickup>> {
        unavailable()
    }
    async fn create(&self, _pickup: NewPendingPickup) -> AppResult<PendingPickup> {
        unavailable()
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unavailable()
    }
}

#[async_trait]
impl MaintenanceStore for FailingDb {
    async fn ping(&self) -> AppResult<()> {
        unavailable()
    }
    async fn counts(&self) -> AppResult<RecordCounts> {
        unavailable()
    }
    async fn clear_all(&self) -> AppResult<RecordCounts> {
        unavailable()
    }
}

/// Avisos flash en memoria, indexados por sesión
#[derive(Default)]
pub struct MemoryFlash {
    messages: Mutex<HashMap<String, Vec<FlashMessage>>>,
}

#[async_trait]
impl FlashStore for MemoryFlash {
    async fn push(&self, session_id: &str, message: FlashMessage) -> anyhow::Result<()> {
        self.messages
            .lock()
            .unwrap()
            .entry(session_id.to_string())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn take(&self, session_id: &str) -> anyhow::Result<Vec<FlashMessage>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .remove(session_id)
            .unwrap_or_default())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

impl MemoryFlash {
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().values().all(Vec::is_empty)
    }
}

/// Almacén de avisos caído
pub struct FailingFlash;

#[async_trait]
impl FlashStore for FailingFlash {
    async fn push(&self, _session_id: &str, _message: FlashMessage) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("redis no disponible"))
    }

    async fn take(&self, _session_id: &str) -> anyhow::Result<Vec<FlashMessage>> {
        Err(anyhow::anyhow!("redis no disponible"))
    }

    async fn is_healthy(&self) -> bool {
        false
    }
}

/// Otro alta gana la carrera entre el chequeo previo y el INSERT: el
/// chequeo no ve la patente y la restricción UNIQUE rechaza la fila.
pub struct UniqueRaceVehicles;

#[async_trait]
impl VehicleStore for UniqueRaceVehicles {
    async fn list(&self, _filters: &ListFilters) -> AppResult<Vec<Vehicle>> {
        Ok(Vec::new())
    }
    async fn plate_exists(&self, _plate: &str) -> AppResult<bool> {
        Ok(false)
    }
    async fn create(&self, _vehicle: NewVehicle) -> AppResult<Vehicle> {
        Err(AppError::Duplicate(DUPLICATE_PLATE_MESSAGE.to_string()))
    }
    async fn delete(&self, id: i32) -> AppResult<()> {
        Err(not_found_error("Vehículo", id))
    }
    async fn find_by_plate(&self, _plate: &str) -> AppResult<Option<Vehicle>> {
        Ok(None)
    }
    async fn list_summaries(&self) -> AppResult<Vec<VehicleSummary>> {
        Ok(Vec::new())
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<MemoryDb>,
    pub flash: Arc<MemoryFlash>,
}

pub fn test_app() -> TestApp {
    test_app_with_config(EnvironmentConfig::default())
}

pub fn test_app_with_config(config: EnvironmentConfig) -> TestApp {
    let db = Arc::new(MemoryDb::default());
    let flash = Arc::new(MemoryFlash::default());
    let router = create_router(AppState::new(memory_repositories(&db), flash.clone(), config));
    TestApp { router, db, flash }
}

fn memory_repositories(db: &Arc<MemoryDb>) -> Repositories {
    Repositories {
        vehicles: db.clone(),
        management_records: db.clone(),
        document_handovers: db.clone(),
        pending_pickups: db.clone(),
        maintenance: db.clone(),
    }
}

/// Router en memoria con otro almacén de vehículos
pub fn app_with_vehicles(vehicles: Arc<dyn VehicleStore>) -> TestApp {
    let db = Arc::new(MemoryDb::default());
    let flash = Arc::new(MemoryFlash::default());
    let repositories = Repositories {
        vehicles,
        ..memory_repositories(&db)
    };
    let router = create_router(AppState::new(
        repositories,
        flash.clone(),
        EnvironmentConfig::default(),
    ));
    TestApp { router, db, flash }
}

/// Router en memoria con el almacén de avisos caído
pub fn app_without_flash_store() -> TestApp {
    let db = Arc::new(MemoryDb::default());
    let router = create_router(AppState::new(
        memory_repositories(&db),
        Arc::new(FailingFlash),
        EnvironmentConfig::default(),
    ));
    TestApp {
        router,
        db,
        flash: Arc::new(MemoryFlash::default()),
    }
}

/// Router con un almacenamiento que siempre falla
pub fn failing_app() -> Router {
    let db = Arc::new(FailingDb);
    let repositories = Repositories {
        vehicles: db.clone(),
        management_records: db.clone(),
        document_handovers: db.clone(),
        pending_pickups: db.clone(),
        maintenance: db,
    };
    create_router(AppState::new(
        repositories,
        Arc::new(MemoryFlash::default()),
        EnvironmentConfig::default(),
    ))
}

pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let req = builder.body(Body::empty()).expect("req");
    router.clone().oneshot(req).await.expect("resp")
}

pub async fn post_form(router: &Router, uri: &str, form: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let req = builder.body(Body::from(form.to_string())).expect("req");
    router.clone().oneshot(req).await.expect("resp")
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}

/// Par `nombre=valor` de la cookie de sesión emitida por la respuesta
pub fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie")
        .to_str()
        .expect("ascii");
    let pair = set_cookie.split(';').next().expect("cookie pair");
    assert!(pair.starts_with(SESSION_COOKIE));
    pair.to_string()
}

pub fn assert_redirect(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).expect("location"),
        location
    );
}

/// Avisos del siguiente listado para la sesión dada
pub async fn notices(router: &Router, list_uri: &str, cookie: &str) -> Vec<serde_json::Value> {
    let body = json_body(get(router, list_uri, Some(cookie)).await).await;
    body["notices"].as_array().cloned().unwrap_or_default()
}

pub const VEHICLE_FORM: &str =
    "client=Juan+Perez&model=Toyota+Corolla&purchase_location=Agencia+X&color=Rojo&plate=ab123cd";
