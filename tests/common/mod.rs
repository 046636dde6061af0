#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use opencdms_gateway::api::middleware::rate_limit::RateLimit;
use opencdms_gateway::application::services::{
    AuthService, PhysicalFeatureClassService, StationService,
};
use opencdms_gateway::domain::entities::{
    AuthUser, NewPhysicalFeatureClass, NewUser, PhysicalFeatureClass, PhysicalFeatureClassPatch,
    Station,
};
use opencdms_gateway::domain::repositories::{
    FeatureClassFilter, PhysicalFeatureClassRepository, StationRepository, UserRepository,
};
use opencdms_gateway::error::AppError;
use opencdms_gateway::infrastructure::security::{PasswordHasher, TokenService};
use opencdms_gateway::mounts::{MountSettings, build_mounts};
use opencdms_gateway::routes::{RouterOptions, app_router};
use opencdms_gateway::state::AppState;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SECRET: &str = "integration-test-secret";

pub fn hasher() -> PasswordHasher {
    PasswordHasher::new(SECRET)
}

/// Accounts held in memory, keyed by username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<String, AuthUser>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn get(&self, username: &str) -> Option<AuthUser> {
        self.users.lock().unwrap().get(username).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn update<F: FnOnce(&mut AuthUser)>(&self, id: i64, f: F) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .values_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))?;
        f(user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthUser>, AppError> {
        Ok(self.get(username))
    }

    async fn create(&self, new_user: NewUser) -> Result<AuthUser, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&new_user.username) {
            return Err(AppError::conflict(
                "Username already exists",
                json!({ "username": new_user.username }),
            ));
        }

        let user = AuthUser {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: new_user.username,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            is_active: new_user.is_active,
            date_joined: Utc::now(),
            last_login: None,
        };
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn set_password(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        self.update(id, |u| u.password_hash = password_hash.to_string())
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError> {
        self.update(id, |u| u.is_active = is_active)
    }

    async fn touch_last_login(&self, id: i64) -> Result<(), AppError> {
        self.update(id, |u| u.last_login = Some(Utc::now()))
    }

    async fn list(&self) -> Result<Vec<AuthUser>, AppError> {
        let mut users: Vec<_> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|_, u| u.id != id);
        if users.len() == before {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Stations held in memory. `set_down(true)` makes `ping` fail.
#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: Mutex<BTreeMap<String, Station>>,
    down: AtomicBool,
}

impl InMemoryStationRepository {
    pub fn insert(&self, station: Station) {
        self.stations
            .lock()
            .unwrap()
            .insert(station.station_id.clone(), station);
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn list_all(&self) -> Result<Vec<Station>, AppError> {
        Ok(self.stations.lock().unwrap().values().cloned().collect())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Station>, AppError> {
        Ok(self
            .stations
            .lock()
            .unwrap()
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, station_id: &str) -> Result<Option<Station>, AppError> {
        Ok(self.stations.lock().unwrap().get(station_id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::internal("connection refused", json!({})));
        }
        Ok(())
    }
}

/// Feature classes held in memory, ordered by code.
#[derive(Default)]
pub struct InMemoryPhysicalFeatureClassRepository {
    classes: Mutex<BTreeMap<String, PhysicalFeatureClass>>,
}

impl InMemoryPhysicalFeatureClassRepository {
    pub fn insert(&self, class: PhysicalFeatureClass) {
        self.classes
            .lock()
            .unwrap()
            .insert(class.feature_class.clone(), class);
    }

    pub fn get(&self, feature_class: &str) -> Option<PhysicalFeatureClass> {
        self.classes.lock().unwrap().get(feature_class).cloned()
    }
}

#[async_trait]
impl PhysicalFeatureClassRepository for InMemoryPhysicalFeatureClassRepository {
    async fn list(&self, filter: FeatureClassFilter) -> Result<Vec<PhysicalFeatureClass>, AppError> {
        Ok(self
            .classes
            .lock()
            .unwrap()
            .values()
            .filter(|c| filter.refers_to.is_none() || c.refers_to == filter.refers_to)
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn find(&self, feature_class: &str) -> Result<Option<PhysicalFeatureClass>, AppError> {
        Ok(self.get(feature_class))
    }

    async fn create(
        &self,
        new_class: NewPhysicalFeatureClass,
    ) -> Result<PhysicalFeatureClass, AppError> {
        let mut classes = self.classes.lock().unwrap();
        if classes.contains_key(&new_class.feature_class) {
            return Err(AppError::conflict(
                "Physical feature class already exists",
                json!({ "feature_class": new_class.feature_class }),
            ));
        }

        let class = PhysicalFeatureClass {
            feature_class: new_class.feature_class,
            description: new_class.description,
            refers_to: new_class.refers_to,
        };
        classes.insert(class.feature_class.clone(), class.clone());
        Ok(class)
    }

    async fn update(
        &self,
        feature_class: &str,
        patch: PhysicalFeatureClassPatch,
    ) -> Result<PhysicalFeatureClass, AppError> {
        let mut classes = self.classes.lock().unwrap();
        let current = classes.remove(feature_class).ok_or_else(|| {
            AppError::not_found(
                "Physical feature class not found",
                json!({ "feature_class": feature_class }),
            )
        })?;

        let updated = patch.apply(current);
        classes.insert(updated.feature_class.clone(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, feature_class: &str) -> Result<bool, AppError> {
        Ok(self.classes.lock().unwrap().remove(feature_class).is_some())
    }
}

/// Gateway state wired to in-memory repositories, with handles kept for
/// seeding and inspection.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub stations: Arc<InMemoryStationRepository>,
    pub classes: Arc<InMemoryPhysicalFeatureClassRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let stations = Arc::new(InMemoryStationRepository::default());
        let classes = Arc::new(InMemoryPhysicalFeatureClassRepository::default());

        let state = AppState {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                hasher(),
                TokenService::new(SECRET, 30),
            )),
            station_service: Arc::new(StationService::new(stations.clone())),
            feature_class_service: Arc::new(PhysicalFeatureClassService::new(
                classes.clone(),
                stations.clone(),
            )),
        };

        Self {
            state,
            users,
            stations,
            classes,
        }
    }

    /// Stores an active account with `password`.
    pub async fn seed_user(&self, username: &str, password: &str) -> AuthUser {
        self.users
            .create(NewUser {
                username: username.to_string(),
                password_hash: hasher().hash(password).unwrap(),
                first_name: String::new(),
                last_name: String::new(),
                email: format!("{username}@example.org"),
                is_active: true,
            })
            .await
            .unwrap()
    }

    /// Seeds an account and returns a bearer token for it.
    pub async fn token(&self) -> String {
        if self.users.get("observer").is_none() {
            self.seed_user("observer", "observer-password").await;
        }
        self.state
            .auth_service
            .sign_in("observer", "observer-password")
            .await
            .unwrap()
            .token
    }

    pub fn seed_station(&self, station_id: &str, name: &str) {
        self.stations
            .insert(Station::new(station_id, Some(name.to_string())));
    }

    pub fn seed_class(&self, feature_class: &str, refers_to: Option<&str>) {
        self.classes.insert(PhysicalFeatureClass {
            feature_class: feature_class.to_string(),
            description: Some(format!("{feature_class} description")),
            refers_to: refers_to.map(str::to_string),
        });
    }

    /// Gateway with only the Climsoft mount.
    pub fn server(&self) -> TestServer {
        self.server_with(climsoft_only(), RouterOptions::default())
    }

    pub fn server_with(&self, settings: MountSettings, options: RouterOptions) -> TestServer {
        let mounts = build_mounts(&settings, &self.state).unwrap();
        let app = app_router(self.state.clone(), &mounts, options);
        TestServer::new(app).unwrap()
    }
}

pub fn climsoft_only() -> MountSettings {
    MountSettings {
        climsoft_enabled: true,
        surface_url: None,
        mch_url: None,
        upstream_timeout: Duration::from_secs(5),
        sign_in_rate_limit: RateLimit::Disabled,
    }
}
