pub mod prelude {
    use std::sync::Mutex;

    pub use engelsiz_core::{
        entities::*,
        gateways::geocode::{GeoCodingGateway, GeoQuery},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use engelsiz_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            flows::initialize_database(&db_connections, None).unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, role: Role) -> User {
            let user = User::build()
                .email(email)
                .password("secret1")
                .role(role)
                .finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| conn.create_user(&user))
                .unwrap();
            user
        }

        pub fn create_report(&self, report: ObstacleReport) -> String {
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| conn.create_report(&report))
                .unwrap();
            report.id.into()
        }
    }

    /// Answers queries with the given results in order
    /// and nothing afterwards.
    #[derive(Default)]
    pub struct MockGeoGateway {
        queries: Mutex<Vec<GeoQuery>>,
        results: Mutex<Vec<Option<(f64, f64)>>>,
    }

    impl MockGeoGateway {
        pub fn with_results(mut results: Vec<Option<(f64, f64)>>) -> Self {
            results.reverse();
            Self {
                queries: Mutex::default(),
                results: Mutex::new(results),
            }
        }

        pub fn query_count(&self) -> usize {
            self.queries.lock().unwrap().len()
        }
    }

    impl GeoCodingGateway for MockGeoGateway {
        fn resolve_query(&self, query: &GeoQuery) -> Option<(f64, f64)> {
            self.queries.lock().unwrap().push(query.clone());
            self.results.lock().unwrap().pop().flatten()
        }
    }
}
