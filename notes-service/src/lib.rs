pub mod api {
    pub mod handler {
        pub mod health;
        pub mod note;
    }
    pub mod router;
    pub mod state;
}
pub mod config;
pub mod domain {
    pub mod note;
}
pub mod error;
pub mod infrastructure {
    pub mod note;
}
pub mod shutdown;
pub mod telemetry;
