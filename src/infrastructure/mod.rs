//! Infrastructure layer - Storage backends, services and process plumbing

pub mod logging;
pub mod national_team;
pub mod service_util;
pub mod storage;
