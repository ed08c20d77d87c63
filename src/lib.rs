//! nuget-index-check - Wait until a NuGet package version is indexed.
//!
//! After a package is pushed, nuget.org takes a while before the version can
//! be downloaded. This library validates the package coordinates and then
//! polls the registry's download URL on a fixed interval until it answers
//! `200 OK` or the attempt budget is spent.
//!
//! # Example
//!
//! ```no_run
//! use nuget_index_check::{CheckRequest, CheckSettings, IndexChecker};
//!
//! #[tokio::main]
//! async fn main() {
//!     let checker = IndexChecker::new(&CheckSettings::default()).unwrap();
//!     let request = CheckRequest {
//!         package: "Newtonsoft.Json".to_string(),
//!         version: "13.0.3".to_string(),
//!         attempts: Some("5".to_string()),
//!     };
//!     let report = checker.check(&request).await;
//!     println!("indexed: {:?}", report.indexed());
//! }
//! ```

pub mod checker;
pub mod config;
pub mod notify;
pub mod registry;
pub mod types;
pub mod validation;

pub use checker::{CheckRequest, CheckSettings, IndexChecker};
pub use config::Config;
pub use types::{
    CheckOutcome, CheckReport, EventLevel, EventLog, IndexCheckError, LogEvent, ProbeOutcome,
    Result, ValidationError,
};
