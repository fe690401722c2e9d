//! Kubernetes pod specifications for Kibana.
//!
//! [`new_pod_spec`] turns a [`PodSpecParams`] into a [`PodSpec`] made of fixed
//! defaults plus the three caller-supplied overrides: the Kibana version, the
//! Elasticsearch URL and an optional custom image. It is pure and total.
//!
//! ```
//! use kibana_pod_spec::{PodSpecParams, new_pod_spec};
//!
//! let spec = new_pod_spec(&PodSpecParams::new("7.1.0", "http://es:9200"));
//! assert_eq!(
//!     spec.containers[0].image.as_deref(),
//!     Some("docker.elastic.co/kibana/kibana:7.1.0")
//! );
//! ```
//!
//! [`PodSpec`]: k8s_openapi::api::core::v1::PodSpec

pub mod consts;
mod error;
mod params;
mod pod;
mod pod_spec;

pub use self::{
    error::Error,
    params::PodSpecParams,
    pod::new_pod,
    pod_spec::new_pod_spec,
};
