//! Extensions to `k8s_openapi` types for reading back pods created by this
//! tool.

mod pod;

pub use self::pod::PodExt;
