//! Kubernetes client for kubepage
//!
//! This crate implements the fetcher's `LogSource` contract against the
//! Kubernetes API: pod discovery by label selector and byte-bounded raw
//! log retrieval.

mod client;

pub use client::{DEFAULT_CONTAINER_NAME, KubeClient};
