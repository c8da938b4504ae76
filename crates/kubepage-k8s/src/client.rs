use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;
use kube::Api;
use kube::api::{ListParams, LogParams};
use tracing::debug;

use kubepage_fetcher::LogSource;

/// Container logs are read from unless the caller overrides it.
pub const DEFAULT_CONTAINER_NAME: &str = "application";

/// Kubernetes client wrapper
pub struct KubeClient {
    client: kube::Client,
    container: String,
}

impl KubeClient {
    /// Connect using the local kubeconfig, falling back to the in-cluster
    /// service account when running inside a pod.
    pub async fn new(container: impl Into<String>) -> Result<Self> {
        let config = kube::Config::infer()
            .await
            .context("Failed to infer Kubernetes config. Is kubectl configured?")?;

        let client =
            kube::Client::try_from(config).context("Failed to create Kubernetes client")?;

        Ok(Self {
            client,
            container: container.into(),
        })
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl LogSource for KubeClient {
    async fn list_pods(
        &self,
        namespace: &str,
        labels: &BTreeMap<String, String>,
    ) -> Result<Vec<String>> {
        let selector = labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",");

        let list = self
            .pods(namespace)
            .list(&ListParams::default().labels(&selector))
            .await
            .context(format!("Failed to list pods in namespace {}", namespace))?;

        debug!(namespace = %namespace, selector = %selector, pods = list.items.len(), "listed pods");

        Ok(list
            .items
            .into_iter()
            .filter_map(|pod| pod.metadata.name)
            .collect())
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        pod: &str,
        since_time: Option<&str>,
        limit_bytes: i64,
    ) -> Result<String> {
        let mut params = LogParams {
            container: Some(self.container.clone()),
            timestamps: true,
            limit_bytes: Some(limit_bytes),
            ..LogParams::default()
        };

        // An unparsable since-time falls back to no lower bound rather than
        // failing the pod.
        if let Some(since) = since_time {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(since) {
                params.since_time = Some(parsed.with_timezone(&Utc));
            }
        }

        self.pods(namespace)
            .logs(pod, &params)
            .await
            .context(format!("Failed to fetch logs from pod {}", pod))
    }
}
