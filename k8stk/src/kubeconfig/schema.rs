//! Kubeconfig document schema.
//!
//! This module defines the in-memory document model shared by merging,
//! context removal, validation and serialization. Field names on the wire
//! follow the standard kubeconfig layout; fields outside this schema are
//! ignored when parsing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A complete kubeconfig document.
///
/// # Examples
///
/// ```
/// use k8stk::{ContextRef, Kubeconfig, NamedContext};
///
/// let mut doc = Kubeconfig::default();
/// doc.contexts.push(NamedContext::new("dev", ContextRef::new("c1", "u1")));
/// doc.current_context = "dev".to_string();
///
/// assert!(doc.context("dev").is_some());
/// assert!(doc.cluster("c1").is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Kubeconfig {
    /// Passthrough API version, usually `v1`.
    #[serde(rename = "apiVersion", default, deserialize_with = "null_as_default")]
    pub api_version: String,

    /// Named cluster endpoints.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,

    /// Named contexts, each linking a cluster to a user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,

    /// Name of the active context.
    #[serde(
        rename = "current-context",
        default,
        deserialize_with = "null_as_default"
    )]
    pub current_context: String,

    /// Passthrough kind, usually `Config`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Passthrough preferences.
    #[serde(default, deserialize_with = "scalar_map")]
    pub preferences: BTreeMap<String, String>,

    /// Named user credentials.
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<NamedUser>,
}

/// A cluster entry: a name plus its connection details.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct NamedCluster {
    /// Connection details.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: Cluster,

    /// Unique cluster name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Connection details for a cluster.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Cluster {
    /// Base64 certificate authority bundle.
    #[serde(
        rename = "certificate-authority-data",
        default,
        deserialize_with = "null_as_default"
    )]
    pub certificate_authority_data: String,

    /// API server endpoint.
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
}

/// A user entry: a name plus its credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct NamedUser {
    /// Unique user name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Client credentials.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: UserCredentials,
}

/// Client certificate credentials for a user.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct UserCredentials {
    /// Base64 client certificate.
    #[serde(
        rename = "client-certificate-data",
        default,
        deserialize_with = "null_as_default"
    )]
    pub client_certificate_data: String,

    /// Base64 client key.
    #[serde(
        rename = "client-key-data",
        default,
        deserialize_with = "null_as_default"
    )]
    pub client_key_data: String,
}

/// A context entry: a name plus the cluster and user it links.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct NamedContext {
    /// The cluster/user pair.
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: ContextRef,

    /// Unique context name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// References from a context to a cluster and a user, by name.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ContextRef {
    /// Name of the referenced cluster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: String,

    /// Name of the referenced user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
}

impl NamedCluster {
    /// Creates a cluster entry.
    #[must_use]
    pub fn new(name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            cluster: Cluster {
                certificate_authority_data: String::new(),
                server: server.into(),
            },
            name: name.into(),
        }
    }

    /// Sets the certificate authority data.
    #[must_use]
    pub fn with_ca_data(mut self, data: impl Into<String>) -> Self {
        self.cluster.certificate_authority_data = data.into();
        self
    }
}

impl NamedUser {
    /// Creates a user entry with the given client certificate and key.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        certificate_data: impl Into<String>,
        key_data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user: UserCredentials {
                client_certificate_data: certificate_data.into(),
                client_key_data: key_data.into(),
            },
        }
    }
}

impl NamedContext {
    /// Creates a context entry.
    #[must_use]
    pub fn new(name: impl Into<String>, context: ContextRef) -> Self {
        Self {
            context,
            name: name.into(),
        }
    }
}

impl ContextRef {
    /// Creates a reference pair.
    #[must_use]
    pub fn new(cluster: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            user: user.into(),
        }
    }
}

impl Kubeconfig {
    /// Looks up a cluster by name.
    #[must_use]
    pub fn cluster(&self, name: &str) -> Option<&NamedCluster> {
        self.clusters.iter().find(|c| c.name == name)
    }

    /// Looks up a user by name.
    #[must_use]
    pub fn user(&self, name: &str) -> Option<&NamedUser> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Looks up a context by name.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&NamedContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Cluster names in document order.
    #[must_use]
    pub fn cluster_names(&self) -> Vec<&str> {
        self.clusters.iter().map(|c| c.name.as_str()).collect()
    }

    /// User names in document order.
    #[must_use]
    pub fn user_names(&self) -> Vec<&str> {
        self.users.iter().map(|u| u.name.as_str()).collect()
    }

    /// Context names in document order.
    #[must_use]
    pub fn context_names(&self) -> Vec<&str> {
        self.contexts.iter().map(|c| c.name.as_str()).collect()
    }

    /// Names of the contexts that reference the named cluster.
    #[must_use]
    pub fn contexts_using_cluster(&self, name: &str) -> Vec<&str> {
        self.contexts
            .iter()
            .filter(|c| c.context.cluster == name)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Names of the contexts that reference the named user.
    #[must_use]
    pub fn contexts_using_user(&self, name: &str) -> Vec<&str> {
        self.contexts
            .iter()
            .filter(|c| c.context.user == name)
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Treats an explicit YAML `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `preferences`, accepting scalar values of any type as strings.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::String(s) => s,
                other => {
                    return Err(D::Error::custom(format!(
                        "preference '{key}' must be a scalar, found {other:?}"
                    )))
                }
            };
            Ok((key, text))
        })
        .collect()
}
