//! Shapes of common appliance payloads.
//!
//! These are for callers decoding response bodies; the request path never
//! touches them. Missing and `null` fields decode to their zero value.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry from `GET devices`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Device {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mod_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub extrahop_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_mod_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub discover_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vlanid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub macaddr: String,
    pub vendor: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_l3: bool,
    pub ipaddr4: Option<String>,
    pub ipaddr6: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub device_class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_name: String,
    pub custom_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cdp_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dhcp_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub netbios_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dns_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub analysis_level: i64,
}

impl Device {
    /// First non-empty of display name, DNS name, default name.
    pub fn name(&self) -> &str {
        [&self.display_name, &self.dns_name, &self.default_name]
            .into_iter()
            .find(|name| !name.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn address(&self) -> Option<&str> {
        self.ipaddr4.as_deref().or(self.ipaddr6.as_deref())
    }
}

/// Result page of a record query.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExaQuery {
    #[serde(deserialize_with = "null_as_default")]
    pub from: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub until: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<ExaIcaRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExaIcaRecord {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "_index", deserialize_with = "null_as_default")]
    pub index: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(rename = "_source", deserialize_with = "null_as_default")]
    pub source: IcaClose,
}

/// Body of an `~ica_close` record.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct IcaClose {
    #[serde(deserialize_with = "null_as_default")]
    pub application: ApiObject,
    #[serde(deserialize_with = "null_as_default")]
    pub flow_id: String,
    pub client: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub client_addr: ApiObject,
    #[serde(deserialize_with = "null_as_default")]
    pub client_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub server: ApiObject,
    #[serde(deserialize_with = "null_as_default")]
    pub server_addr: ApiObject,
    #[serde(deserialize_with = "null_as_default")]
    pub server_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub client_zero_wnd: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_zero_wnd: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub auth_domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_aborted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_clean_shutdown: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_encrypted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_shared_session: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub launch_params: String,
    #[serde(deserialize_with = "null_as_default")]
    pub load_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub login_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub round_trip_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_bytes: i64,
    #[serde(rename = "clientL2Bytes", deserialize_with = "null_as_default")]
    pub client_l2_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_pkts: i64,
    #[serde(rename = "clientRTO", deserialize_with = "null_as_default")]
    pub client_rto: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_bytes: i64,
    #[serde(rename = "serverL2Bytes", deserialize_with = "null_as_default")]
    pub server_l2_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_pkts: i64,
    #[serde(rename = "serverRTO", deserialize_with = "null_as_default")]
    pub server_rto: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vlan: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub program: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiObject {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub object_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Vec<String>,
}

/// Response of `POST metrics/totalbyobject` grouped by key.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MetricsTotalByGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
    #[serde(deserialize_with = "null_as_default")]
    pub cycle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub from: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub until: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "null_as_default")]
    pub oid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Value {
    #[serde(deserialize_with = "null_as_default")]
    pub key: KeyDetail,
    #[serde(deserialize_with = "null_as_default")]
    pub vtype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Vec<ValueDetail>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ValueDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub key: ValueKeyDetail,
    #[serde(deserialize_with = "null_as_default")]
    pub vtype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KeyDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub key_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub str: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ValueKeyDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub key_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device_oid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub addr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub str: String,
}

/// Field description from a record format.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_type: String,
    pub default_visible: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}
