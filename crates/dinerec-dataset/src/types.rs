use serde::Deserialize;

/// One raw dataset row, before cleaning.
///
/// Field names follow the upstream export; `city` is accepted as an alias
/// for `listed_in_city`. Everything except `name` is optional — cleaning
/// decides what survives.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRestaurantRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "city")]
    pub listed_in_city: Option<String>,
    /// Comma-separated cuisine names, e.g. `"North Indian, Chinese"`.
    #[serde(default)]
    pub cuisines: Option<String>,
    /// Rating string, e.g. `"4.1/5"`, `"NEW"`, `"-"`.
    #[serde(default)]
    pub rate: Option<String>,
    #[serde(default)]
    pub votes: Option<i64>,
    /// Cost string, e.g. `"800"`, `"1,200"`, `"₹500"`.
    #[serde(default, alias = "approx_cost(for two people)")]
    pub approx_cost_for_two: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rest_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
