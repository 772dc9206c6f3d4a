use serde::{Deserialize, Serialize};

/// A lost or found report as returned by the listing endpoints.
///
/// The two report kinds share most columns but disagree on the rest (lost
/// reports carry `user_*` contact fields and `date_lost`, found reports
/// carry `finder_*` fields, `date_found` and custody details), so
/// everything variant-specific is optional and missing fields fall back to
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category_name: Option<String>,
    pub location_name: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub date_lost: Option<String>,
    pub date_found: Option<String>,
    pub current_location: Option<String>,
    pub finder_notes: Option<String>,
    pub is_claimed: Option<i64>,
    pub is_private: Option<i64>,
    pub privacy_expires_at: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub finder_name: Option<String>,
    pub finder_email: Option<String>,
    pub finder_phone: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

/// One page of a listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: Option<Pagination>,
}

/// Query parameters accepted by the lost/found listing endpoints.
///
/// Lost items are private to their owner, so the lost listing returns an
/// empty page unless `user_email` is supplied.
#[derive(Debug, Default, Serialize)]
pub struct ItemQuery {
    pub user_email: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub include_matches: Option<bool>,
}

/// Report submission payload. `report_type` selects the report kind
/// (`"lost"` or `"found"`); the remaining fields are the columns the two
/// kinds share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataReport {
    pub report_type: String,
    pub title: String,
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResponseReport {
    pub message: String,
    pub report_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_query_skips_unset_fields() {
        let query = ItemQuery {
            user_email: Some("flash@example.edu".to_string()),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "user_email=flash%40example.edu&limit=25"
        );

        assert_eq!(serde_urlencoded::to_string(ItemQuery::default()).unwrap(), "");
    }

    #[test]
    fn item_decoding_tolerates_missing_columns() {
        // A found report has no `user_*` or `date_lost` columns at all.
        let item: Item = serde_json::from_str(
            r#"{
                "id": 12,
                "title": "Blue backpack",
                "finder_email": "finder@example.edu",
                "date_found": "2025-03-02",
                "is_claimed": 0
            }"#,
        )
        .unwrap();

        assert_eq!(item.id, 12);
        assert_eq!(item.title, "Blue backpack");
        assert_eq!(item.finder_email.as_deref(), Some("finder@example.edu"));
        assert_eq!(item.is_claimed, Some(0));
        assert_eq!(item.user_email, None);
        assert_eq!(item.date_lost, None);
    }
}
